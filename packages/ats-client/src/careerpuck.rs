//! CareerPuck job board adapter.
//!
//! CareerPuck returns aggressively entity-encoded content, frequently double
//! or triple encoded, so decoding runs until the text is stable.

use serde::Deserialize;

use crate::error::{AtsError, Result};
use crate::html;
use crate::types::{parse_timestamp, NormalizedJob};
use crate::AtsClient;

const PROVIDER: &str = "CareerPuck";
const BASE_URL: &str = "https://api.careerpuck.com";

#[derive(Debug, Clone, Deserialize)]
struct CareerPuckResponse {
    #[serde(default)]
    jobs: Vec<CareerPuckJob>,
}

#[derive(Debug, Clone, Deserialize)]
struct CareerPuckJob {
    permalink: String,
    title: String,
    content: Option<String>,
    location: Option<String>,
    #[serde(rename = "publicUrl")]
    public_url: String,
    #[serde(rename = "postedAt")]
    posted_at: Option<String>,
    offices: Option<Vec<CareerPuckOffice>>,
    departments: Option<Vec<CareerPuckDepartment>>,
    #[serde(rename = "workType")]
    work_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct CareerPuckOffice {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CareerPuckDepartment {
    name: String,
}

pub(crate) async fn fetch_jobs(client: &AtsClient, board_slug: &str) -> Result<Vec<NormalizedJob>> {
    let url = format!(
        "{}/v1/public/job-boards/{}",
        client.base_or(BASE_URL),
        board_slug
    );
    let resp = client.http.get(&url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AtsError::Api {
            provider: PROVIDER,
            status: status.as_u16(),
        });
    }

    let data: CareerPuckResponse = resp.json().await.map_err(|e| AtsError::Payload {
        provider: PROVIDER,
        message: e.to_string(),
    })?;

    tracing::debug!(board = board_slug, count = data.jobs.len(), "Fetched CareerPuck postings");
    Ok(data.jobs.into_iter().map(normalize).collect())
}

fn normalize(job: CareerPuckJob) -> NormalizedJob {
    NormalizedJob {
        external_id: job.permalink,
        title: job.title.trim().to_string(),
        location: job
            .offices
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|office| office.name)
            .filter(|s| !s.is_empty())
            .or(job.location.filter(|s| !s.is_empty())),
        description: job
            .content
            .filter(|c| !c.is_empty())
            .map(|c| html::decode_entities(&c)),
        url: job.public_url,
        department: job
            .departments
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|d| d.name)
            .filter(|s| !s.is_empty()),
        employment_type: job.work_type.filter(|s| !s.is_empty()),
        published_at: job.posted_at.as_deref().and_then(parse_timestamp),
    }
}
