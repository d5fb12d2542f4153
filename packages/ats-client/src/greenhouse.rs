//! Greenhouse job board adapter.
//!
//! Uses the public boards API, which returns every posting in one response
//! when `content=true` is requested.

use serde::Deserialize;

use crate::error::{AtsError, Result};
use crate::html;
use crate::types::{parse_timestamp, NormalizedJob};
use crate::AtsClient;

const PROVIDER: &str = "Greenhouse";
const BASE_URL: &str = "https://boards-api.greenhouse.io";

#[derive(Debug, Clone, Deserialize)]
struct GreenhouseResponse {
    #[serde(default)]
    jobs: Vec<GreenhouseJob>,
}

#[derive(Debug, Clone, Deserialize)]
struct GreenhouseJob {
    id: i64,
    title: String,
    location: Option<GreenhouseLocation>,
    content: Option<String>,
    absolute_url: String,
    #[serde(default)]
    departments: Vec<GreenhouseDepartment>,
    metadata: Option<Vec<GreenhouseMetadata>>,
    first_published: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GreenhouseLocation {
    name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GreenhouseDepartment {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GreenhouseMetadata {
    name: String,
    value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GreenhouseBoard {
    content: Option<String>,
}

pub(crate) async fn fetch_jobs(client: &AtsClient, board_token: &str) -> Result<Vec<NormalizedJob>> {
    let url = format!(
        "{}/v1/boards/{}/jobs?content=true",
        client.base_or(BASE_URL),
        board_token
    );
    let resp = client.http.get(&url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AtsError::Api {
            provider: PROVIDER,
            status: status.as_u16(),
        });
    }

    let data: GreenhouseResponse = resp.json().await.map_err(|e| AtsError::Payload {
        provider: PROVIDER,
        message: e.to_string(),
    })?;

    tracing::debug!(board = board_token, count = data.jobs.len(), "Fetched Greenhouse postings");
    Ok(data.jobs.into_iter().map(normalize).collect())
}

/// Board-level company blurb. A missing board or empty content is simply no
/// description, not an error.
pub(crate) async fn fetch_company_blurb(
    client: &AtsClient,
    board_token: &str,
) -> Result<Option<String>> {
    let url = format!("{}/v1/boards/{}", client.base_or(BASE_URL), board_token);
    let resp = client.http.get(&url).send().await?;

    if !resp.status().is_success() {
        return Ok(None);
    }

    let board: GreenhouseBoard = resp.json().await.map_err(|e| AtsError::Payload {
        provider: PROVIDER,
        message: e.to_string(),
    })?;

    Ok(board
        .content
        .map(|content| html::plain_text_blurb(&content))
        .filter(|text| !text.is_empty()))
}

fn normalize(job: GreenhouseJob) -> NormalizedJob {
    NormalizedJob {
        external_id: job.id.to_string(),
        title: job.title,
        location: job
            .location
            .and_then(|l| l.name)
            .filter(|s| !s.is_empty()),
        description: job
            .content
            .filter(|c| !c.is_empty())
            .map(|c| html::decode_entities(&c)),
        url: job.absolute_url,
        department: job
            .departments
            .into_iter()
            .next()
            .map(|d| d.name)
            .filter(|s| !s.is_empty()),
        employment_type: job
            .metadata
            .unwrap_or_default()
            .into_iter()
            .find(|m| m.name == "Employment Type")
            .and_then(|m| m.value)
            .filter(|s| !s.is_empty()),
        published_at: job.first_published.as_deref().and_then(parse_timestamp),
    }
}
