//! Ashby job board adapter.

use serde::Deserialize;

use crate::error::{AtsError, Result};
use crate::html;
use crate::types::{parse_timestamp, NormalizedJob};
use crate::AtsClient;

const PROVIDER: &str = "Ashby";
const BASE_URL: &str = "https://api.ashbyhq.com";

#[derive(Debug, Clone, Deserialize)]
struct AshbyBoard {
    #[serde(default)]
    jobs: Vec<AshbyJob>,
    /// Board-level company blurb, only present for some boards.
    description: Option<String>,
    #[serde(rename = "descriptionHtml")]
    description_html: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct AshbyJob {
    id: String,
    title: String,
    location: Option<String>,
    department: Option<String>,
    team: Option<String>,
    #[serde(rename = "employmentType")]
    employment_type: Option<String>,
    #[serde(rename = "descriptionHtml")]
    description_html: Option<String>,
    #[serde(rename = "descriptionPlain")]
    description_plain: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    #[serde(rename = "jobUrl")]
    job_url: String,
}

async fn fetch_board(client: &AtsClient, board_token: &str) -> Result<reqwest::Response> {
    let url = format!(
        "{}/posting-api/job-board/{}",
        client.base_or(BASE_URL),
        board_token
    );
    Ok(client.http.get(&url).send().await?)
}

pub(crate) async fn fetch_jobs(client: &AtsClient, board_token: &str) -> Result<Vec<NormalizedJob>> {
    let resp = fetch_board(client, board_token).await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AtsError::Api {
            provider: PROVIDER,
            status: status.as_u16(),
        });
    }

    let board: AshbyBoard = resp.json().await.map_err(|e| AtsError::Payload {
        provider: PROVIDER,
        message: e.to_string(),
    })?;

    tracing::debug!(board = board_token, count = board.jobs.len(), "Fetched Ashby postings");
    Ok(board.jobs.into_iter().map(normalize).collect())
}

/// Company blurb from the same board endpoint the jobs come from.
pub(crate) async fn fetch_company_blurb(
    client: &AtsClient,
    board_token: &str,
) -> Result<Option<String>> {
    let resp = fetch_board(client, board_token).await?;

    if !resp.status().is_success() {
        return Ok(None);
    }

    let board: AshbyBoard = resp.json().await.map_err(|e| AtsError::Payload {
        provider: PROVIDER,
        message: e.to_string(),
    })?;

    Ok(board
        .description
        .filter(|s| !s.is_empty())
        .or(board.description_html.filter(|s| !s.is_empty()))
        .map(|text| html::plain_text_blurb(&text))
        .filter(|text| !text.is_empty()))
}

fn normalize(job: AshbyJob) -> NormalizedJob {
    NormalizedJob {
        external_id: job.id,
        title: job.title,
        location: job.location.filter(|s| !s.is_empty()),
        description: job
            .description_html
            .filter(|s| !s.is_empty())
            .or(job.description_plain.filter(|s| !s.is_empty())),
        url: job.job_url,
        department: job
            .department
            .filter(|s| !s.is_empty())
            .or(job.team.filter(|s| !s.is_empty())),
        employment_type: job.employment_type.filter(|s| !s.is_empty()),
        published_at: job.published_at.as_deref().and_then(parse_timestamp),
    }
}
