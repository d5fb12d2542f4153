//! Workday job board adapter.
//!
//! Workday is the one paginated provider: postings come back 20 at a time
//! from a POST endpoint until the reported total is reached, and the full
//! description only exists in a per-posting detail record. A failed detail
//! fetch degrades that posting to list-level fields rather than failing the
//! company.

use serde::Deserialize;
use serde_json::json;

use crate::error::{AtsError, Result};
use crate::html;
use crate::types::{parse_timestamp, NormalizedJob};
use crate::AtsClient;

const PROVIDER: &str = "Workday";
const PAGE_SIZE: i64 = 20;

#[derive(Debug, Clone, Deserialize)]
struct WorkdayJobsResponse {
    total: i64,
    #[serde(rename = "jobPostings", default)]
    job_postings: Vec<WorkdayJobPosting>,
}

#[derive(Debug, Clone, Deserialize)]
struct WorkdayJobPosting {
    title: String,
    #[serde(rename = "externalPath")]
    external_path: String,
    #[serde(rename = "timeType")]
    time_type: Option<String>,
    #[serde(rename = "locationsText")]
    locations_text: Option<String>,
    #[serde(rename = "bulletFields", default)]
    bullet_fields: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct WorkdayJobDetail {
    #[serde(rename = "jobPostingInfo")]
    job_posting_info: Option<WorkdayJobPostingInfo>,
}

#[derive(Debug, Clone, Deserialize)]
struct WorkdayJobPostingInfo {
    #[serde(rename = "jobDescription")]
    job_description: Option<String>,
    #[serde(rename = "postedDate")]
    posted_date: Option<String>,
    #[serde(rename = "timeType")]
    time_type: Option<String>,
    #[serde(rename = "jobFamily", default)]
    job_family: Vec<WorkdayJobFamily>,
}

#[derive(Debug, Clone, Deserialize)]
struct WorkdayJobFamily {
    descriptor: String,
}

/// Workday identifiers carry three segments: `tenant/instance/site`.
fn parse_ats_id(ats_id: &str) -> Result<(String, String, String)> {
    let parts: Vec<&str> = ats_id.split('/').collect();
    match parts.as_slice() {
        [tenant, instance, site] if !tenant.is_empty() && !instance.is_empty() && !site.is_empty() => {
            Ok((tenant.to_string(), instance.to_string(), site.to_string()))
        }
        _ => Err(AtsError::InvalidIdentifier(format!(
            "{} (expected tenant/instance/site)",
            ats_id
        ))),
    }
}

pub(crate) async fn fetch_jobs(client: &AtsClient, ats_id: &str) -> Result<Vec<NormalizedJob>> {
    let (tenant, instance, site) = parse_ats_id(ats_id)?;
    let base = client.base_or(format!("https://{}.{}.myworkdayjobs.com", tenant, instance));
    let api = format!("{}/wday/cxs/{}/{}", base, tenant, site);

    let mut jobs = Vec::new();
    let mut offset = 0;

    loop {
        let resp = client
            .http
            .post(format!("{}/jobs", api))
            .json(&json!({ "limit": PAGE_SIZE, "offset": offset }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AtsError::Api {
                provider: PROVIDER,
                status: status.as_u16(),
            });
        }

        let page: WorkdayJobsResponse = resp.json().await.map_err(|e| AtsError::Payload {
            provider: PROVIDER,
            message: e.to_string(),
        })?;

        tracing::debug!(offset, total = page.total, "Fetched Workday postings page");

        for posting in page.job_postings {
            let detail = fetch_job_detail(client, &api, &posting.external_path).await;
            jobs.push(normalize(posting, detail, &base));
        }

        offset += PAGE_SIZE;
        if offset >= page.total {
            break;
        }
    }

    tracing::debug!(tenant = %tenant, count = jobs.len(), "Fetched Workday postings");
    Ok(jobs)
}

/// Detail record for one posting. Anything going wrong here (transport,
/// status, payload) yields None so the posting still syncs with list-level
/// fields.
async fn fetch_job_detail(
    client: &AtsClient,
    api: &str,
    external_path: &str,
) -> Option<WorkdayJobDetail> {
    let url = format!("{}{}", api, external_path);
    let resp = match client.http.get(&url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::debug!(path = external_path, error = %e, "Workday detail fetch failed");
            return None;
        }
    };
    if !resp.status().is_success() {
        return None;
    }
    resp.json().await.ok()
}

fn external_id_for(posting: &WorkdayJobPosting) -> String {
    if let Some(first) = posting.bullet_fields.first().filter(|s| !s.is_empty()) {
        return first.clone();
    }
    // "/job/Remote/Title_R-123" carries the requisition id after the last
    // underscore; paths without one are used whole.
    posting
        .external_path
        .rsplit('_')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| posting.external_path.clone())
}

fn normalize(
    posting: WorkdayJobPosting,
    detail: Option<WorkdayJobDetail>,
    base_url: &str,
) -> NormalizedJob {
    let external_id = external_id_for(&posting);
    let info = detail.and_then(|d| d.job_posting_info);

    NormalizedJob {
        external_id,
        title: posting.title,
        location: posting.locations_text.filter(|s| !s.is_empty()),
        description: info
            .as_ref()
            .and_then(|i| i.job_description.as_ref())
            .filter(|s| !s.is_empty())
            .map(|s| html::decode_entities(s)),
        url: format!("{}{}", base_url, posting.external_path),
        department: info
            .as_ref()
            .and_then(|i| i.job_family.first())
            .map(|family| family.descriptor.clone())
            .filter(|s| !s.is_empty()),
        employment_type: posting
            .time_type
            .filter(|s| !s.is_empty())
            .or_else(|| {
                info.as_ref()
                    .and_then(|i| i.time_type.clone())
                    .filter(|s| !s.is_empty())
            }),
        published_at: info
            .as_ref()
            .and_then(|i| i.posted_date.as_deref())
            .and_then(parse_timestamp),
    }
}
