//! Pinpoint job board adapter.
//!
//! Pinpoint serves each tenant's board from its own subdomain and splits the
//! description into responsibilities/benefits/compensation sections with
//! optional custom headers, reassembled here in a fixed order.

use serde::Deserialize;

use crate::error::{AtsError, Result};
use crate::types::NormalizedJob;
use crate::AtsClient;

const PROVIDER: &str = "Pinpoint";

#[derive(Debug, Clone, Deserialize)]
struct PinpointResponse {
    #[serde(default)]
    data: Vec<PinpointJob>,
}

#[derive(Debug, Clone, Deserialize)]
struct PinpointJob {
    id: String,
    title: String,
    description: Option<String>,
    key_responsibilities: Option<String>,
    key_responsibilities_header: Option<String>,
    benefits: Option<String>,
    benefits_header: Option<String>,
    compensation: Option<String>,
    employment_type_text: Option<String>,
    workplace_type_text: Option<String>,
    url: String,
    location: Option<PinpointLocation>,
    job: Option<PinpointJobInfo>,
}

#[derive(Debug, Clone, Deserialize)]
struct PinpointLocation {
    name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PinpointJobInfo {
    department: Option<PinpointDepartment>,
}

#[derive(Debug, Clone, Deserialize)]
struct PinpointDepartment {
    name: String,
}

pub(crate) async fn fetch_jobs(client: &AtsClient, board_token: &str) -> Result<Vec<NormalizedJob>> {
    let base = client.base_or(format!("https://{}.pinpointhq.com", board_token));
    let url = format!("{}/postings.json", base);
    let resp = client.http.get(&url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AtsError::Api {
            provider: PROVIDER,
            status: status.as_u16(),
        });
    }

    let data: PinpointResponse = resp.json().await.map_err(|e| AtsError::Payload {
        provider: PROVIDER,
        message: e.to_string(),
    })?;

    tracing::debug!(board = board_token, count = data.data.len(), "Fetched Pinpoint postings");
    Ok(data.data.into_iter().map(normalize).collect())
}

fn normalize(job: PinpointJob) -> NormalizedJob {
    let description = build_full_description(&job);

    NormalizedJob {
        external_id: job.id,
        title: job.title.trim().to_string(),
        location: job
            .location
            .and_then(|l| l.name)
            .filter(|s| !s.is_empty()),
        description: Some(description),
        url: job.url,
        department: job
            .job
            .and_then(|j| j.department)
            .map(|d| d.name)
            .filter(|s| !s.is_empty()),
        employment_type: job.employment_type_text.filter(|s| !s.is_empty()),
        // Pinpoint does not expose a publish date.
        published_at: None,
    }
}

fn build_full_description(job: &PinpointJob) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(description) = job.description.as_ref().filter(|s| !s.is_empty()) {
        parts.push(description.clone());
    }

    if let Some(responsibilities) = job.key_responsibilities.as_ref().filter(|s| !s.is_empty()) {
        let header = job
            .key_responsibilities_header
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("What to Expect");
        parts.push(format!("<h2>{}</h2>{}", header, responsibilities));
    }

    if let Some(benefits) = job.benefits.as_ref().filter(|s| !s.is_empty()) {
        let header = job
            .benefits_header
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Benefits");
        parts.push(format!("<h2>{}</h2>{}", header, benefits));
    }

    if let Some(compensation) = job.compensation.as_ref().filter(|s| !s.is_empty()) {
        parts.push(format!(
            "<p><strong>Compensation:</strong> {}</p>",
            compensation
        ));
    }

    if let Some(workplace) = job.workplace_type_text.as_ref().filter(|s| !s.is_empty()) {
        parts.push(format!("<p><strong>Workplace:</strong> {}</p>", workplace));
    }

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> PinpointJob {
        PinpointJob {
            id: "98765".to_string(),
            title: "  Operations Manager  ".to_string(),
            description: Some("<p>Run the office.</p>".to_string()),
            key_responsibilities: Some("<ul><li>Coordinate</li></ul>".to_string()),
            key_responsibilities_header: None,
            benefits: Some("<ul><li>Healthcare</li></ul>".to_string()),
            benefits_header: Some("Perks".to_string()),
            compensation: Some("$90k - $110k".to_string()),
            employment_type_text: Some("Full time".to_string()),
            workplace_type_text: Some("Hybrid".to_string()),
            url: "https://acme.pinpointhq.com/postings/98765".to_string(),
            location: Some(PinpointLocation {
                name: Some("Chicago".to_string()),
            }),
            job: Some(PinpointJobInfo {
                department: Some(PinpointDepartment {
                    name: "Operations".to_string(),
                }),
            }),
        }
    }

    #[test]
    fn assembles_sections_with_default_and_custom_headers() {
        let description = build_full_description(&sample_job());
        let expected = "<p>Run the office.</p>\n\n\
                        <h2>What to Expect</h2><ul><li>Coordinate</li></ul>\n\n\
                        <h2>Perks</h2><ul><li>Healthcare</li></ul>\n\n\
                        <p><strong>Compensation:</strong> $90k - $110k</p>\n\n\
                        <p><strong>Workplace:</strong> Hybrid</p>";
        assert_eq!(description, expected);
    }

    #[test]
    fn trims_title_and_maps_nested_fields() {
        let job = normalize(sample_job());
        assert_eq!(job.title, "Operations Manager");
        assert_eq!(job.location.as_deref(), Some("Chicago"));
        assert_eq!(job.department.as_deref(), Some("Operations"));
        assert_eq!(job.employment_type.as_deref(), Some("Full time"));
        assert_eq!(job.published_at, None);
    }

    #[test]
    fn empty_sections_are_skipped() {
        let mut raw = sample_job();
        raw.key_responsibilities = None;
        raw.benefits = Some(String::new());
        raw.compensation = None;
        raw.workplace_type_text = None;
        let description = build_full_description(&raw);
        assert_eq!(description, "<p>Run the office.</p>");
    }
}
