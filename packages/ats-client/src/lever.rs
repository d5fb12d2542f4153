//! Lever job board adapter.
//!
//! Lever splits a posting's description across several structured fields
//! (opening text, bulleted lists, an "additional" footer, a salary range),
//! so the adapter reassembles one HTML document in a fixed section order.

use serde::Deserialize;

use crate::error::{AtsError, Result};
use crate::types::{parse_epoch_millis, NormalizedJob};
use crate::AtsClient;

const PROVIDER: &str = "Lever";
const BASE_URL: &str = "https://api.lever.co";

#[derive(Debug, Clone, Deserialize)]
struct LeverPosting {
    id: String,
    /// Lever calls the job title `text`.
    text: String,
    #[serde(default)]
    categories: Option<LeverCategories>,
    description: Option<String>,
    #[serde(default)]
    lists: Vec<LeverList>,
    additional: Option<String>,
    #[serde(rename = "salaryRange")]
    salary_range: Option<LeverSalaryRange>,
    #[serde(rename = "createdAt")]
    created_at: Option<i64>,
    #[serde(rename = "hostedUrl")]
    hosted_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LeverCategories {
    commitment: Option<String>,
    department: Option<String>,
    location: Option<String>,
    team: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct LeverList {
    text: String,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
struct LeverSalaryRange {
    min: f64,
    max: f64,
    currency: String,
    interval: String,
}

pub(crate) async fn fetch_jobs(client: &AtsClient, company_id: &str) -> Result<Vec<NormalizedJob>> {
    let url = format!(
        "{}/v0/postings/{}?mode=json",
        client.base_or(BASE_URL),
        company_id
    );
    let resp = client.http.get(&url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(AtsError::Api {
            provider: PROVIDER,
            status: status.as_u16(),
        });
    }

    let postings: Vec<LeverPosting> = resp.json().await.map_err(|e| AtsError::Payload {
        provider: PROVIDER,
        message: e.to_string(),
    })?;

    tracing::debug!(company = company_id, count = postings.len(), "Fetched Lever postings");
    Ok(postings.into_iter().map(normalize).collect())
}

fn normalize(posting: LeverPosting) -> NormalizedJob {
    let description = build_full_description(&posting);
    let categories = posting.categories.unwrap_or_default();

    NormalizedJob {
        external_id: posting.id,
        title: posting.text,
        location: categories.location.filter(|s| !s.is_empty()),
        description: Some(description),
        url: posting.hosted_url,
        department: categories
            .department
            .filter(|s| !s.is_empty())
            .or(categories.team.filter(|s| !s.is_empty())),
        employment_type: categories.commitment.filter(|s| !s.is_empty()),
        published_at: posting
            .created_at
            .filter(|&millis| millis != 0)
            .and_then(parse_epoch_millis),
    }
}

/// Section order: description, each list under its own heading, additional
/// information, compensation. Joined with newlines so the stored HTML stays
/// readable.
fn build_full_description(posting: &LeverPosting) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(description) = posting.description.as_ref().filter(|s| !s.is_empty()) {
        parts.push(description.clone());
    }

    for list in &posting.lists {
        parts.push(format!("<h3>{}</h3>", list.text));
        parts.push(list.content.clone());
    }

    if let Some(additional) = posting.additional.as_ref().filter(|s| !s.is_empty()) {
        parts.push("<h3>Additional Information</h3>".to_string());
        parts.push(additional.clone());
    }

    if let Some(range) = &posting.salary_range {
        parts.push("<h3>Compensation</h3>".to_string());
        parts.push(format!(
            "<p>{} {} - {} per {}</p>",
            range.currency,
            format_amount(range.min),
            format_amount(range.max),
            range.interval
        ));
    }

    parts.join("\n")
}

/// Thousands-separated amount, fractional digits kept only when present.
fn format_amount(value: f64) -> String {
    let int_part = value.trunc() as i64;
    let grouped = group_thousands(int_part);
    let frac = (value.fract().abs() * 1000.0).round() as i64;
    if frac == 0 {
        grouped
    } else {
        let frac_str = format!("{:03}", frac);
        format!("{}.{}", grouped, frac_str.trim_end_matches('0'))
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
