//! Test fixtures for creating test data.
//!
//! Companies and postings are built as plain values; tests tweak fields
//! inline before seeding them into a store.

#![allow(dead_code)]

use chrono::Utc;

use ats_client::NormalizedJob;
use server_core::common::CompanyId;
use server_core::domains::companies::models::Company;

/// Create an active test company on the given ATS provider
pub fn test_company(name: &str, slug: &str, provider: &str, ats_id: &str) -> Company {
    let now = Utc::now();
    Company {
        id: CompanyId::new(),
        name: name.to_string(),
        slug: slug.to_string(),
        ats_provider: provider.to_string(),
        ats_id: ats_id.to_string(),
        website: None,
        logo_url: None,
        description: None,
        stage: Some("seed".to_string()),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Create a normalized posting as a provider adapter would return it
pub fn test_posting(external_id: &str, title: &str) -> NormalizedJob {
    NormalizedJob {
        external_id: external_id.to_string(),
        title: title.to_string(),
        location: Some("Remote".to_string()),
        description: Some(format!("<p>{}</p>", title)),
        url: format!("https://jobs.example.com/{}", external_id),
        department: Some("Engineering".to_string()),
        employment_type: Some("Full-time".to_string()),
        published_at: None,
    }
}
