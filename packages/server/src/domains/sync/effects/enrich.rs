//! Company enrichment during sync: fill in missing logos and descriptions.

use anyhow::{Context, Result};
use ats_client::AtsProvider;
use tracing::info;
use url::Url;

use crate::domains::companies::models::Company;
use crate::kernel::BaseAtsService;
use crate::store::BoardStore;

/// Populate logo_url from the logo service for companies that have a
/// website. Existing logos are left alone, and without a service token the
/// step is skipped. A website that fails to parse is this company's error.
pub async fn ensure_company_logo(
    store: &dyn BoardStore,
    company: &Company,
    token: Option<&str>,
) -> Result<()> {
    if company.logo_url.is_some() {
        return Ok(());
    }
    let Some(website) = company.website.as_deref() else {
        return Ok(());
    };

    let parsed = Url::parse(website)
        .with_context(|| format!("Invalid website URL for {}: {}", company.name, website))?;
    let hostname = parsed
        .host_str()
        .with_context(|| format!("Website URL for {} has no hostname", company.name))?;

    let Some(token) = token else {
        return Ok(());
    };

    let logo_url = format!("https://img.logo.dev/{}?token={}", hostname, token);
    store.set_company_logo(company.id, &logo_url).await?;
    info!(company = %company.name, "Updated company logo");
    Ok(())
}

/// Populate the company description from its board, for providers that
/// expose one. Existing descriptions are left alone.
pub async fn ensure_company_description(
    store: &dyn BoardStore,
    ats: &dyn BaseAtsService,
    company: &Company,
    provider: AtsProvider,
) -> Result<()> {
    if company.description.is_some() {
        return Ok(());
    }

    if let Some(description) = ats
        .fetch_company_description(provider, &company.ats_id)
        .await?
    {
        store.set_company_description(company.id, &description).await?;
        info!(company = %company.name, "Updated company description");
    }
    Ok(())
}
