//! Top-level sync run: every active company, one report out.

use anyhow::Result;
use chrono::Utc;
use futures::future::join_all;
use tracing::{error, info};

use crate::domains::companies::models::Company;
use crate::domains::sync::models::{CompanySyncResult, ReconcileSummary, SyncReport};
use crate::kernel::ServerDeps;

use super::enrich::{ensure_company_description, ensure_company_logo};
use super::reconcile::reconcile_company_jobs;

/// Sync one company end to end: enrichment, board fetch, reconcile.
async fn sync_company(deps: &ServerDeps, company: &Company) -> Result<ReconcileSummary> {
    info!(
        company = %company.name,
        provider = %company.ats_provider,
        "Processing company"
    );

    ensure_company_logo(
        deps.store.as_ref(),
        company,
        deps.config.logo_dev_token.as_deref(),
    )
    .await?;

    let provider = company.provider()?;

    ensure_company_description(deps.store.as_ref(), deps.ats.as_ref(), company, provider).await?;

    let fetched = deps.ats.fetch_jobs(provider, &company.ats_id).await?;
    info!(
        company = %company.name,
        job_count = fetched.len(),
        "Fetched postings"
    );

    reconcile_company_jobs(deps.store.as_ref(), company.id, &fetched).await
}

/// Run a full sync across all active companies.
///
/// Companies run in parallel and the report keeps company-list order. A
/// failing company becomes an error entry without touching its stored jobs
/// or interrupting the other companies. Only failing to list the companies
/// at all is fatal.
pub async fn run_sync(deps: &ServerDeps) -> Result<SyncReport> {
    let companies = deps.store.active_companies().await?;
    info!(company_count = companies.len(), "Starting sync run");

    let units = companies.iter().map(|company| async move {
        match sync_company(deps, company).await {
            Ok(summary) => CompanySyncResult::completed(&company.name, summary),
            Err(e) => {
                error!(company = %company.name, error = %e, "Company sync failed");
                CompanySyncResult::failed(&company.name, e.to_string())
            }
        }
    });
    let results = join_all(units).await;

    Ok(SyncReport {
        success: true,
        timestamp: Utc::now(),
        results,
    })
}
