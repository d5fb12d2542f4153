//! Reconcile one company's fetched postings against the stored jobs.

use std::collections::HashSet;

use anyhow::Result;
use ats_client::NormalizedJob;
use tracing::info;

use crate::common::{CompanyId, JobId};
use crate::domains::sync::models::ReconcileSummary;
use crate::store::BoardStore;

/// Insert-or-update every fetched posting, then deactivate stored active
/// jobs the fetch no longer contains. Rows are never deleted, so a posting
/// that disappears and comes back keeps its identity and first_seen_at.
pub async fn reconcile_company_jobs(
    store: &dyn BoardStore,
    company_id: CompanyId,
    fetched: &[NormalizedJob],
) -> Result<ReconcileSummary> {
    let mut summary = ReconcileSummary::default();

    for posting in fetched {
        match store
            .job_by_external_id(company_id, &posting.external_id)
            .await?
        {
            Some(existing) => {
                store.update_job(existing.id, posting).await?;
                summary.updated += 1;
            }
            None => {
                store.insert_job(company_id, posting).await?;
                summary.inserted += 1;
            }
        }
    }

    // Anything still active in the store but absent from this fetch is stale
    let observed: HashSet<&str> = fetched.iter().map(|p| p.external_id.as_str()).collect();
    let stale: Vec<JobId> = store
        .active_jobs_for_company(company_id)
        .await?
        .into_iter()
        .filter(|job| !observed.contains(job.external_id.as_str()))
        .map(|job| job.id)
        .collect();

    if !stale.is_empty() {
        summary.marked_inactive = store.deactivate_jobs(&stale).await?;
        info!(
            company_id = %company_id,
            marked_inactive = summary.marked_inactive,
            "Marked stale jobs inactive"
        );
    }

    Ok(summary)
}
