//! Storage traits over companies and jobs.
//!
//! The storage layer is split into focused traits:
//! - `CompanyStore`: company lookup and enrichment writes
//! - `JobStore`: job lifecycle for sync plus the read API
//! - `BoardStore`: composite trait the server hands around

use anyhow::Result;
use async_trait::async_trait;
use ats_client::NormalizedJob;

use crate::common::{CompanyId, JobId};
use crate::domains::companies::models::Company;
use crate::domains::jobs::models::Job;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Company lookup and enrichment writes.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// All active companies, in stable order.
    async fn active_companies(&self) -> Result<Vec<Company>>;

    /// Look up one company by ID.
    async fn company_by_id(&self, id: CompanyId) -> Result<Option<Company>>;

    /// Look up one company by slug.
    async fn company_by_slug(&self, slug: &str) -> Result<Option<Company>>;

    /// Set a company's logo URL.
    async fn set_company_logo(&self, id: CompanyId, logo_url: &str) -> Result<()>;

    /// Set a company's description blurb.
    async fn set_company_description(&self, id: CompanyId, description: &str) -> Result<()>;
}

/// Job lifecycle for sync plus the read API.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Find a job by its provider-scoped identity.
    async fn job_by_external_id(
        &self,
        company_id: CompanyId,
        external_id: &str,
    ) -> Result<Option<Job>>;

    /// Insert a freshly fetched job as active.
    async fn insert_job(&self, company_id: CompanyId, fetched: &NormalizedJob) -> Result<Job>;

    /// Overwrite an existing job with freshly fetched content.
    ///
    /// Bumps last_seen_at and flips is_active back on.
    async fn update_job(&self, id: JobId, fetched: &NormalizedJob) -> Result<Job>;

    /// All active jobs for one company (for the staleness diff).
    async fn active_jobs_for_company(&self, company_id: CompanyId) -> Result<Vec<Job>>;

    /// Mark jobs inactive. Rows are never deleted.
    ///
    /// Returns the number of rows that flipped.
    async fn deactivate_jobs(&self, job_ids: &[JobId]) -> Result<u64>;

    /// Look up one job by ID.
    async fn job_by_id(&self, id: JobId) -> Result<Option<Job>>;

    /// All active jobs across active companies, freshest first.
    async fn active_jobs(&self) -> Result<Vec<Job>>;

    /// Active jobs for a company slug, most recently published first.
    async fn active_jobs_by_company_slug(&self, slug: &str) -> Result<Vec<Job>>;
}

/// Composite storage trait combining companies and jobs.
///
/// This is the handle the sync pipeline and routes work against.
pub trait BoardStore: CompanyStore + JobStore {}

// Blanket implementation: anything implementing both traits is a BoardStore
impl<T: CompanyStore + JobStore> BoardStore for T {}
