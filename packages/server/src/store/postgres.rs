//! Postgres-backed store.
//!
//! Thin delegation onto the model queries in domains/*/models, which own
//! all SQL.

use anyhow::Result;
use async_trait::async_trait;
use ats_client::NormalizedJob;
use sqlx::PgPool;

use crate::common::{CompanyId, JobId};
use crate::domains::companies::models::Company;
use crate::domains::jobs::models::Job;

use super::{CompanyStore, JobStore};

/// Store backed by the application's Postgres pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyStore for PgStore {
    async fn active_companies(&self) -> Result<Vec<Company>> {
        Company::find_active(&self.pool).await
    }

    async fn company_by_id(&self, id: CompanyId) -> Result<Option<Company>> {
        Company::find_by_id(id, &self.pool).await
    }

    async fn company_by_slug(&self, slug: &str) -> Result<Option<Company>> {
        Company::find_by_slug(slug, &self.pool).await
    }

    async fn set_company_logo(&self, id: CompanyId, logo_url: &str) -> Result<()> {
        Company::set_logo(id, logo_url, &self.pool).await
    }

    async fn set_company_description(&self, id: CompanyId, description: &str) -> Result<()> {
        Company::set_description(id, description, &self.pool).await
    }
}

#[async_trait]
impl JobStore for PgStore {
    async fn job_by_external_id(
        &self,
        company_id: CompanyId,
        external_id: &str,
    ) -> Result<Option<Job>> {
        Job::find_by_external_id(company_id, external_id, &self.pool).await
    }

    async fn insert_job(&self, company_id: CompanyId, fetched: &NormalizedJob) -> Result<Job> {
        Job::insert(company_id, fetched, &self.pool).await
    }

    async fn update_job(&self, id: JobId, fetched: &NormalizedJob) -> Result<Job> {
        Job::update_from_fetch(id, fetched, &self.pool).await
    }

    async fn active_jobs_for_company(&self, company_id: CompanyId) -> Result<Vec<Job>> {
        Job::find_active_by_company(company_id, &self.pool).await
    }

    async fn deactivate_jobs(&self, job_ids: &[JobId]) -> Result<u64> {
        Job::deactivate_many(job_ids, &self.pool).await
    }

    async fn job_by_id(&self, id: JobId) -> Result<Option<Job>> {
        Job::find_by_id(id, &self.pool).await
    }

    async fn active_jobs(&self) -> Result<Vec<Job>> {
        Job::find_active(&self.pool).await
    }

    async fn active_jobs_by_company_slug(&self, slug: &str) -> Result<Vec<Job>> {
        Job::find_active_by_company_slug(slug, &self.pool).await
    }
}
