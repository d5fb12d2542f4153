//! In-memory store implementation for testing and development.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;
use ats_client::NormalizedJob;
use chrono::Utc;

use crate::common::{CompanyId, JobId};
use crate::domains::companies::models::Company;
use crate::domains::jobs::models::Job;

use super::{CompanyStore, JobStore};

/// In-memory store over companies and jobs.
///
/// Useful for testing and development. Not suitable for production
/// as data is lost on restart.
pub struct MemoryStore {
    companies: RwLock<HashMap<CompanyId, Company>>,
    jobs: RwLock<HashMap<JobId, Job>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            companies: RwLock::new(HashMap::new()),
            jobs: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a company.
    pub fn add_company(&self, company: Company) {
        self.companies.write().unwrap().insert(company.id, company);
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.companies.write().unwrap().clear();
        self.jobs.write().unwrap().clear();
    }

    /// Number of stored companies.
    pub fn company_count(&self) -> usize {
        self.companies.read().unwrap().len()
    }

    /// Number of stored jobs, active or not.
    pub fn job_count(&self) -> usize {
        self.jobs.read().unwrap().len()
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn active_companies(&self) -> Result<Vec<Company>> {
        let mut companies: Vec<Company> = self
            .companies
            .read()
            .unwrap()
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn company_by_id(&self, id: CompanyId) -> Result<Option<Company>> {
        Ok(self.companies.read().unwrap().get(&id).cloned())
    }

    async fn company_by_slug(&self, slug: &str) -> Result<Option<Company>> {
        Ok(self
            .companies
            .read()
            .unwrap()
            .values()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn set_company_logo(&self, id: CompanyId, logo_url: &str) -> Result<()> {
        if let Some(company) = self.companies.write().unwrap().get_mut(&id) {
            company.logo_url = Some(logo_url.to_string());
            company.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn set_company_description(&self, id: CompanyId, description: &str) -> Result<()> {
        if let Some(company) = self.companies.write().unwrap().get_mut(&id) {
            company.description = Some(description.to_string());
            company.updated_at = Utc::now();
        }
        Ok(())
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn job_by_external_id(
        &self,
        company_id: CompanyId,
        external_id: &str,
    ) -> Result<Option<Job>> {
        Ok(self
            .jobs
            .read()
            .unwrap()
            .values()
            .find(|j| j.company_id == company_id && j.external_id == external_id)
            .cloned())
    }

    async fn insert_job(&self, company_id: CompanyId, fetched: &NormalizedJob) -> Result<Job> {
        let now = Utc::now();
        let job = Job {
            id: JobId::new(),
            company_id,
            external_id: fetched.external_id.clone(),
            title: fetched.title.clone(),
            location: fetched.location.clone(),
            description: fetched.description.clone(),
            url: fetched.url.clone(),
            department: fetched.department.clone(),
            employment_type: fetched.employment_type.clone(),
            published_at: fetched.published_at,
            is_active: true,
            first_seen_at: now,
            last_seen_at: now,
            created_at: now,
            updated_at: now,
        };
        self.jobs.write().unwrap().insert(job.id, job.clone());
        Ok(job)
    }

    async fn update_job(&self, id: JobId, fetched: &NormalizedJob) -> Result<Job> {
        let mut jobs = self.jobs.write().unwrap();
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("No job with id {}", id))?;
        job.title = fetched.title.clone();
        job.location = fetched.location.clone();
        job.description = fetched.description.clone();
        job.url = fetched.url.clone();
        job.department = fetched.department.clone();
        job.employment_type = fetched.employment_type.clone();
        job.published_at = fetched.published_at;
        job.is_active = true;
        job.last_seen_at = Utc::now();
        job.updated_at = job.last_seen_at;
        Ok(job.clone())
    }

    async fn active_jobs_for_company(&self, company_id: CompanyId) -> Result<Vec<Job>> {
        Ok(self
            .jobs
            .read()
            .unwrap()
            .values()
            .filter(|j| j.company_id == company_id && j.is_active)
            .cloned()
            .collect())
    }

    async fn deactivate_jobs(&self, job_ids: &[JobId]) -> Result<u64> {
        let mut jobs = self.jobs.write().unwrap();
        let mut flipped = 0;
        for id in job_ids {
            if let Some(job) = jobs.get_mut(id) {
                if job.is_active {
                    job.is_active = false;
                    job.updated_at = Utc::now();
                    flipped += 1;
                }
            }
        }
        Ok(flipped)
    }

    async fn job_by_id(&self, id: JobId) -> Result<Option<Job>> {
        Ok(self.jobs.read().unwrap().get(&id).cloned())
    }

    async fn active_jobs(&self) -> Result<Vec<Job>> {
        let active_company_ids: HashSet<CompanyId> = self
            .companies
            .read()
            .unwrap()
            .values()
            .filter(|c| c.is_active)
            .map(|c| c.id)
            .collect();
        let mut jobs: Vec<Job> = self
            .jobs
            .read()
            .unwrap()
            .values()
            .filter(|j| j.is_active && active_company_ids.contains(&j.company_id))
            .cloned()
            .collect();
        jobs.sort_by(|a, b| b.last_seen_at.cmp(&a.last_seen_at));
        Ok(jobs)
    }

    async fn active_jobs_by_company_slug(&self, slug: &str) -> Result<Vec<Job>> {
        let company = match self.company_by_slug(slug).await? {
            Some(company) => company,
            None => return Ok(Vec::new()),
        };
        let mut jobs = self.active_jobs_for_company(company.id).await?;
        // published_at DESC with unset dates last, then first_seen_at DESC
        jobs.sort_by(|a, b| match (a.published_at, b.published_at) {
            (Some(pa), Some(pb)) => pb
                .cmp(&pa)
                .then_with(|| b.first_seen_at.cmp(&a.first_seen_at)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => b.first_seen_at.cmp(&a.first_seen_at),
        });
        Ok(jobs)
    }
}
