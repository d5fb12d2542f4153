use anyhow::Result;
use ats_client::NormalizedJob;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{CompanyId, JobId};

/// Job - one posting on a company's board, keyed by (company_id, external_id)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: JobId,
    pub company_id: CompanyId,

    /// Provider-scoped identifier, stable across fetches
    pub external_id: String,

    // Content
    pub title: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub department: Option<String>,
    pub employment_type: Option<String>,
    pub published_at: Option<DateTime<Utc>>,

    // Lifecycle tracking
    pub is_active: bool,
    pub first_seen_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Job {
    /// Find job by ID
    pub async fn find_by_id(id: JobId, pool: &PgPool) -> Result<Option<Self>> {
        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(job)
    }

    /// Find job by its provider-scoped identity
    pub async fn find_by_external_id(
        company_id: CompanyId,
        external_id: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let job = sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE company_id = $1 AND external_id = $2",
        )
        .bind(company_id)
        .bind(external_id)
        .fetch_optional(pool)
        .await?;
        Ok(job)
    }

    /// Insert a freshly fetched job. Both seen timestamps start at the same
    /// instant so a brand-new row reads as first_seen_at == last_seen_at.
    pub async fn insert(
        company_id: CompanyId,
        fetched: &NormalizedJob,
        pool: &PgPool,
    ) -> Result<Self> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (company_id, external_id, title, location, description,
                url, department, employment_type, published_at,
                is_active, first_seen_at, last_seen_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, true, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(&fetched.external_id)
        .bind(&fetched.title)
        .bind(&fetched.location)
        .bind(&fetched.description)
        .bind(&fetched.url)
        .bind(&fetched.department)
        .bind(&fetched.employment_type)
        .bind(fetched.published_at)
        .fetch_one(pool)
        .await?;
        Ok(job)
    }

    /// Overwrite a job with freshly fetched content and bump last_seen_at.
    /// Also flips is_active back on, which reactivates previously stale rows.
    pub async fn update_from_fetch(
        id: JobId,
        fetched: &NormalizedJob,
        pool: &PgPool,
    ) -> Result<Self> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET title = $2,
                location = $3,
                description = $4,
                url = $5,
                department = $6,
                employment_type = $7,
                published_at = $8,
                is_active = true,
                last_seen_at = NOW(),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&fetched.title)
        .bind(&fetched.location)
        .bind(&fetched.description)
        .bind(&fetched.url)
        .bind(&fetched.department)
        .bind(&fetched.employment_type)
        .bind(fetched.published_at)
        .fetch_one(pool)
        .await?;
        Ok(job)
    }

    /// Find all active jobs for one company (for the staleness diff)
    pub async fn find_active_by_company(
        company_id: CompanyId,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let jobs = sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs
             WHERE company_id = $1 AND is_active = true",
        )
        .bind(company_id)
        .fetch_all(pool)
        .await?;
        Ok(jobs)
    }

    /// Mark jobs as inactive (for sync). Rows are never deleted.
    pub async fn deactivate_many(job_ids: &[JobId], pool: &PgPool) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET is_active = false, updated_at = NOW()
            WHERE id = ANY($1) AND is_active = true
            "#,
        )
        .bind(job_ids)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// All active jobs across active companies, freshest first
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        let jobs = sqlx::query_as::<_, Job>(
            "SELECT j.*
             FROM jobs j
             INNER JOIN companies c ON c.id = j.company_id
             WHERE j.is_active = true AND c.is_active = true
             ORDER BY j.last_seen_at DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(jobs)
    }

    /// Active jobs for one company by slug, most recently published first
    pub async fn find_active_by_company_slug(slug: &str, pool: &PgPool) -> Result<Vec<Self>> {
        let jobs = sqlx::query_as::<_, Job>(
            "SELECT j.*
             FROM jobs j
             INNER JOIN companies c ON c.id = j.company_id
             WHERE j.is_active = true AND c.slug = $1
             ORDER BY j.published_at DESC NULLS LAST, j.first_seen_at DESC",
        )
        .bind(slug)
        .fetch_all(pool)
        .await?;
        Ok(jobs)
    }
}
