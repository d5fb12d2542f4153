//! Read API over stored jobs.

use std::collections::HashMap;

use anyhow::Result;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::common::{CompanyId, JobId};
use crate::domains::companies::models::Company;
use crate::domains::jobs::models::Job;
use crate::server::app::AxumAppState;
use crate::store::BoardStore;

/// Company fields embedded alongside jobs in read responses
#[derive(Debug, Clone, Serialize)]
pub struct CompanySummary {
    pub name: String,
    pub slug: String,
    pub logo_url: Option<String>,
    pub stage: Option<String>,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            slug: company.slug.clone(),
            logo_url: company.logo_url.clone(),
            stage: company.stage.clone(),
        }
    }
}

/// One job with its company embedded
#[derive(Debug, Serialize)]
pub struct JobWithCompany {
    #[serde(flatten)]
    pub job: Job,
    pub company: CompanySummary,
}

/// A company's board: the company plus its active jobs
#[derive(Debug, Serialize)]
pub struct CompanyJobsResponse {
    pub company: CompanySummary,
    pub jobs: Vec<Job>,
}

async fn list_jobs(store: &dyn BoardStore) -> Result<Vec<JobWithCompany>> {
    let jobs = store.active_jobs().await?;
    let companies = store.active_companies().await?;

    let by_id: HashMap<CompanyId, CompanySummary> = companies
        .iter()
        .map(|company| (company.id, CompanySummary::from(company)))
        .collect();

    Ok(jobs
        .into_iter()
        .filter_map(|job| {
            let company = by_id.get(&job.company_id).cloned()?;
            Some(JobWithCompany { job, company })
        })
        .collect())
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

fn internal_error(e: anyhow::Error) -> Response {
    error!(error = %e, "Read API query failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
        .into_response()
}

/// All active jobs across active companies, freshest first
pub async fn jobs_handler(Extension(state): Extension<AxumAppState>) -> Response {
    match list_jobs(state.server_deps.store.as_ref()).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => internal_error(e),
    }
}

/// One job by ID with its company
pub async fn job_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<JobId>() else {
        return not_found();
    };
    let store = state.server_deps.store.as_ref();

    let job = match store.job_by_id(id).await {
        Ok(Some(job)) => job,
        Ok(None) => return not_found(),
        Err(e) => return internal_error(e),
    };
    match store.company_by_id(job.company_id).await {
        Ok(Some(company)) => {
            let company = CompanySummary::from(&company);
            (StatusCode::OK, Json(JobWithCompany { job, company })).into_response()
        }
        Ok(None) => not_found(),
        Err(e) => internal_error(e),
    }
}

/// A company's active jobs by slug, most recently published first
pub async fn company_jobs_handler(
    Extension(state): Extension<AxumAppState>,
    Path(slug): Path<String>,
) -> Response {
    let store = state.server_deps.store.as_ref();

    let company = match store.company_by_slug(&slug).await {
        Ok(Some(company)) => company,
        Ok(None) => return not_found(),
        Err(e) => return internal_error(e),
    };
    match store.active_jobs_by_company_slug(&slug).await {
        Ok(jobs) => (
            StatusCode::OK,
            Json(CompanyJobsResponse {
                company: CompanySummary::from(&company),
                jobs,
            }),
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}
