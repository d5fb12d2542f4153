//! Pure ATS job-board API client.
//!
//! One client for the public job-board APIs of six Applicant Tracking
//! Systems: Greenhouse, Lever, Ashby, Pinpoint, CareerPuck, and Workday.
//! Every adapter maps its provider's native schema into [`NormalizedJob`],
//! so callers stay provider-agnostic.
//!
//! # Example
//!
//! ```rust,ignore
//! use ats_client::{AtsClient, AtsProvider};
//!
//! let client = AtsClient::new();
//!
//! let jobs = client.fetch_jobs(AtsProvider::Greenhouse, "acme").await?;
//! for job in &jobs {
//!     println!("{} ({})", job.title, job.location.as_deref().unwrap_or("anywhere"));
//! }
//!
//! let blurb = client
//!     .fetch_company_description(AtsProvider::Greenhouse, "acme")
//!     .await?;
//! ```

pub mod error;
pub mod html;
pub mod types;

mod ashby;
mod careerpuck;
mod greenhouse;
mod lever;
mod pinpoint;
mod workday;

pub use error::{AtsError, Result};
pub use types::{AtsProvider, NormalizedJob};

/// Client over the six providers' public job-board APIs.
#[derive(Debug, Clone, Default)]
pub struct AtsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Option<String>,
}

impl AtsClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
        }
    }

    /// Route every provider's requests to a custom base URL (for tests and
    /// proxies). Production hosts are used when unset.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub(crate) fn base_or(&self, default: impl Into<String>) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => default.into(),
        }
    }

    /// Fetch and normalize every open posting on a company's board.
    ///
    /// `ats_id` is the provider-specific board identifier (a board token,
    /// company slug, or for Workday `tenant/instance/site`).
    pub async fn fetch_jobs(
        &self,
        provider: AtsProvider,
        ats_id: &str,
    ) -> Result<Vec<NormalizedJob>> {
        match provider {
            AtsProvider::Greenhouse => greenhouse::fetch_jobs(self, ats_id).await,
            AtsProvider::Lever => lever::fetch_jobs(self, ats_id).await,
            AtsProvider::Ashby => ashby::fetch_jobs(self, ats_id).await,
            AtsProvider::Pinpoint => pinpoint::fetch_jobs(self, ats_id).await,
            AtsProvider::CareerPuck => careerpuck::fetch_jobs(self, ats_id).await,
            AtsProvider::Workday => workday::fetch_jobs(self, ats_id).await,
        }
    }

    /// Fetch a plain-text company blurb where the provider exposes one.
    ///
    /// Only Greenhouse and Ashby publish board-level company text; the other
    /// four return `Ok(None)` without touching the network.
    pub async fn fetch_company_description(
        &self,
        provider: AtsProvider,
        ats_id: &str,
    ) -> Result<Option<String>> {
        match provider {
            AtsProvider::Greenhouse => greenhouse::fetch_company_blurb(self, ats_id).await,
            AtsProvider::Ashby => ashby::fetch_company_blurb(self, ats_id).await,
            AtsProvider::Lever
            | AtsProvider::Pinpoint
            | AtsProvider::CareerPuck
            | AtsProvider::Workday => Ok(None),
        }
    }
}
