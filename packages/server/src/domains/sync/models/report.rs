//! Report types for a sync run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What changed while reconciling one company's fetched postings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub inserted: u64,
    pub updated: u64,
    pub marked_inactive: u64,
}

/// One company's line in the sync report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanySyncResult {
    pub company: String,
    pub inserted: u64,
    pub updated: u64,
    pub marked_inactive: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompanySyncResult {
    /// A successful unit with its reconcile counts
    pub fn completed(company: &str, summary: ReconcileSummary) -> Self {
        Self {
            company: company.to_string(),
            inserted: summary.inserted,
            updated: summary.updated,
            marked_inactive: summary.marked_inactive,
            error: None,
        }
    }

    /// A failed unit. Counts are zero even if some writes landed before
    /// the failure.
    pub fn failed(company: &str, error: String) -> Self {
        Self {
            company: company.to_string(),
            inserted: 0,
            updated: 0,
            marked_inactive: 0,
            error: Some(error),
        }
    }
}

/// Full report for one sync run, one entry per active company in the
/// order the companies were loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub success: bool,
    pub timestamp: DateTime<Utc>,
    pub results: Vec<CompanySyncResult>,
}
