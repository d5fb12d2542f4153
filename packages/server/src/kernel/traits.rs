// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "sync one company") should be domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAtsService)

use anyhow::Result;
use async_trait::async_trait;
use ats_client::{AtsProvider, NormalizedJob};

// =============================================================================
// ATS Service Trait (Infrastructure - applicant tracking system access)
// =============================================================================

#[async_trait]
pub trait BaseAtsService: Send + Sync {
    /// Fetch every open posting on a company's board, normalized
    async fn fetch_jobs(&self, provider: AtsProvider, ats_id: &str) -> Result<Vec<NormalizedJob>>;

    /// Fetch a short plain-text company blurb, for providers that expose one.
    /// Providers without a board-level description return Ok(None).
    async fn fetch_company_description(
        &self,
        provider: AtsProvider,
        ats_id: &str,
    ) -> Result<Option<String>>;
}
