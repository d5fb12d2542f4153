//! Server dependencies for effects (using traits for testability)
//!
//! This module provides the central dependency container used by the sync
//! pipeline and routes. External services use trait abstractions to enable
//! testing.

use anyhow::Result;
use async_trait::async_trait;
use ats_client::{AtsClient, AtsProvider, NormalizedJob};
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::traits::BaseAtsService;
use crate::store::BoardStore;

// =============================================================================
// AtsClient Adapter (implements BaseAtsService trait)
// =============================================================================

/// Wrapper around AtsClient that implements the BaseAtsService trait
pub struct AtsAdapter(pub Arc<AtsClient>);

impl AtsAdapter {
    pub fn new(client: Arc<AtsClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseAtsService for AtsAdapter {
    async fn fetch_jobs(&self, provider: AtsProvider, ats_id: &str) -> Result<Vec<NormalizedJob>> {
        Ok(self.0.fetch_jobs(provider, ats_id).await?)
    }

    async fn fetch_company_description(
        &self,
        provider: AtsProvider,
        ats_id: &str,
    ) -> Result<Option<String>> {
        Ok(self.0.fetch_company_description(provider, ats_id).await?)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to the sync pipeline and routes
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BoardStore>,
    pub ats: Arc<dyn BaseAtsService>,
    pub config: Arc<Config>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        store: Arc<dyn BoardStore>,
        ats: Arc<dyn BaseAtsService>,
        config: Arc<Config>,
    ) -> Self {
        Self { store, ats, config }
    }
}
