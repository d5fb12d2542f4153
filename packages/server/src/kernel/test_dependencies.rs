// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use ats_client::{AtsProvider, NormalizedJob};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseAtsService, ServerDeps};
use crate::config::Config;
use crate::store::MemoryStore;

// =============================================================================
// Mock ATS Service
// =============================================================================

/// Arguments captured from a fetch_jobs call
#[derive(Debug, Clone)]
pub struct FetchCallArgs {
    pub provider: AtsProvider,
    pub ats_id: String,
}

/// Canned board responses keyed by ats_id.
///
/// Boards without a canned entry come back empty, which mirrors a provider
/// with no open postings.
pub struct MockAtsService {
    boards: Arc<Mutex<HashMap<String, std::result::Result<Vec<NormalizedJob>, String>>>>,
    descriptions: Arc<Mutex<HashMap<String, String>>>,
    fetch_calls: Arc<Mutex<Vec<FetchCallArgs>>>,
}

impl MockAtsService {
    pub fn new() -> Self {
        Self {
            boards: Arc::new(Mutex::new(HashMap::new())),
            descriptions: Arc::new(Mutex::new(HashMap::new())),
            fetch_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Canned postings for a board
    pub fn with_jobs(self, ats_id: &str, jobs: Vec<NormalizedJob>) -> Self {
        self.boards
            .lock()
            .unwrap()
            .insert(ats_id.to_string(), Ok(jobs));
        self
    }

    /// Canned failure for a board
    pub fn with_error(self, ats_id: &str, message: &str) -> Self {
        self.boards
            .lock()
            .unwrap()
            .insert(ats_id.to_string(), Err(message.to_string()));
        self
    }

    /// Canned company blurb for a board
    pub fn with_description(self, ats_id: &str, description: &str) -> Self {
        self.descriptions
            .lock()
            .unwrap()
            .insert(ats_id.to_string(), description.to_string());
        self
    }

    /// Get all fetch calls with their arguments
    pub fn fetch_calls(&self) -> Vec<FetchCallArgs> {
        self.fetch_calls.lock().unwrap().clone()
    }
}

impl Default for MockAtsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAtsService for MockAtsService {
    async fn fetch_jobs(&self, provider: AtsProvider, ats_id: &str) -> Result<Vec<NormalizedJob>> {
        self.fetch_calls.lock().unwrap().push(FetchCallArgs {
            provider,
            ats_id: ats_id.to_string(),
        });
        match self.boards.lock().unwrap().get(ats_id) {
            Some(Ok(jobs)) => Ok(jobs.clone()),
            Some(Err(message)) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_company_description(
        &self,
        _provider: AtsProvider,
        ats_id: &str,
    ) -> Result<Option<String>> {
        Ok(self.descriptions.lock().unwrap().get(ats_id).cloned())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of in-memory dependencies for exercising the sync pipeline
/// and routes without Postgres or the network.
pub struct TestDependencies {
    pub store: Arc<MemoryStore>,
    pub ats: Arc<MockAtsService>,
    pub config: Arc<Config>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            ats: Arc::new(MockAtsService::new()),
            config: Arc::new(Config {
                database_url: "postgres://localhost/launchboard_test".to_string(),
                port: 0,
                environment: "development".to_string(),
                cron_secret: None,
                logo_dev_token: None,
            }),
        }
    }

    /// Set a mock ATS service
    pub fn mock_ats(mut self, ats: MockAtsService) -> Self {
        self.ats = Arc::new(ats);
        self
    }

    /// Override the config
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Build ServerDeps sharing this bundle's store and services
    pub fn to_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.store.clone(),
            self.ats.clone(),
            self.config.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
