pub mod effects;
pub mod models;

// Re-export models (domain models)
pub use models::report::{CompanySyncResult, ReconcileSummary, SyncReport};
