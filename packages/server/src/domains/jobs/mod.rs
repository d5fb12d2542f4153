pub mod models;

// Re-export models (domain models)
pub use models::job::Job;
