pub mod models;

// Re-export models (domain models)
pub use models::company::{Company, CompanyStage};
