//! Typed ID definitions for all domain entities.
//!
//! # Example
//!
//! ```rust,ignore
//! use server_core::common::{CompanyId, JobId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let company_id: CompanyId = CompanyId::new();
//! let job_id: JobId = JobId::new();
//!
//! // This would be a compile error:
//! // let wrong: JobId = company_id;
//! ```

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Company entities (employers with a configured ATS board).
pub struct Company;

/// Marker type for Job entities (postings synced from an ATS).
pub struct Job;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Company entities.
pub type CompanyId = Id<Company>;

/// Typed ID for Job entities.
pub type JobId = Id<Job>;
