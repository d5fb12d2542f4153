// Business domains
pub mod companies;
pub mod jobs;
pub mod sync;
