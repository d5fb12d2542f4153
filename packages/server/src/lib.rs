// Launchboard - Server Core
//
// Backend for a startup job board. The heart of the crate is the sync
// pipeline: pull postings from each company's ATS, normalize them, and
// reconcile them against the store so new, changed, and removed roles are
// reflected within one cycle.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;
pub mod store;

pub use config::*;
