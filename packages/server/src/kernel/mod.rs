//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{AtsAdapter, ServerDeps};
pub use test_dependencies::{MockAtsService, TestDependencies};
pub use traits::*;
