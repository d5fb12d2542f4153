// Effects (side effects) for the sync domain
//
// Effects are thin orchestrators that delegate to domain functions.
// Domain logic lives in separate function modules.

pub mod enrich;
pub mod orchestrate;
pub mod reconcile;

pub use enrich::*;
pub use orchestrate::*;
pub use reconcile::*;
