//! Clock port - Source of "now".
//!
//! Everything time-dependent (moon phase, personal year, digest scheduling)
//! reads the current instant through this port so tests can pin it.

use crate::domain::foundation::Timestamp;

/// Port for reading the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
