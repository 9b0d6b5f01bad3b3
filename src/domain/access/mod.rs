//! Reading access: which readings a caller may unlock.

mod entitlements;
mod reading_kind;

pub use entitlements::{Capability, Entitlements};
pub use reading_kind::ReadingKind;
