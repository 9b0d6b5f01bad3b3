//! Explicit reading entitlements.
//!
//! Callers pass the entitlements of the requesting user into every reading
//! request. Nothing here looks up a user or keeps global state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ReadingKind;

/// Elevated capability that bypasses purchase checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Admin,
}

/// What a user may read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlements {
    #[serde(default)]
    purchased: BTreeSet<ReadingKind>,
    #[serde(default)]
    capabilities: BTreeSet<Capability>,
}

impl Entitlements {
    /// No purchases, no capabilities.
    pub fn none() -> Self {
        Self::default()
    }

    /// Administrator: every reading is permitted.
    pub fn admin() -> Self {
        Self::default().with_capability(Capability::Admin)
    }

    pub fn with_purchase(mut self, kind: ReadingKind) -> Self {
        self.purchased.insert(kind);
        self
    }

    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn has_purchased(&self, kind: ReadingKind) -> bool {
        self.purchased.contains(&kind)
    }

    /// True when `kind` was purchased or the admin capability is present.
    pub fn permits(&self, kind: ReadingKind) -> bool {
        self.has_purchased(kind) || self.has_capability(Capability::Admin)
    }
}
