//! GetCosmicProfileHandler - Query handler for a birth date's cosmic profile.

use std::sync::Arc;

use tracing::debug;

use crate::domain::cosmic::{CosmicError, CosmicProfile};
use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Query for the profile of one birth date.
#[derive(Debug, Clone)]
pub struct GetCosmicProfileQuery {
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    /// Evaluate at this instant instead of the clock's.
    pub now: Option<Timestamp>,
}

impl GetCosmicProfileQuery {
    pub fn new(birth_date: impl Into<String>) -> Self {
        Self {
            birth_date: birth_date.into(),
            now: None,
        }
    }

    pub fn at(mut self, now: Timestamp) -> Self {
        self.now = Some(now);
        self
    }
}

/// Handler for computing cosmic profiles.
pub struct GetCosmicProfileHandler {
    clock: Arc<dyn Clock>,
}

impl GetCosmicProfileHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub async fn handle(&self, query: GetCosmicProfileQuery) -> Result<CosmicProfile, CosmicError> {
        let now = query.now.unwrap_or_else(|| self.clock.now());
        let profile = CosmicProfile::from_birth_date_str(&query.birth_date, now)?;
        debug!(
            birth_date = %profile.birth_date,
            life_path = %profile.life_path,
            sun_sign = %profile.sun_sign,
            "Computed cosmic profile"
        );
        Ok(profile)
    }
}
