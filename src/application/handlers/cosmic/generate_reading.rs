//! GenerateReadingHandler - Renders a paid reading for an entitled caller.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotEntitled | 403 |
//! | Cosmic | 400 |

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::access::{Entitlements, ReadingKind};
use crate::domain::content::{render_life_essay, render_reading_list, render_year_essay};
use crate::domain::cosmic::{CosmicError, CosmicProfile};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::Clock;

/// Errors from reading generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadingError {
    #[error("{0} has not been purchased")]
    NotEntitled(ReadingKind),

    #[error(transparent)]
    Cosmic(#[from] CosmicError),
}

impl From<ReadingError> for DomainError {
    fn from(err: ReadingError) -> Self {
        match err {
            ReadingError::NotEntitled(kind) => {
                DomainError::new(ErrorCode::Forbidden, format!("{} has not been purchased", kind))
                    .with_detail("reading", kind.slug())
            }
            ReadingError::Cosmic(e) => e.into(),
        }
    }
}

/// Request for one reading.
#[derive(Debug, Clone)]
pub struct GenerateReadingQuery {
    pub kind: ReadingKind,
    pub name: Option<String>,
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    pub entitlements: Entitlements,
}

/// A rendered reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub kind: ReadingKind,
    pub title: String,
    pub body: String,
}

pub struct GenerateReadingHandler {
    clock: Arc<dyn Clock>,
}

impl GenerateReadingHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub async fn handle(&self, query: GenerateReadingQuery) -> Result<Reading, ReadingError> {
        let kind = query.kind;
        if !query.entitlements.permits(kind) {
            warn!(reading = kind.slug(), "Reading requested without entitlement");
            return Err(ReadingError::NotEntitled(kind));
        }

        let now = self.clock.now();
        let profile = CosmicProfile::from_birth_date_str(&query.birth_date, now)?;
        let name = query.name.as_deref();

        let (title, body) = match kind {
            ReadingKind::LifeEssay => (
                "Your Cosmic Blueprint".to_string(),
                render_life_essay(&profile, name),
            ),
            ReadingKind::YearEssay => {
                let year = now.year();
                (
                    format!("{} Cosmic Forecast", year),
                    render_year_essay(&profile, name, year),
                )
            }
            ReadingKind::ReadingList => (
                "Your Personalized Reading List".to_string(),
                render_reading_list(&profile, name),
            ),
        };

        info!(reading = kind.slug(), chars = body.len(), "Rendered reading");
        Ok(Reading { kind, title, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedClock;
    use crate::domain::access::Capability;
    use crate::domain::foundation::Timestamp;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn handler() -> GenerateReadingHandler {
        let clock = FixedClock::new(Timestamp::parse_rfc3339("2024-01-11T00:00:00Z").unwrap());
        GenerateReadingHandler::new(Arc::new(clock))
    }

    fn query(kind: ReadingKind, entitlements: Entitlements) -> GenerateReadingQuery {
        GenerateReadingQuery {
            kind,
            name: Some("Ada".to_string()),
            birth_date: "1990-11-22".to_string(),
            entitlements,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn purchased_life_essay_renders() {
        let entitlements = Entitlements::none().with_purchase(ReadingKind::LifeEssay);
        let reading = handler().handle(query(ReadingKind::LifeEssay, entitlements)).await.unwrap();

        assert_eq!(reading.kind, ReadingKind::LifeEssay);
        assert_eq!(reading.title, "Your Cosmic Blueprint");
        assert!(reading.body.contains("THE COSMIC BLUEPRINT OF"));
        assert!(reading.body.contains("ADA"));
    }

    #[tokio::test]
    async fn year_essay_uses_clock_year() {
        let reading = handler()
            .handle(query(ReadingKind::YearEssay, Entitlements::admin()))
            .await
            .unwrap();

        assert_eq!(reading.title, "2024 Cosmic Forecast");
        assert!(reading.body.contains("2024 COSMIC FORECAST FOR"));
        assert!(reading.body.contains("Your Personal Year: 5"));
    }

    #[tokio::test]
    async fn admin_capability_unlocks_reading_list() {
        let entitlements = Entitlements::none().with_capability(Capability::Admin);
        let reading = handler().handle(query(ReadingKind::ReadingList, entitlements)).await.unwrap();
        assert!(reading.body.contains("PERSONALIZED READING LIST FOR"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unpurchased_reading_is_refused() {
        let entitlements = Entitlements::none().with_purchase(ReadingKind::LifeEssay);
        let result = handler().handle(query(ReadingKind::YearEssay, entitlements)).await;
        assert_eq!(result, Err(ReadingError::NotEntitled(ReadingKind::YearEssay)));
    }

    #[tokio::test]
    async fn entitlement_is_checked_before_date() {
        let mut q = query(ReadingKind::LifeEssay, Entitlements::none());
        q.birth_date = "garbage".to_string();
        let result = handler().handle(q).await;
        assert!(matches!(result, Err(ReadingError::NotEntitled(_))));
    }

    #[tokio::test]
    async fn bad_birth_date_is_cosmic_error() {
        let mut q = query(ReadingKind::LifeEssay, Entitlements::admin());
        q.birth_date = "1990-13-01".to_string();
        let result = handler().handle(q).await;
        assert!(matches!(result, Err(ReadingError::Cosmic(_))));
    }

    #[test]
    fn not_entitled_maps_to_forbidden() {
        let err: DomainError = ReadingError::NotEntitled(ReadingKind::ReadingList).into();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.details.get("reading").map(String::as_str), Some("reading_list"));
    }
}
