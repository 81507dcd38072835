//! Shared test helpers.

use niftysent::domain::entities::snapshot::MarketSnapshot;
use niftysent::domain::values::profile::ScoringProfile;
use niftysent::SentimentEngine;

pub fn engine() -> SentimentEngine {
    SentimentEngine::new(ScoringProfile::revised()).unwrap()
}

pub fn classic_engine() -> SentimentEngine {
    SentimentEngine::new(ScoringProfile::classic()).unwrap()
}

/// Snapshot with aligned references and every signal at its neutral reading.
pub fn neutral_snapshot() -> MarketSnapshot {
    MarketSnapshot::neutral(22000.0, 22000.0, 22000.0)
}
