use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::values::opening::OpeningCall;
use crate::domain::values::scenario::ScenarioProbabilities;
use crate::domain::values::sentiment::SentimentLabel;

/// One line of the per-rule score breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorScore {
    pub name: String,
    pub points: i32,
}

impl FactorScore {
    pub fn new(name: &str, points: i32) -> Self {
        FactorScore {
            name: name.to_string(),
            points,
        }
    }
}

/// Advisory flags evaluated over raw signals, independent of the composite
/// score and of each other. Any subset may be set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SpecialConditions {
    /// Significant DII buying while India VIX is elevated: domestic
    /// conviction amidst fear, amplified intraday swings possible.
    pub high_reward_dii_vix: bool,
    /// Notable FII selling with a very low PCR: pessimism may be overdone,
    /// susceptible to sharp short-covering rallies.
    pub bear_trap_fii_pcr: bool,
    /// Very high PCR with elevated India VIX: extreme pessimism, potential
    /// technical rebound.
    pub oversold_bounce_risk: bool,
}

impl SpecialConditions {
    pub fn any(&self) -> bool {
        self.high_reward_dii_vix || self.bear_trap_fii_pcr || self.oversold_bounce_risk
    }

    pub fn count(&self) -> usize {
        [
            self.high_reward_dii_vix,
            self.bear_trap_fii_pcr,
            self.oversold_bounce_risk,
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }
}

/// The complete sentiment report for one reference value (spot or futures).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub opening: OpeningCall,
    pub sentiment: SentimentLabel,
    pub score: i32,
    pub factors: Vec<FactorScore>,
    pub probabilities: ScenarioProbabilities,
    pub conditions: SpecialConditions,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Whether two reports would read identically at the headline level.
    pub fn agrees_with(&self, other: &Report) -> bool {
        self.opening == other.opening && self.sentiment == other.sentiment
    }
}

/// Result of one analysis run. When the spot and futures references yield the
/// same opening call and sentiment label the two reports merge into one;
/// otherwise both are kept side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Analysis {
    Consolidated { report: Report },
    Diverged { spot: Report, futures: Report },
}

impl Analysis {
    /// The spot-side report, whichever shape the analysis took.
    pub fn spot(&self) -> &Report {
        match self {
            Analysis::Consolidated { report } => report,
            Analysis::Diverged { spot, .. } => spot,
        }
    }
}
