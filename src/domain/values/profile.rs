//! Variant threshold profiles.
//!
//! The tool went through several revisions that kept the same rule shapes but
//! drifted the numbers (band widths, label cutoffs, gap thresholds). Each
//! revision is captured here as one [`ScoringProfile`]: a full set of
//! threshold tables the engine is parameterized by. Custom profiles
//! deserialize from JSON; `validate()` rejects inconsistent ones before any
//! scoring happens.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::values::rules::{BandRule, FlowRule, PcrRule, VixLevelRule};
use crate::domain::values::scenario::ScenarioProbabilities;
use crate::domain::values::sentiment::SentimentLabel;

/// Opening-gap classification thresholds, in percent of the reference value.
/// `|gap| < flat` is a flat opening, `|gap| <= gap` an ordinary gap,
/// anything beyond a huge gap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GapThresholds {
    pub flat: f64,
    pub gap: f64,
}

/// Composite-score cutoffs for the five sentiment labels. `score >= strong`
/// is strongly bullish, `score >= mild` mildly bullish, mirrored on the
/// negative side, interior is neutral.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentBands {
    pub mild: i32,
    pub strong: i32,
}

/// One fixed probability triple per sentiment label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProbabilityTable {
    pub strongly_bullish: ScenarioProbabilities,
    pub mildly_bullish: ScenarioProbabilities,
    pub neutral: ScenarioProbabilities,
    pub mildly_bearish: ScenarioProbabilities,
    pub strongly_bearish: ScenarioProbabilities,
}

impl ProbabilityTable {
    pub fn lookup(&self, label: SentimentLabel) -> ScenarioProbabilities {
        match label {
            SentimentLabel::StronglyBullish => self.strongly_bullish,
            SentimentLabel::MildlyBullish => self.mildly_bullish,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::MildlyBearish => self.mildly_bearish,
            SentimentLabel::StronglyBearish => self.strongly_bearish,
        }
    }

    fn rows(&self) -> [(SentimentLabel, ScenarioProbabilities); 5] {
        [
            (SentimentLabel::StronglyBullish, self.strongly_bullish),
            (SentimentLabel::MildlyBullish, self.mildly_bullish),
            (SentimentLabel::Neutral, self.neutral),
            (SentimentLabel::MildlyBearish, self.mildly_bearish),
            (SentimentLabel::StronglyBearish, self.strongly_bearish),
        ]
    }
}

/// Raw-signal thresholds for the special-condition flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConditionThresholds {
    /// India VIX above this reads as outright fear.
    pub vix_high: f64,
    /// India VIX above this reads as elevated but not extreme.
    pub vix_elevated: f64,
    /// PCR below this reads as overdone pessimism in the cash market.
    pub pcr_low: f64,
    /// PCR above this reads as extreme pessimism in options positioning.
    pub pcr_high: f64,
    /// FII net selling beyond this magnitude counts as notable.
    pub fii_selling: f64,
}

/// Full threshold configuration for one revision of the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringProfile {
    pub name: String,
    pub us_index: BandRule,
    pub asian_index: BandRule,
    pub cboe_vix: BandRule,
    pub crude: BandRule,
    pub gold: BandRule,
    pub usd_inr: BandRule,
    pub india_vix: VixLevelRule,
    pub pcr: PcrRule,
    pub fii: FlowRule,
    pub dii: FlowRule,
    pub gap: GapThresholds,
    pub sentiment: SentimentBands,
    pub probabilities: ProbabilityTable,
    pub conditions: ConditionThresholds,
    /// Whether this revision scores the three qualitative ratings.
    pub qualitative_inputs: bool,
}

impl ScoringProfile {
    /// The final revision: qualitative factors removed, label cutoffs
    /// tightened to ±2/±6 for the narrower score range.
    pub fn revised() -> Self {
        ScoringProfile {
            name: "revised".to_string(),
            us_index: BandRule {
                threshold: 0.2,
                above: 1,
                below: -1,
            },
            asian_index: BandRule {
                threshold: 0.2,
                above: 1,
                below: -1,
            },
            cboe_vix: BandRule {
                threshold: 7.0,
                above: -1,
                below: 1,
            },
            crude: BandRule {
                threshold: 1.5,
                above: -1,
                below: 1,
            },
            gold: BandRule {
                threshold: 1.0,
                above: -1,
                below: 1,
            },
            usd_inr: BandRule {
                threshold: 0.25,
                above: -1,
                below: 1,
            },
            india_vix: VixLevelRule {
                high: 22.0,
                low: 14.0,
                high_points: -2,
                low_points: 1,
            },
            pcr: PcrRule {
                contrarian_high: 1.7,
                bearish_low: 1.3,
                neutral_low: 0.7,
                bullish_low: 0.5,
            },
            fii: FlowRule { threshold: 1000.0 },
            dii: FlowRule { threshold: 750.0 },
            gap: GapThresholds {
                flat: 0.2,
                gap: 0.75,
            },
            sentiment: SentimentBands { mild: 2, strong: 6 },
            probabilities: default_probabilities(),
            conditions: ConditionThresholds {
                vix_high: 22.0,
                vix_elevated: 20.0,
                pcr_low: 0.7,
                pcr_high: 1.7,
                fii_selling: 750.0,
            },
            qualitative_inputs: false,
        }
    }

    /// The earlier revision: qualitative ratings included, wider label
    /// cutoffs (±3/±8), tighter huge-gap threshold, wider crude band.
    pub fn classic() -> Self {
        ScoringProfile {
            name: "classic".to_string(),
            crude: BandRule {
                threshold: 2.0,
                above: -1,
                below: 1,
            },
            gap: GapThresholds {
                flat: 0.2,
                gap: 0.5,
            },
            sentiment: SentimentBands { mild: 3, strong: 8 },
            qualitative_inputs: true,
            ..Self::revised()
        }
    }

    pub fn builtin(name: &str) -> Result<Self, DomainError> {
        name.parse()
    }

    /// Sanity-check the threshold tables. Custom profiles go through this
    /// before the engine accepts them.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (label, probs) in self.probabilities.rows() {
            if probs.total() != 100 {
                return Err(DomainError::InvalidInput(format!(
                    "Probabilities for '{label}' sum to {}, expected 100",
                    probs.total()
                )));
            }
        }
        if self.gap.flat <= 0.0 || self.gap.gap <= self.gap.flat {
            return Err(DomainError::InvalidInput(format!(
                "Gap thresholds must satisfy 0 < flat < gap, got {}/{}",
                self.gap.flat, self.gap.gap
            )));
        }
        if self.sentiment.mild <= 0 || self.sentiment.strong <= self.sentiment.mild {
            return Err(DomainError::InvalidInput(format!(
                "Sentiment bands must satisfy 0 < mild < strong, got {}/{}",
                self.sentiment.mild, self.sentiment.strong
            )));
        }
        if self.india_vix.low >= self.india_vix.high {
            return Err(DomainError::InvalidInput(format!(
                "India VIX bands must satisfy low < high, got {}/{}",
                self.india_vix.low, self.india_vix.high
            )));
        }
        let p = &self.pcr;
        if !(p.bullish_low < p.neutral_low
            && p.neutral_low < p.bearish_low
            && p.bearish_low < p.contrarian_high)
        {
            return Err(DomainError::InvalidInput(
                "PCR bands must be strictly increasing".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::revised()
    }
}

impl FromStr for ScoringProfile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "revised" => Ok(ScoringProfile::revised()),
            "classic" => Ok(ScoringProfile::classic()),
            _ => Err(DomainError::InvalidInput(format!(
                "Unknown profile: {s} (built-ins: revised, classic)"
            ))),
        }
    }
}

fn default_probabilities() -> ProbabilityTable {
    ProbabilityTable {
        strongly_bullish: ScenarioProbabilities {
            up: 70,
            side: 20,
            down: 10,
        },
        mildly_bullish: ScenarioProbabilities {
            up: 55,
            side: 30,
            down: 15,
        },
        neutral: ScenarioProbabilities {
            up: 33,
            side: 34,
            down: 33,
        },
        mildly_bearish: ScenarioProbabilities {
            up: 15,
            side: 30,
            down: 55,
        },
        strongly_bearish: ScenarioProbabilities {
            up: 10,
            side: 20,
            down: 70,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles_validate() {
        ScoringProfile::revised().validate().unwrap();
        ScoringProfile::classic().validate().unwrap();
    }

    #[test]
    fn test_unknown_profile_name() {
        assert!(ScoringProfile::builtin("experimental").is_err());
    }

    #[test]
    fn test_classic_differs_where_documented() {
        let classic = ScoringProfile::classic();
        assert_eq!(classic.sentiment.mild, 3);
        assert_eq!(classic.sentiment.strong, 8);
        assert!((classic.gap.gap - 0.5).abs() < f64::EPSILON);
        assert!(classic.qualitative_inputs);
    }

    #[test]
    fn test_validate_catches_bad_probability_row() {
        let mut profile = ScoringProfile::revised();
        profile.probabilities.neutral = ScenarioProbabilities {
            up: 33,
            side: 33,
            down: 33,
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_catches_inverted_gap_bands() {
        let mut profile = ScoringProfile::revised();
        profile.gap = GapThresholds {
            flat: 0.75,
            gap: 0.2,
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = ScoringProfile::classic();
        let json = serde_json::to_string(&profile).unwrap();
        let back: ScoringProfile = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();
        assert_eq!(back.name, "classic");
    }
}
