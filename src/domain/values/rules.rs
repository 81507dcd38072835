//! Threshold tables for the individual signal scorers.
//!
//! Each rule is a small, total function from one raw market reading to an
//! integer point contribution. The tables carry the declared sign mapping as
//! data: a rule where a *rising* input scores *negative* (crude, gold,
//! USD/INR) stores that inversion explicitly rather than inferring the point
//! sign from the input sign.
//!
//! Every rule has a defined fallthrough value, so no rule can fail: exact
//! threshold boundaries and the zero "no signal" case all score a concrete
//! number of points.

use serde::{Deserialize, Serialize};

/// Symmetric band around zero with explicit point values on each side.
///
/// `change_pct > threshold` scores `above`, `change_pct < -threshold` scores
/// `below`, everything inside the band (boundaries included) scores 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandRule {
    pub threshold: f64,
    pub above: i32,
    pub below: i32,
}

impl BandRule {
    pub fn score(&self, change_pct: f64) -> i32 {
        if change_pct > self.threshold {
            self.above
        } else if change_pct < -self.threshold {
            self.below
        } else {
            0
        }
    }
}

/// Volatility-index *level* rule. A level of exactly zero is treated as
/// missing data, not as a calm reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VixLevelRule {
    /// Above this level: elevated fear.
    pub high: f64,
    /// Below this level: complacency / low fear.
    pub low: f64,
    pub high_points: i32,
    pub low_points: i32,
}

impl VixLevelRule {
    pub fn score(&self, level: f64) -> i32 {
        if level == 0.0 {
            return 0;
        }
        if level > self.high {
            self.high_points
        } else if level < self.low {
            self.low_points
        } else {
            0
        }
    }
}

/// Put/call ratio rule: five bands, non-monotonic by design. Both tails are
/// contrarian signals with the opposite sign of the adjacent band.
///
/// Band boundaries preserve the original inclusivity exactly:
/// `> contrarian_high` → +1, `(bearish_low, contrarian_high]` → −1,
/// `[neutral_low, bearish_low]` → 0, `[bullish_low, neutral_low)` → +1,
/// `< bullish_low` → −1. A ratio of exactly zero is missing data → 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PcrRule {
    pub contrarian_high: f64,
    pub bearish_low: f64,
    pub neutral_low: f64,
    pub bullish_low: f64,
}

impl PcrRule {
    pub fn score(&self, ratio: f64) -> i32 {
        if ratio == 0.0 {
            return 0;
        }
        if ratio > self.contrarian_high {
            1
        } else if ratio > self.bearish_low {
            -1
        } else if ratio >= self.neutral_low {
            0
        } else if ratio >= self.bullish_low {
            1
        } else {
            -1
        }
    }
}

/// Institutional net-flow rule. Thresholds are asymmetric across investor
/// classes (FII vs DII carry different magnitudes), symmetric around zero
/// within a class.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlowRule {
    pub threshold: f64,
}

impl FlowRule {
    pub fn score(&self, net_flow: f64) -> i32 {
        if net_flow > self.threshold {
            1
        } else if net_flow < -self.threshold {
            -1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_band() -> BandRule {
        BandRule {
            threshold: 0.2,
            above: 1,
            below: -1,
        }
    }

    #[test]
    fn test_band_strict_boundaries() {
        let rule = index_band();
        assert_eq!(rule.score(0.21), 1);
        assert_eq!(rule.score(-0.21), -1);
        assert_eq!(rule.score(0.1), 0);
        // Exactly on the boundary falls inside the band: > semantics, not >=.
        assert_eq!(rule.score(0.2), 0);
        assert_eq!(rule.score(-0.2), 0);
        assert_eq!(rule.score(0.0), 0);
    }

    #[test]
    fn test_band_inverted_sign_mapping() {
        // Rising crude is negative for the index; the table says so directly.
        let crude = BandRule {
            threshold: 1.5,
            above: -1,
            below: 1,
        };
        assert_eq!(crude.score(2.0), -1);
        assert_eq!(crude.score(-2.0), 1);
        assert_eq!(crude.score(1.5), 0);
    }

    #[test]
    fn test_vix_level_bands() {
        let rule = VixLevelRule {
            high: 22.0,
            low: 14.0,
            high_points: -2,
            low_points: 1,
        };
        assert_eq!(rule.score(25.0), -2);
        assert_eq!(rule.score(12.0), 1);
        assert_eq!(rule.score(18.0), 0);
        assert_eq!(rule.score(22.0), 0);
        assert_eq!(rule.score(14.0), 0);
    }

    #[test]
    fn test_vix_zero_is_missing_data() {
        let rule = VixLevelRule {
            high: 22.0,
            low: 14.0,
            high_points: -2,
            low_points: 1,
        };
        // Zero would otherwise read as extreme complacency (+1).
        assert_eq!(rule.score(0.0), 0);
    }

    fn pcr() -> PcrRule {
        PcrRule {
            contrarian_high: 1.7,
            bearish_low: 1.3,
            neutral_low: 0.7,
            bullish_low: 0.5,
        }
    }

    #[test]
    fn test_pcr_non_monotonic_tails() {
        let rule = pcr();
        assert_eq!(rule.score(1.8), 1); // contrarian bullish: oversold
        assert_eq!(rule.score(0.3), -1); // contrarian bearish: complacency
        assert_eq!(rule.score(1.0), 0);
    }

    #[test]
    fn test_pcr_interior_bands() {
        let rule = pcr();
        assert_eq!(rule.score(1.5), -1);
        assert_eq!(rule.score(0.6), 1);
    }

    #[test]
    fn test_pcr_exact_boundaries() {
        let rule = pcr();
        assert_eq!(rule.score(1.7), -1); // (1.3, 1.7] is bearish
        assert_eq!(rule.score(1.3), 0); // [0.7, 1.3] is neutral
        assert_eq!(rule.score(0.7), 0);
        assert_eq!(rule.score(0.5), 1); // [0.5, 0.7) is bullish
        assert_eq!(rule.score(0.49), -1);
    }

    #[test]
    fn test_pcr_zero_is_missing_data() {
        assert_eq!(pcr().score(0.0), 0);
    }

    #[test]
    fn test_flow_thresholds() {
        let fii = FlowRule { threshold: 1000.0 };
        assert_eq!(fii.score(1200.0), 1);
        assert_eq!(fii.score(-1200.0), -1);
        assert_eq!(fii.score(1000.0), 0);
        assert_eq!(fii.score(500.0), 0);

        let dii = FlowRule { threshold: 750.0 };
        assert_eq!(dii.score(800.0), 1);
        assert_eq!(dii.score(-800.0), -1);
        assert_eq!(dii.score(-750.0), 0);
    }
}
