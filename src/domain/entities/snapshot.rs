use serde::{Deserialize, Serialize};

use crate::domain::values::qualitative::QualitativeRating;

/// One pre-market data entry session. All percentage fields are overnight (or
/// live-morning) changes in percent; flows are net figures in ₹ crores.
///
/// Signal fields default to zero, which every rule treats as "no signal".
/// The three reference values have no default: a snapshot without them is
/// rejected at parse time rather than silently scored against zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Nifty 50 previous close (spot).
    pub nifty_prev_close: f64,
    /// Nifty futures previous close.
    pub futures_prev_close: f64,
    /// GIFT Nifty current value, the indicative opening reference.
    pub gift_nifty: f64,

    #[serde(default)]
    pub dji_change_pct: f64,
    #[serde(default)]
    pub sp500_change_pct: f64,
    #[serde(default)]
    pub nasdaq_change_pct: f64,
    #[serde(default)]
    pub nikkei_change_pct: f64,
    #[serde(default)]
    pub hangseng_change_pct: f64,
    #[serde(default)]
    pub cboe_vix_change_pct: f64,
    #[serde(default)]
    pub crude_change_pct: f64,
    #[serde(default)]
    pub gold_change_pct: f64,
    /// Positive means INR depreciated.
    #[serde(default)]
    pub usd_inr_change_pct: f64,
    #[serde(default)]
    pub india_vix_level: f64,
    #[serde(default)]
    pub fii_net_crores: f64,
    #[serde(default)]
    pub dii_net_crores: f64,
    /// Nifty put/call ratio (OI-based).
    #[serde(default)]
    pub pcr: f64,

    // Qualitative ratings, scored only by profiles that enable them.
    #[serde(default)]
    pub news_sentiment: Option<QualitativeRating>,
    #[serde(default)]
    pub event_impact: Option<QualitativeRating>,
    #[serde(default)]
    pub prior_day_technicals: Option<QualitativeRating>,
}

impl MarketSnapshot {
    /// A snapshot with the given reference values and every signal at its
    /// neutral reading.
    pub fn neutral(nifty_prev_close: f64, futures_prev_close: f64, gift_nifty: f64) -> Self {
        MarketSnapshot {
            nifty_prev_close,
            futures_prev_close,
            gift_nifty,
            dji_change_pct: 0.0,
            sp500_change_pct: 0.0,
            nasdaq_change_pct: 0.0,
            nikkei_change_pct: 0.0,
            hangseng_change_pct: 0.0,
            cboe_vix_change_pct: 0.0,
            crude_change_pct: 0.0,
            gold_change_pct: 0.0,
            usd_inr_change_pct: 0.0,
            india_vix_level: 0.0,
            fii_net_crores: 0.0,
            dii_net_crores: 0.0,
            pcr: 0.0,
            news_sentiment: None,
            event_impact: None,
            prior_day_technicals: None,
        }
    }

    /// Pre-filled example used by `niftysent sample`.
    pub fn sample() -> Self {
        MarketSnapshot {
            dji_change_pct: 0.10,
            sp500_change_pct: 0.15,
            nasdaq_change_pct: 0.20,
            nikkei_change_pct: 0.05,
            hangseng_change_pct: -0.10,
            cboe_vix_change_pct: 1.0,
            crude_change_pct: -0.50,
            gold_change_pct: 0.20,
            usd_inr_change_pct: 0.05,
            india_vix_level: 15.50,
            fii_net_crores: 500.0,
            dii_net_crores: 300.0,
            pcr: 1.00,
            ..Self::neutral(22000.0, 22050.0, 22100.0)
        }
    }
}
