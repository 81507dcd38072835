//! Common-factor scoring.
//!
//! Runs every signal rule from the profile against the snapshot and returns
//! the per-factor breakdown plus its total. The opening gap is scored
//! separately per reference value; everything here is shared between the spot
//! and futures analyses and computed once per invocation.

use crate::domain::entities::report::FactorScore;
use crate::domain::entities::snapshot::MarketSnapshot;
use crate::domain::values::profile::ScoringProfile;

/// Display name for the gap factor slot in the breakdown.
pub const GAP_FACTOR: &str = "GIFT Nifty Implied Opening";

pub struct CommonFactors {
    pub total: i32,
    pub breakdown: Vec<FactorScore>,
}

pub fn score_common_factors(
    snapshot: &MarketSnapshot,
    profile: &ScoringProfile,
) -> CommonFactors {
    let us_total = profile.us_index.score(snapshot.dji_change_pct)
        + profile.us_index.score(snapshot.sp500_change_pct)
        + profile.us_index.score(snapshot.nasdaq_change_pct);
    let asian_total = profile.asian_index.score(snapshot.nikkei_change_pct)
        + profile.asian_index.score(snapshot.hangseng_change_pct);

    let mut breakdown = vec![
        FactorScore::new("US Markets (Dow, S&P, Nasdaq)", us_total),
        FactorScore::new("Asian Markets (Nikkei, Hang Seng)", asian_total),
        FactorScore::new(
            "India VIX Level",
            profile.india_vix.score(snapshot.india_vix_level),
        ),
        FactorScore::new("Nifty PCR", profile.pcr.score(snapshot.pcr)),
        FactorScore::new("FII Net Flow", profile.fii.score(snapshot.fii_net_crores)),
        FactorScore::new("DII Net Flow", profile.dii.score(snapshot.dii_net_crores)),
        FactorScore::new(
            "Crude Oil Change",
            profile.crude.score(snapshot.crude_change_pct),
        ),
        FactorScore::new("Gold Change", profile.gold.score(snapshot.gold_change_pct)),
        FactorScore::new(
            "USD/INR Change",
            profile.usd_inr.score(snapshot.usd_inr_change_pct),
        ),
        FactorScore::new(
            "CBOE VIX Change",
            profile.cboe_vix.score(snapshot.cboe_vix_change_pct),
        ),
    ];

    if profile.qualitative_inputs {
        breakdown.push(FactorScore::new(
            "News Sentiment",
            snapshot.news_sentiment.map_or(0, |r| r.points()),
        ));
        breakdown.push(FactorScore::new(
            "Major Event Impact",
            snapshot.event_impact.map_or(0, |r| r.points()),
        ));
        breakdown.push(FactorScore::new(
            "Previous Day Technicals",
            snapshot.prior_day_technicals.map_or(0, |r| r.points()),
        ));
    }

    let total = breakdown.iter().map(|f| f.points).sum();
    CommonFactors { total, breakdown }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::qualitative::QualitativeRating;

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot::neutral(22000.0, 22000.0, 22000.0)
    }

    #[test]
    fn test_neutral_snapshot_scores_zero() {
        let result = score_common_factors(&snapshot(), &ScoringProfile::revised());
        assert_eq!(result.total, 0);
        assert!(result.breakdown.iter().all(|f| f.points == 0));
    }

    #[test]
    fn test_us_indices_score_individually() {
        let mut s = snapshot();
        s.dji_change_pct = 0.3;
        s.sp500_change_pct = 0.3;
        s.nasdaq_change_pct = -0.1; // inside the band
        let result = score_common_factors(&s, &ScoringProfile::revised());
        assert_eq!(result.total, 2);
        let us = result
            .breakdown
            .iter()
            .find(|f| f.name.starts_with("US Markets"))
            .unwrap();
        assert_eq!(us.points, 2);
    }

    #[test]
    fn test_total_matches_breakdown_sum() {
        let mut s = snapshot();
        s.dji_change_pct = 0.5;
        s.crude_change_pct = 2.0;
        s.india_vix_level = 25.0;
        s.fii_net_crores = 1500.0;
        let result = score_common_factors(&s, &ScoringProfile::revised());
        let sum: i32 = result.breakdown.iter().map(|f| f.points).sum();
        assert_eq!(result.total, sum);
        // +1 (Dow) -1 (crude) -2 (VIX) +1 (FII)
        assert_eq!(result.total, -1);
    }

    #[test]
    fn test_qualitative_factors_only_in_classic() {
        let mut s = snapshot();
        s.news_sentiment = Some(QualitativeRating::StronglyPositive);

        let revised = score_common_factors(&s, &ScoringProfile::revised());
        assert_eq!(revised.total, 0);
        assert!(!revised.breakdown.iter().any(|f| f.name == "News Sentiment"));

        let classic = score_common_factors(&s, &ScoringProfile::classic());
        assert_eq!(classic.total, 2);
        assert!(classic.breakdown.iter().any(|f| f.name == "News Sentiment"));
    }

    #[test]
    fn test_missing_qualitative_ratings_are_neutral() {
        let result = score_common_factors(&snapshot(), &ScoringProfile::classic());
        assert_eq!(result.total, 0);
    }
}
