//! Special-condition flags.
//!
//! Evaluated over the raw signals, not the derived score. Each flag is
//! independent of the others; any subset can be set on one report.

use crate::domain::entities::report::SpecialConditions;
use crate::domain::entities::snapshot::MarketSnapshot;
use crate::domain::values::profile::ConditionThresholds;

pub fn evaluate(snapshot: &MarketSnapshot, thresholds: &ConditionThresholds) -> SpecialConditions {
    // A PCR of zero is missing data; a missing ratio never triggers the
    // low-PCR or high-PCR patterns.
    let pcr_known = snapshot.pcr != 0.0;

    SpecialConditions {
        high_reward_dii_vix: snapshot.dii_net_crores > 0.0
            && snapshot.india_vix_level > thresholds.vix_high,
        bear_trap_fii_pcr: snapshot.fii_net_crores < -thresholds.fii_selling
            && pcr_known
            && snapshot.pcr < thresholds.pcr_low,
        oversold_bounce_risk: snapshot.pcr > thresholds.pcr_high
            && snapshot.india_vix_level > thresholds.vix_elevated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::profile::ScoringProfile;

    fn thresholds() -> ConditionThresholds {
        ScoringProfile::revised().conditions
    }

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot::neutral(22000.0, 22000.0, 22000.0)
    }

    #[test]
    fn test_no_flags_on_neutral_inputs() {
        let flags = evaluate(&snapshot(), &thresholds());
        assert!(!flags.any());
        assert_eq!(flags.count(), 0);
    }

    #[test]
    fn test_high_reward_needs_both_legs() {
        let mut s = snapshot();
        s.dii_net_crores = 400.0;
        s.india_vix_level = 23.0;
        assert!(evaluate(&s, &thresholds()).high_reward_dii_vix);

        s.india_vix_level = 21.0; // VIX no longer above the high bar
        assert!(!evaluate(&s, &thresholds()).high_reward_dii_vix);
    }

    #[test]
    fn test_bear_trap_alone() {
        let mut s = snapshot();
        s.fii_net_crores = -900.0;
        s.pcr = 0.6;
        let flags = evaluate(&s, &thresholds());
        assert!(flags.bear_trap_fii_pcr);
        assert!(!flags.high_reward_dii_vix);
        assert!(!flags.oversold_bounce_risk);
        assert_eq!(flags.count(), 1);
    }

    #[test]
    fn test_bear_trap_ignores_missing_pcr() {
        let mut s = snapshot();
        s.fii_net_crores = -900.0;
        s.pcr = 0.0;
        assert!(!evaluate(&s, &thresholds()).bear_trap_fii_pcr);
    }

    #[test]
    fn test_oversold_bounce_uses_elevated_vix_bar() {
        let mut s = snapshot();
        s.pcr = 1.8;
        s.india_vix_level = 21.0; // above elevated (20) but below high (22)
        let flags = evaluate(&s, &thresholds());
        assert!(flags.oversold_bounce_risk);
        assert!(!flags.high_reward_dii_vix);
    }

    #[test]
    fn test_flags_can_coexist() {
        let mut s = snapshot();
        s.dii_net_crores = 500.0;
        s.india_vix_level = 23.0;
        s.pcr = 1.8;
        let flags = evaluate(&s, &thresholds());
        assert!(flags.high_reward_dii_vix);
        assert!(flags.oversold_bounce_risk);
        assert_eq!(flags.count(), 2);
    }
}
