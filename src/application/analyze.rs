//! The analysis use case: one snapshot in, one complete analysis out.

use chrono::Utc;

use crate::application::aggregate::{probabilities_for, sentiment_for};
use crate::application::conditions;
use crate::application::opening::classify_opening;
use crate::application::scoring::{score_common_factors, GAP_FACTOR};
use crate::domain::entities::report::{Analysis, FactorScore, Report};
use crate::domain::entities::snapshot::MarketSnapshot;
use crate::domain::error::DomainError;
use crate::domain::values::profile::ScoringProfile;

pub struct AnalyzeUseCase {
    profile: ScoringProfile,
}

impl AnalyzeUseCase {
    pub fn new(profile: ScoringProfile) -> Result<Self, DomainError> {
        profile.validate()?;
        Ok(Self { profile })
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Run the full spot + futures analysis.
    ///
    /// The common factors are scored once and shared; only the opening gap
    /// differs between the two reference values. A zero reference aborts the
    /// whole run with a named error, so a partial report is never produced.
    pub fn execute(&self, snapshot: &MarketSnapshot) -> Result<Analysis, DomainError> {
        let common = score_common_factors(snapshot, &self.profile);
        let flags = conditions::evaluate(snapshot, &self.profile.conditions);
        let generated_at = Utc::now();

        let spot_opening = classify_opening(
            snapshot.nifty_prev_close,
            snapshot.gift_nifty,
            &self.profile.gap,
            "nifty_prev_close",
        )?;
        let futures_opening = classify_opening(
            snapshot.futures_prev_close,
            snapshot.gift_nifty,
            &self.profile.gap,
            "futures_prev_close",
        )?;

        let build = |opening: crate::domain::values::opening::OpeningCall| {
            let score = opening.points() + common.total;
            let sentiment = sentiment_for(score, &self.profile.sentiment);
            let mut factors = Vec::with_capacity(common.breakdown.len() + 1);
            factors.push(FactorScore::new(GAP_FACTOR, opening.points()));
            factors.extend(common.breakdown.iter().cloned());
            Report {
                opening,
                sentiment,
                score,
                factors,
                probabilities: probabilities_for(sentiment, &self.profile.probabilities),
                conditions: flags,
                generated_at,
            }
        };

        let spot = build(spot_opening);
        let futures = build(futures_opening);

        if spot.agrees_with(&futures) {
            Ok(Analysis::Consolidated { report: spot })
        } else {
            Ok(Analysis::Diverged { spot, futures })
        }
    }
}
