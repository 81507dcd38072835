//! Opening-gap classification.

use crate::domain::error::DomainError;
use crate::domain::values::opening::OpeningCall;
use crate::domain::values::profile::GapThresholds;

/// Classify the expected opening from the gap between a previous-close
/// reference and the current indicative value.
///
/// A zero reference makes the percentage gap undefined; that is reported as
/// an [`DomainError::InvalidReference`] naming the offending field, never a
/// division.
pub fn classify_opening(
    previous_close: f64,
    indicative: f64,
    thresholds: &GapThresholds,
    reference_field: &str,
) -> Result<OpeningCall, DomainError> {
    if previous_close == 0.0 {
        return Err(DomainError::InvalidReference(format!(
            "{reference_field} is zero; cannot compute the opening gap"
        )));
    }
    let pct_change = (indicative - previous_close) / previous_close * 100.0;
    let call = if pct_change.abs() < thresholds.flat {
        OpeningCall::Flat
    } else if pct_change.abs() <= thresholds.gap {
        if pct_change > 0.0 {
            OpeningCall::GapUp
        } else {
            OpeningCall::GapDown
        }
    } else if pct_change > 0.0 {
        OpeningCall::HugeGapUp
    } else {
        OpeningCall::HugeGapDown
    };
    Ok(call)
}
