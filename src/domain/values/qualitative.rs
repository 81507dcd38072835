use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal rating for the qualitative factors (news sentiment, event impact,
/// previous-day technicals) carried by the classic profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualitativeRating {
    StronglyNegative,
    MildlyNegative,
    Neutral,
    MildlyPositive,
    StronglyPositive,
}

impl QualitativeRating {
    /// Point contribution in [-2, 2].
    pub fn points(&self) -> i32 {
        match self {
            QualitativeRating::StronglyNegative => -2,
            QualitativeRating::MildlyNegative => -1,
            QualitativeRating::Neutral => 0,
            QualitativeRating::MildlyPositive => 1,
            QualitativeRating::StronglyPositive => 2,
        }
    }
}

impl fmt::Display for QualitativeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualitativeRating::StronglyNegative => write!(f, "Strongly Negative"),
            QualitativeRating::MildlyNegative => write!(f, "Mildly Negative"),
            QualitativeRating::Neutral => write!(f, "Neutral"),
            QualitativeRating::MildlyPositive => write!(f, "Mildly Positive"),
            QualitativeRating::StronglyPositive => write!(f, "Strongly Positive"),
        }
    }
}

impl FromStr for QualitativeRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strongly_negative" => Ok(QualitativeRating::StronglyNegative),
            "mildly_negative" => Ok(QualitativeRating::MildlyNegative),
            "neutral" => Ok(QualitativeRating::Neutral),
            "mildly_positive" => Ok(QualitativeRating::MildlyPositive),
            "strongly_positive" => Ok(QualitativeRating::StronglyPositive),
            _ => Err(format!("Unknown qualitative rating: {s}")),
        }
    }
}
