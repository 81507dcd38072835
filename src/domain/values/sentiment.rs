use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    StronglyBullish,
    MildlyBullish,
    Neutral,
    MildlyBearish,
    StronglyBearish,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::StronglyBullish => write!(f, "Strongly Bullish"),
            SentimentLabel::MildlyBullish => write!(f, "Mildly Bullish"),
            SentimentLabel::Neutral => write!(f, "Neutral / Range-bound"),
            SentimentLabel::MildlyBearish => write!(f, "Mildly Bearish"),
            SentimentLabel::StronglyBearish => write!(f, "Strongly Bearish"),
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strongly_bullish" => Ok(SentimentLabel::StronglyBullish),
            "mildly_bullish" => Ok(SentimentLabel::MildlyBullish),
            "neutral" => Ok(SentimentLabel::Neutral),
            "mildly_bearish" => Ok(SentimentLabel::MildlyBearish),
            "strongly_bearish" => Ok(SentimentLabel::StronglyBearish),
            _ => Err(format!("Unknown sentiment label: {s}")),
        }
    }
}
