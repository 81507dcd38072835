use serde::{Deserialize, Serialize};
use std::fmt;

/// How the market is expected to open relative to the previous close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningCall {
    Flat,
    GapUp,
    GapDown,
    HugeGapUp,
    HugeGapDown,
}

impl OpeningCall {
    /// Point contribution of the opening gap to the composite score.
    /// Flat contributes nothing, an ordinary gap ±1, a huge gap ±2.
    pub fn points(&self) -> i32 {
        match self {
            OpeningCall::Flat => 0,
            OpeningCall::GapUp => 1,
            OpeningCall::GapDown => -1,
            OpeningCall::HugeGapUp => 2,
            OpeningCall::HugeGapDown => -2,
        }
    }
}

impl fmt::Display for OpeningCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpeningCall::Flat => write!(f, "Flat Opening"),
            OpeningCall::GapUp => write!(f, "Gap Up Opening"),
            OpeningCall::GapDown => write!(f, "Gap Down Opening"),
            OpeningCall::HugeGapUp => write!(f, "Huge Gap Up Opening"),
            OpeningCall::HugeGapDown => write!(f, "Huge Gap Down Opening"),
        }
    }
}
