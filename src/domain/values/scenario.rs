use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional bucket for the indicative probability split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bias {
    Up,
    Side,
    Down,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bias::Up => write!(f, "Up"),
            Bias::Side => write!(f, "Side"),
            Bias::Down => write!(f, "Down"),
        }
    }
}

/// Indicative Up/Side/Down probability split. Always sums to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioProbabilities {
    pub up: u8,
    pub side: u8,
    pub down: u8,
}

impl ScenarioProbabilities {
    pub fn new(up: u8, side: u8, down: u8) -> Result<Self, String> {
        let total = up as u32 + side as u32 + down as u32;
        if total != 100 {
            return Err(format!(
                "Scenario probabilities must sum to 100, got {total} ({up}/{side}/{down})"
            ));
        }
        Ok(ScenarioProbabilities { up, side, down })
    }

    pub fn total(&self) -> u32 {
        self.up as u32 + self.side as u32 + self.down as u32
    }

    fn buckets(&self) -> [(Bias, u8); 3] {
        [
            (Bias::Up, self.up),
            (Bias::Side, self.side),
            (Bias::Down, self.down),
        ]
    }

    /// Bucket with the highest percentage. Ties broken in Up, Side, Down order.
    pub fn primary(&self) -> Bias {
        let mut best = (Bias::Up, self.up);
        for (bias, pct) in self.buckets() {
            if pct > best.1 {
                best = (bias, pct);
            }
        }
        best.0
    }

    /// All buckets tied for the lowest percentage, in Up, Side, Down order.
    pub fn alternates(&self) -> Vec<Bias> {
        let min = self.up.min(self.side).min(self.down);
        self.buckets()
            .into_iter()
            .filter(|(_, pct)| *pct == min)
            .map(|(bias, _)| bias)
            .collect()
    }
}
