//! Composite-score classification.

use crate::domain::values::profile::{ProbabilityTable, SentimentBands};
use crate::domain::values::scenario::ScenarioProbabilities;
use crate::domain::values::sentiment::SentimentLabel;

/// Map a composite score onto the five ordered sentiment labels using the
/// profile's two cutoff magnitudes.
pub fn sentiment_for(score: i32, bands: &SentimentBands) -> SentimentLabel {
    if score >= bands.strong {
        SentimentLabel::StronglyBullish
    } else if score >= bands.mild {
        SentimentLabel::MildlyBullish
    } else if score <= -bands.strong {
        SentimentLabel::StronglyBearish
    } else if score <= -bands.mild {
        SentimentLabel::MildlyBearish
    } else {
        SentimentLabel::Neutral
    }
}

/// Indicative probability split for a label, from the profile's fixed table.
pub fn probabilities_for(label: SentimentLabel, table: &ProbabilityTable) -> ScenarioProbabilities {
    table.lookup(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::profile::ScoringProfile;

    #[test]
    fn test_revised_cutoffs() {
        let bands = ScoringProfile::revised().sentiment;
        assert_eq!(sentiment_for(6, &bands), SentimentLabel::StronglyBullish);
        assert_eq!(sentiment_for(2, &bands), SentimentLabel::MildlyBullish);
        assert_eq!(sentiment_for(1, &bands), SentimentLabel::Neutral);
        assert_eq!(sentiment_for(0, &bands), SentimentLabel::Neutral);
        assert_eq!(sentiment_for(-1, &bands), SentimentLabel::Neutral);
        assert_eq!(sentiment_for(-2, &bands), SentimentLabel::MildlyBearish);
        assert_eq!(sentiment_for(-6, &bands), SentimentLabel::StronglyBearish);
    }

    #[test]
    fn test_classic_cutoffs_are_wider() {
        let bands = ScoringProfile::classic().sentiment;
        assert_eq!(sentiment_for(2, &bands), SentimentLabel::Neutral);
        assert_eq!(sentiment_for(3, &bands), SentimentLabel::MildlyBullish);
        assert_eq!(sentiment_for(7, &bands), SentimentLabel::MildlyBullish);
        assert_eq!(sentiment_for(8, &bands), SentimentLabel::StronglyBullish);
    }

    #[test]
    fn test_every_label_has_a_valid_probability_row() {
        for profile in [ScoringProfile::revised(), ScoringProfile::classic()] {
            for label in [
                SentimentLabel::StronglyBullish,
                SentimentLabel::MildlyBullish,
                SentimentLabel::Neutral,
                SentimentLabel::MildlyBearish,
                SentimentLabel::StronglyBearish,
            ] {
                let probs = probabilities_for(label, &profile.probabilities);
                assert_eq!(probs.total(), 100, "{label} in {}", profile.name);
            }
        }
    }

    #[test]
    fn test_neutral_probabilities_match_table() {
        let table = ScoringProfile::revised().probabilities;
        let probs = probabilities_for(SentimentLabel::Neutral, &table);
        assert_eq!((probs.up, probs.side, probs.down), (33, 34, 33));
    }
}
