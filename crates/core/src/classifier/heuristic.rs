//! Local lexicon fallback, used when no classifier token is configured.

use async_trait::async_trait;

use super::{ClassifierError, Sentiment, SentimentClassifier};

const NEGATIONS: &[&str] = &["no", "not", "never", "none", "without"];
const POSITIVE_WORDS: &[&str] = &["good", "great", "ok", "fine", "nice"];
const NEGATIVE_WORDS: &[&str] = &["bad", "poor", "awful", "terrible"];

/// Negation-scoring sentiment heuristic.
///
/// Scans case-folded tokens keeping a running score: positive words
/// count +1, negative words -1, and a negation word flips the sign of
/// the token right after it. Scores at or above zero read as positive;
/// the heuristic never produces a neutral verdict.
#[derive(Debug, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    fn score(text: &str) -> i32 {
        let mut score = 0;
        let mut negate_next = false;

        for word in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            let word = word.to_lowercase();
            if NEGATIONS.contains(&word.as_str()) {
                negate_next = true;
                continue;
            }

            if POSITIVE_WORDS.contains(&word.as_str()) {
                score += if negate_next { -1 } else { 1 };
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                score += if negate_next { 1 } else { -1 };
            }
            // A negation only applies to the very next token.
            negate_next = false;
        }

        score
    }
}

#[async_trait]
impl SentimentClassifier for HeuristicClassifier {
    fn name(&self) -> &str {
        "heuristic"
    }

    async fn classify(&self, text: &str) -> Result<Sentiment, ClassifierError> {
        Ok(if Self::score(text) >= 0 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        })
    }
}
