//! Remote star-rating classifier client.
//!
//! Sends the review text to a hosted text-classification model that
//! scores it on a 1-to-5 star scale and maps the best-scored label to a
//! three-way sentiment.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{ClassifierError, Sentiment, SentimentClassifier};

/// Default inference endpoint (multilingual 1-to-5 star review model).
pub const DEFAULT_CLASSIFIER_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/nlptown/bert-base-multilingual-uncased-sentiment";

/// Client for the remote classification endpoint.
pub struct RemoteClassifier {
    client: reqwest::Client,
    token: String,
    endpoint: String,
}

impl RemoteClassifier {
    pub fn new(token: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            token: token.into(),
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

/// One (label, confidence) pair from the model, e.g. `{"label": "4 stars", "score": 0.61}`.
#[derive(Debug, Deserialize)]
struct Rating {
    label: String,
    score: f64,
}

/// Map the model's ranked label list to a sentiment.
///
/// The best-scored label wins, first seen on ties. The label's leading
/// integer is the star count: 1-2 negative, 3 neutral, 4-5 positive.
/// An empty list or an unparseable label reads as neutral.
fn sentiment_from_ratings(ratings: &[Rating]) -> Sentiment {
    let mut best: Option<&Rating> = None;
    for rating in ratings {
        if best.is_none_or(|b| rating.score > b.score) {
            best = Some(rating);
        }
    }

    let stars = best
        .and_then(|r| r.label.split_whitespace().next())
        .and_then(|token| token.parse::<u8>().ok());

    match stars {
        None => Sentiment::Neutral,
        Some(n) if n <= 2 => Sentiment::Negative,
        Some(3) => Sentiment::Neutral,
        Some(_) => Sentiment::Positive,
    }
}

#[async_trait]
impl SentimentClassifier for RemoteClassifier {
    fn name(&self) -> &str {
        "remote"
    }

    async fn classify(&self, text: &str) -> Result<Sentiment, ClassifierError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&ClassifyRequest { inputs: text })
            .send()
            .await
            .map_err(|e| ClassifierError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // The endpoint answers with one rating list per input text. A
        // 200 that does not match that shape is treated as "no usable
        // verdict", not as a failure.
        let ratings: Vec<Vec<Rating>> = match response.json().await {
            Ok(ratings) => ratings,
            Err(e) => {
                warn!("Malformed classifier response: {}", e);
                return Ok(Sentiment::Neutral);
            }
        };

        Ok(sentiment_from_ratings(
            ratings.first().map(Vec::as_slice).unwrap_or(&[]),
        ))
    }
}
