//! Sentiment classification for review text.
//!
//! The classifier is an injected capability rather than a global
//! function so the ingestion pipeline can be tested with a stub. Two
//! implementations exist: a remote star-rating model behind a bearer
//! token, and a local lexicon heuristic used when no token is
//! configured.

mod heuristic;
mod remote;

pub use heuristic::HeuristicClassifier;
pub use remote::{RemoteClassifier, DEFAULT_CLASSIFIER_ENDPOINT};

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::ClassifierConfig;

/// The three-way sentiment assigned to every review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Negative => "NEGATIVE",
        }
    }

    /// Parse the wire form, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from the remote classification endpoint.
///
/// These are external-service failures and abort review creation; they
/// are never silently degraded to a guessed sentiment.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("classifier request failed: {0}")]
    Http(String),
}

/// Trait for sentiment classifiers.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Implementation name (e.g. "remote", "heuristic").
    fn name(&self) -> &str;

    /// Classify a review text.
    async fn classify(&self, text: &str) -> Result<Sentiment, ClassifierError>;
}

/// Build the classifier the configuration asks for: remote when a
/// bearer token is present, the local heuristic otherwise.
pub fn classifier_from_config(config: &ClassifierConfig) -> Arc<dyn SentimentClassifier> {
    match config.token.as_deref() {
        Some(token) if !token.trim().is_empty() => {
            info!("Using remote sentiment classifier at {}", config.endpoint);
            Arc::new(RemoteClassifier::new(
                token,
                &config.endpoint,
                config.timeout_secs,
            ))
        }
        _ => {
            info!("No classifier token configured, falling back to the lexicon heuristic");
            Arc::new(HeuristicClassifier::new())
        }
    }
}
