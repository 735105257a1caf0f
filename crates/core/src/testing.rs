//! Test doubles shared by unit tests and the server integration suite.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::classifier::{ClassifierError, Sentiment, SentimentClassifier};

enum StubResponse {
    Sentiment(Sentiment),
    ApiFailure { status: u16, message: String },
}

/// Scriptable classifier: answers with a fixed sentiment or a fixed
/// API failure, and counts how often it was called.
pub struct StubClassifier {
    response: Mutex<StubResponse>,
    calls: AtomicUsize,
}

impl StubClassifier {
    pub fn fixed(sentiment: Sentiment) -> Self {
        Self {
            response: Mutex::new(StubResponse::Sentiment(sentiment)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            response: Mutex::new(StubResponse::ApiFailure {
                status,
                message: message.to_string(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_sentiment(&self, sentiment: Sentiment) {
        *self.response.lock().unwrap() = StubResponse::Sentiment(sentiment);
    }

    pub fn set_failure(&self, status: u16, message: &str) {
        *self.response.lock().unwrap() = StubResponse::ApiFailure {
            status,
            message: message.to_string(),
        };
    }

    /// Number of classify calls seen so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentClassifier for StubClassifier {
    fn name(&self) -> &str {
        "stub"
    }

    async fn classify(&self, _text: &str) -> Result<Sentiment, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &*self.response.lock().unwrap() {
            StubResponse::Sentiment(sentiment) => Ok(*sentiment),
            StubResponse::ApiFailure { status, message } => Err(ClassifierError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
