//! Common test utilities for API testing.
//!
//! Builds an in-process router backed by an in-memory database and a
//! scriptable classifier stub, so the full HTTP surface can be tested
//! without a network or a real model endpoint.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use reviews_core::{
    testing::StubClassifier, Config, CustomerResolver, Db, ReviewIngestionService, Sentiment,
    SentimentClassifier, SqliteCustomerStore, SqliteReviewStore,
};
use reviews_server::{create_router, AppState};

/// Test fixture wrapping the router and the classifier stub.
pub struct TestFixture {
    pub router: Router,
    /// The classifier behind the ingestion pipeline; reprogram it to
    /// drive sentiment outcomes or simulate endpoint failures.
    pub classifier: Arc<StubClassifier>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture whose classifier always answers POSITIVE.
    pub fn new() -> Self {
        let db = Arc::new(Db::in_memory().unwrap());
        let customer_store = Arc::new(SqliteCustomerStore::new(Arc::clone(&db)));
        let review_store = Arc::new(SqliteReviewStore::new(db));

        let classifier = Arc::new(StubClassifier::fixed(Sentiment::Positive));
        let customers = CustomerResolver::new(customer_store);
        let reviews = ReviewIngestionService::new(
            review_store,
            customers.clone(),
            Arc::clone(&classifier) as Arc<dyn SentimentClassifier>,
        );

        let state = Arc::new(AppState::new(Config::default(), customers, reviews));
        Self {
            router: create_router(state),
            classifier,
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, Some(body.to_string()))
            .await
    }

    /// POST a raw (possibly malformed) body with a JSON content type.
    pub async fn post_raw(&self, path: &str, raw: &str) -> TestResponse {
        self.request(Method::POST, path, Some(raw.to_string())).await
    }

    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, path, Some(body.to_string()))
            .await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request(Method::DELETE, path, None).await
    }

    async fn request(&self, method: Method, path: &str, body: Option<String>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        let body = match body {
            Some(raw) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(raw)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
