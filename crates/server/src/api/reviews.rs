//! Review API handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use reviews_core::{Review, ReviewSubmission, Sentiment};

use super::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReviewQueryParams {
    /// Optional sentiment filter, e.g. `?type=NEGATIVE`.
    #[serde(default, rename = "type")]
    pub sentiment: Option<String>,
}

/// POST /review
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ReviewSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let Json(submission) = body?;
    let created = state.reviews().create_review(submission).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /review
pub async fn find_reviews(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewQueryParams>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let sentiment = match params.sentiment.as_deref() {
        Some(raw) => Some(Sentiment::parse(raw).ok_or_else(|| {
            ApiError::enum_value_invalid(format!("unknown review type: {}", raw))
        })?),
        None => None,
    };

    Ok(Json(state.reviews().find_reviews(sentiment)?))
}

/// DELETE /review/{id}
pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.reviews().delete_review(id)?;
    Ok(StatusCode::NO_CONTENT)
}
