//! Customer API handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use reviews_core::{Customer, CustomerUpdate, NewCustomer};

use super::error::ApiError;
use crate::state::AppState;

/// POST /customer
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewCustomer>, JsonRejection>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let Json(new_customer) = body?;
    let created = state.customers().create(new_customer)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /customer
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.customers().list()?))
}

/// GET /customer/{id}
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.customers().get_by_id(id)?))
}

/// PUT /customer/{id}
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<Json<CustomerUpdate>, JsonRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Json(update) = body?;
    Ok(Json(state.customers().update(id, update)?))
}

/// DELETE /customer/{id}
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.customers().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
