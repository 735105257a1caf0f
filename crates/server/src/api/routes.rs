use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{customers, handlers, reviews};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Customers
        .route("/customer", post(customers::create_customer))
        .route("/customer", get(customers::list_customers))
        .route("/customer/{id}", get(customers::get_customer))
        .route("/customer/{id}", put(customers::update_customer))
        .route("/customer/{id}", delete(customers::delete_customer))
        // Reviews
        .route("/review", post(reviews::create_review))
        .route("/review", get(reviews::find_reviews))
        .route("/review/{id}", delete(reviews::delete_review))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
