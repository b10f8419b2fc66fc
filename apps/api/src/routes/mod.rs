pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::schema::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/validate", post(handlers::handle_validate))
        .route("/api/v1/options/:set", get(handlers::handle_get_options))
}
