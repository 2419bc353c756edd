pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jd::handlers as jd_handlers;
use crate::matching::handlers as matching_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // JD management
        .route("/upload_jd_file", post(jd_handlers::handle_upload_jd_file))
        .route("/manual_jd", post(jd_handlers::handle_manual_jd))
        .route("/generate_jd", post(jd_handlers::handle_generate_jd))
        // Resume comparison
        .route(
            "/compare-jd-and-files/",
            post(matching_handlers::handle_compare),
        )
        .route(
            "/generate-emails/",
            post(matching_handlers::handle_generate_emails),
        )
        .with_state(state)
}
