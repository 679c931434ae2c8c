use axum::{Router, routing::get};

use super::handlers::{self, probes::{healthz, livez}, ui};
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::home))
        .route("/jobs/:id", get(ui::details))
        .route("/add", get(ui::add_form).post(ui::add))
        .route("/api/jobs", get(handlers::jobs::list).post(handlers::jobs::create))
        .route("/api/jobs/:id", get(handlers::jobs::retrieve))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
