pub mod api;
pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route("/", get(pages::handle_home))
        .route("/:page", get(pages::handle_page))
        // List fragments for live filtering
        .route("/api/v1/projects", get(api::handle_search_projects))
        .route(
            "/api/v1/certifications",
            get(api::handle_search_certifications),
        )
        .route("/api/v1/skills", get(api::handle_skills))
        .route("/api/v1/portfolio", get(api::handle_portfolio))
        .fallback(pages::handle_not_found)
        .with_state(state)
}
