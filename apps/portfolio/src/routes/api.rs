//! JSON endpoints used to re-render a single list as the user types.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::PortfolioDatabase;
use crate::pages::home::{skills_fragment, SkillsFragment};
use crate::pages::lists::{search_certifications, search_projects, ListFragment};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub q: String,
    pub skill: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// GET /api/v1/projects
pub async fn handle_search_projects(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ListFragment>, AppError> {
    let db = state.store.load_db().await?;
    Ok(Json(search_projects(
        &db,
        &state.config.site,
        &params.q,
        &params.skill,
    )))
}

/// GET /api/v1/certifications
pub async fn handle_search_certifications(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ListFragment>, AppError> {
    let db = state.store.load_db().await?;
    Ok(Json(search_certifications(&db, &params.q, &params.skill)))
}

/// GET /api/v1/skills
pub async fn handle_skills(
    State(state): State<AppState>,
    Query(params): Query<CategoryQuery>,
) -> Result<Json<SkillsFragment>, AppError> {
    let db = state.store.load_db().await?;
    Ok(Json(skills_fragment(
        &db,
        &state.config.site,
        params.category.as_deref(),
    )))
}

/// GET /api/v1/portfolio
pub async fn handle_portfolio(
    State(state): State<AppState>,
) -> Result<Json<PortfolioDatabase>, AppError> {
    let db = state.store.load_db().await?;
    Ok(Json(db.as_ref().clone()))
}
