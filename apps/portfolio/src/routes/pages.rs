//! Axum handlers for the HTML pages.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, error};

use crate::errors::AppError;
use crate::pages::layout::render_document;
use crate::pages::{render_page, Page, PageQuery, RenderContext, RenderedPage};
use crate::state::AppState;

const REDUCED_MOTION_HINT: &str = "sec-ch-prefers-reduced-motion";
const VIEWPORT_WIDTH_HINT: &str = "sec-ch-viewport-width";

fn prefers_reduced_motion(headers: &HeaderMap) -> bool {
    headers
        .get(REDUCED_MOTION_HINT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().trim_matches('"').eq_ignore_ascii_case("reduce"))
        .unwrap_or(false)
}

fn viewport_width(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(VIEWPORT_WIDTH_HINT)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// GET /
pub async fn handle_home(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    serve_page(Page::Home, &state, &headers, &query).await
}

/// GET /:page
pub async fn handle_page(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Response, AppError> {
    let page = Page::from_name(&name);
    if page.as_str() != name.trim_end_matches(".html") {
        debug!("Unknown page '{name}', rendering {page}");
    }
    serve_page(page, &state, &headers, &query).await
}

/// Anything that is neither a page nor an API route.
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

async fn serve_page(
    page: Page,
    state: &AppState,
    headers: &HeaderMap,
    query: &PageQuery,
) -> Result<Response, AppError> {
    let ctx = RenderContext {
        site: &state.config.site,
        query,
        reduced_motion: query.reduced_motion() || prefers_reduced_motion(headers),
        viewport_width: viewport_width(headers),
    };

    let db = match state.store.load_db().await {
        Ok(db) => db,
        Err(e) => {
            error!("Rendering {page} without data: {e}");
            let html = render_document(&RenderedPage::empty(page, &ctx), query, "", Some(&e.to_string()));
            return Ok((StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response());
        }
    };

    let rendered = render_page(page, &db, &ctx)?;
    debug!("Rendered {page} page");
    Ok(Html(render_document(&rendered, query, &db.profile.full_name, None)).into_response())
}
