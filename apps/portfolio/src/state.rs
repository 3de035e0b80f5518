use std::sync::Arc;

use crate::config::Config;
use crate::db::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Load-once database cache; the only path to portfolio data.
    pub store: Arc<PortfolioStore>,
    pub config: Config,
}
