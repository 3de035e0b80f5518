//! Data loader: fetches the portfolio database once and hands out the cached copy.
//!
//! The database is read-only after load. `PortfolioStore` is constructed once in
//! `main` and injected through `AppState`; nothing else reads the source.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::models::PortfolioDatabase;

pub mod format;

pub use format::{escape_html, escape_opt, format_range};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not load portfolio-data.json (HTTP {0}).")]
    Status(u16),

    #[error("Could not load portfolio-data.json: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Could not read portfolio-data.json: {0}")]
    Io(#[from] std::io::Error),

    #[error("portfolio-data.json is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the raw database bytes come from.
#[async_trait]
pub trait DbSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Reads the database from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DbSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches the database over HTTP, bypassing intermediate caches.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl DbSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .header("cache-control", "no-cache")
            .header("pragma", "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Database fetch from {} returned {}", self.url, status);
            return Err(LoadError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise.
pub fn source_from_location(location: &str) -> Arc<dyn DbSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpSource::new(location))
    } else {
        Arc::new(FileSource::new(location))
    }
}

/// Load-once, read-many holder for the portfolio database.
///
/// A failed load leaves the cell empty, so the next page load tries again.
pub struct PortfolioStore {
    source: Arc<dyn DbSource>,
    cell: OnceCell<Arc<PortfolioDatabase>>,
}

impl PortfolioStore {
    pub fn new(source: Arc<dyn DbSource>) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached database, fetching and parsing it on first use.
    pub async fn load_db(&self) -> Result<Arc<PortfolioDatabase>, LoadError> {
        let db = self
            .cell
            .get_or_try_init(|| async {
                info!("Loading portfolio database from {}", self.source.describe());
                let bytes = self.source.fetch().await?;
                let db: PortfolioDatabase = serde_json::from_slice(&bytes)?;
                let db = db.canonicalize();
                debug!(
                    "Portfolio database loaded: {} projects, {} experience, {} certifications",
                    db.projects.len(),
                    db.experience.len(),
                    db.certifications.len()
                );
                Ok::<_, LoadError>(Arc::new(db))
            })
            .await?;
        Ok(Arc::clone(db))
    }

    pub fn cached(&self) -> Option<Arc<PortfolioDatabase>> {
        self.cell.get().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::{http::StatusCode, routing::get, Router};

    const SAMPLE: &str = r#"{
        "profile": { "fullName": "Ada Lovelace" },
        "skills": { "topSkills": ["Rust"], "additionalSkills": ["SQL"] },
        "projects": [{ "title": "Alpha", "start": "2024-01" }]
    }"#;

    struct CountingSource {
        calls: AtomicUsize,
        fail_first: bool,
    }

    #[async_trait]
    impl DbSource for CountingSource {
        async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && n == 0 {
                return Err(LoadError::Status(503));
            }
            Ok(SAMPLE.as_bytes().to_vec())
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_db_fetches_once() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail_first: false,
        });
        let store = PortfolioStore::new(source.clone());
        assert!(store.cached().is_none());

        let first = store.load_db().await.unwrap();
        let second = store.load_db().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(store.cached().is_some());
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let source = Arc::new(CountingSource {
            calls: AtomicUsize::new(0),
            fail_first: true,
        });
        let store = PortfolioStore::new(source.clone());

        let err = store.load_db().await.unwrap_err();
        assert!(matches!(err, LoadError::Status(503)));
        assert!(store.cached().is_none());

        let db = store.load_db().await.unwrap();
        assert_eq!(db.profile.full_name, "Ada Lovelace");
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_file_source_loads_and_canonicalizes_skills() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = PortfolioStore::new(source_from_location(&file.path().to_string_lossy()));
        let db = store.load_db().await.unwrap();

        let categories = db.skill_categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].items, vec!["Rust", "SQL"]);
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let store = PortfolioStore::new(Arc::new(FileSource::new(file.path())));
        let err = store.load_db().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let store = PortfolioStore::new(Arc::new(FileSource::new("/nonexistent/portfolio.json")));
        assert!(matches!(store.load_db().await, Err(LoadError::Io(_))));
    }

    async fn spawn_server() -> String {
        let app = Router::new()
            .route("/portfolio-data.json", get(|| async { SAMPLE }))
            .route(
                "/missing.json",
                get(|| async { (StatusCode::NOT_FOUND, "nope") }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_http_source_loads_database() {
        let base = spawn_server().await;
        let store = PortfolioStore::new(source_from_location(&format!(
            "{base}/portfolio-data.json"
        )));
        let db = store.load_db().await.unwrap();
        assert_eq!(db.projects[0].title, "Alpha");
    }

    #[tokio::test]
    async fn test_http_source_surfaces_status() {
        let base = spawn_server().await;
        let store = PortfolioStore::new(source_from_location(&format!("{base}/missing.json")));
        let err = store.load_db().await.unwrap_err();
        assert!(matches!(err, LoadError::Status(404)));
        assert_eq!(
            err.to_string(),
            "Could not load portfolio-data.json (HTTP 404)."
        );
    }
}
