use std::str::FromStr;

use anyhow::{Context, Result};

use crate::projection::ordering::LATEST_PROJECTS;
use crate::projection::RepoLinkPredicate;
use crate::render::cards::PHOTO_FALLBACK;
use crate::widgets::mobile_nav::NAV_BREAKPOINT_PX;
use crate::widgets::summary::SUMMARY_WORD_LIMIT;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// File path or http(s) URL of the portfolio JSON.
    pub db_location: String,
    pub port: u16,
    pub rust_log: String,
    pub site: SiteConfig,
}

/// Rendering knobs handed to the page controllers.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub summary_word_limit: usize,
    pub latest_projects: usize,
    pub default_skill_category: String,
    pub repo_links: RepoLinkPredicate,
    pub nav_breakpoint_px: u32,
    pub photo_fallback: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            summary_word_limit: SUMMARY_WORD_LIMIT,
            latest_projects: LATEST_PROJECTS,
            default_skill_category: "recently_used".to_string(),
            repo_links: RepoLinkPredicate::default(),
            nav_breakpoint_px: NAV_BREAKPOINT_PX,
            photo_fallback: PHOTO_FALLBACK.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = SiteConfig::default();
        Ok(Config {
            db_location: env_or("PORTFOLIO_DB", "database/portfolio-data.json"),
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            site: SiteConfig {
                summary_word_limit: parse_env("SUMMARY_WORD_LIMIT", defaults.summary_word_limit)?,
                latest_projects: parse_env("LATEST_PROJECTS", defaults.latest_projects)?,
                default_skill_category: env_or(
                    "DEFAULT_SKILL_CATEGORY",
                    &defaults.default_skill_category,
                ),
                repo_links: RepoLinkPredicate::new(&env_or(
                    "REPO_LINK_PROVIDER",
                    defaults.repo_links.provider(),
                )),
                nav_breakpoint_px: parse_env("NAV_BREAKPOINT_PX", defaults.nav_breakpoint_px)?,
                photo_fallback: env_or("PROFILE_PHOTO_FALLBACK", &defaults.photo_fallback),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let value: usize = parse_env("PORTFOLIO_TEST_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("PORTFOLIO_TEST_BAD_NUMBER", "twelve");
        let err = parse_env::<u16>("PORTFOLIO_TEST_BAD_NUMBER", 1).unwrap_err();
        assert!(err.to_string().contains("PORTFOLIO_TEST_BAD_NUMBER"));
    }

    #[test]
    fn test_site_defaults() {
        let site = SiteConfig::default();
        assert_eq!(site.summary_word_limit, 50);
        assert_eq!(site.latest_projects, 4);
        assert_eq!(site.default_skill_category, "recently_used");
        assert_eq!(site.repo_links.provider(), "github");
        assert_eq!(site.nav_breakpoint_px, 720);
    }
}
