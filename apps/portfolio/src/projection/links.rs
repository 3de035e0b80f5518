use crate::models::Link;

/// Decides which project links render as repository buttons.
///
/// A link qualifies when its URL is non-blank and either its label mentions the
/// provider or its URL points at `<provider>.com`. Both checks ignore case.
#[derive(Debug, Clone)]
pub struct RepoLinkPredicate {
    provider: String,
}

impl RepoLinkPredicate {
    pub fn new(provider: &str) -> Self {
        Self {
            provider: provider.trim().to_lowercase(),
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn label_names_provider(&self, label: &str) -> bool {
        !self.provider.is_empty() && label.to_lowercase().contains(&self.provider)
    }

    pub fn matches(&self, link: &Link) -> bool {
        if link.url.trim().is_empty() || self.provider.is_empty() {
            return false;
        }
        let host = format!("{}.com", self.provider);
        self.label_names_provider(&link.label) || link.url.to_lowercase().contains(&host)
    }

    pub fn select<'a>(&self, links: &'a [Link]) -> Vec<&'a Link> {
        links.iter().filter(|l| self.matches(l)).collect()
    }
}

impl Default for RepoLinkPredicate {
    fn default() -> Self {
        Self::new("github")
    }
}
