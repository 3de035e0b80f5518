use serde::{Deserialize, Deserializer};
use url::form_urlencoded;

/// Widget state carried in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    pub q: String,
    pub skill: String,
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_index")]
    pub open: Option<usize>,
    pub summary: Option<String>,
    pub photo: Option<String>,
    pub nav: Option<String>,
    pub motion: Option<String>,
}

impl PageQuery {
    pub fn summary_expanded(&self) -> bool {
        self.summary.as_deref() == Some("full")
    }

    pub fn photo_open(&self) -> bool {
        self.photo.as_deref() == Some("open")
    }

    pub fn nav_open(&self) -> bool {
        self.nav.as_deref() == Some("open")
    }

    pub fn reduced_motion(&self) -> bool {
        self.motion.as_deref() == Some("reduce")
    }

    /// Relative link to `path` carrying a modified copy of this state.
    pub fn href_with(&self, path: &str, modify: impl FnOnce(&mut PageQuery)) -> String {
        let mut next = self.clone();
        modify(&mut next);
        next.href(path)
    }

    pub fn href(&self, path: &str) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if !self.q.is_empty() {
            ser.append_pair("q", &self.q);
        }
        if !self.skill.is_empty() {
            ser.append_pair("skill", &self.skill);
        }
        let optional = [
            ("category", self.category.clone()),
            ("open", self.open.map(|i| i.to_string())),
            ("summary", self.summary.clone()),
            ("photo", self.photo.clone()),
            ("nav", self.nav.clone()),
            ("motion", self.motion.clone()),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                ser.append_pair(key, &value);
            }
        }
        let qs = ser.finish();
        if qs.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{qs}")
        }
    }
}

/// A hand-edited `open=abc` or `open=` means no card is open, not a bad request.
fn lenient_index<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.trim().parse().ok()))
}
