use crate::db::escape_html;
use crate::models::Link;

/// The common card shape shared by experience, education and volunteering.
#[derive(Debug, Clone, Default)]
pub struct CardSpec<'a> {
    pub title: String,
    pub meta: Option<String>,
    pub highlights: &'a [String],
    pub links: &'a [Link],
    pub tags: &'a [String],
}

pub fn card(spec: &CardSpec<'_>) -> String {
    let meta = spec
        .meta
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(meta_line)
        .unwrap_or_default();

    let links = if spec.links.is_empty() {
        String::new()
    } else {
        let badges: String = spec
            .links
            .iter()
            .map(|l| {
                format!(
                    r#"<a class="tag" href="{}" target="_blank" rel="noreferrer">{}</a>"#,
                    escape_html(&l.url),
                    escape_html(&l.label)
                )
            })
            .collect();
        format!(r#"<div class="tags">{badges}</div>"#)
    };

    format!(
        r#"<article class="card"><h3>{}</h3>{}{}{}{}</article>"#,
        escape_html(&spec.title),
        meta,
        highlight_list(spec.highlights),
        links,
        tag_badges(spec.tags)
    )
}

pub fn meta_line(text: &str) -> String {
    format!(r#"<div class="meta">{}</div>"#, escape_html(text))
}

pub fn highlight_list(highlights: &[String]) -> String {
    if highlights.is_empty() {
        return String::new();
    }
    let items: String = highlights
        .iter()
        .map(|h| format!("<li>{}</li>", escape_html(h)))
        .collect();
    format!("<ul>{items}</ul>")
}

pub fn tag_badges(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    format!(r#"<div class="tags">{}</div>"#, badge_spans(tags))
}

/// Bare `<span class="tag">` list, used by the skills widget as well.
pub fn badge_spans(items: &[String]) -> String {
    items
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
        .collect()
}
