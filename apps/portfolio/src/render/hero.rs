use crate::db::escape_html;
use crate::models::{Contacts, Profile};
use crate::widgets::ExpandableSummary;

/// Hero fragments, one per view slot.
#[derive(Debug, Clone, Default)]
pub struct HeroFragments {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub summary: String,
    pub meta: String,
    pub links: String,
}

/// `toggle_href` is where the Read more / Show less button leads.
pub fn render_hero(profile: &Profile, summary: &ExpandableSummary, toggle_href: &str) -> HeroFragments {
    HeroFragments {
        name: escape_html(&profile.full_name),
        headline: escape_html(&profile.headline),
        location: escape_html(&profile.location),
        summary: summary_html(summary, toggle_href),
        meta: meta_pills(&profile.contacts),
        links: social_buttons(&profile.contacts),
    }
}

fn paragraphs_html(paragraphs: &[String]) -> String {
    paragraphs
        .iter()
        .map(|p| format!(r#"<p class="subtitle">{}</p>"#, escape_html(p)))
        .collect()
}

pub fn summary_html(summary: &ExpandableSummary, toggle_href: &str) -> String {
    let full = paragraphs_html(summary.paragraphs());
    if !summary.is_truncated() {
        return full;
    }

    let preview = paragraphs_html(summary.preview());
    let (short_hidden, full_hidden) = if summary.is_expanded() {
        (" hidden", "")
    } else {
        ("", " hidden")
    };

    format!(
        r#"<div class="summary"><div id="summaryShort"{short_hidden}>{preview}</div><div id="summaryFull"{full_hidden}>{full}</div><a class="btn summary-toggle" id="summaryToggle" href="{}" role="button" aria-expanded="{}">{}</a></div>"#,
        escape_html(toggle_href),
        summary.aria_expanded(),
        summary.button_label()
    )
}

fn meta_pills(c: &Contacts) -> String {
    let mut pills = String::new();
    if let Some(address) = c.address.as_deref().filter(|a| !a.is_empty()) {
        pills.push_str(&format!(
            r#"<span class="pill"><strong>Base:</strong> {}</span>"#,
            escape_html(address)
        ));
    }
    if let Some(email) = c.email.as_deref().filter(|e| !e.is_empty()) {
        let email = escape_html(email);
        pills.push_str(&format!(
            r#"<a class="pill" href="mailto:{email}"><strong>Email:</strong> {email}</a>"#
        ));
    }
    if let Some(phone) = c.phone.as_deref().filter(|p| !p.is_empty()) {
        let phone = escape_html(phone);
        pills.push_str(&format!(
            r#"<a class="pill" href="tel:{phone}"><strong>Phone:</strong> {phone}</a>"#
        ));
    }
    pills
}

fn social_buttons(c: &Contacts) -> String {
    [
        ("btnLinkedIn", "LinkedIn", c.linkedin.as_deref()),
        ("btnGitHub", "GitHub", c.github.as_deref()),
        ("btnLeetCode", "LeetCode", c.leetcode.as_deref()),
    ]
    .into_iter()
    .filter_map(|(id, label, href)| {
        let href = href.filter(|h| !h.is_empty())?;
        Some(format!(
            r#"<a class="btn" id="{id}" href="{}" target="_blank" rel="noreferrer">{label}</a>"#,
            escape_html(href)
        ))
    })
    .collect()
}
