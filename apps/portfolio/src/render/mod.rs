// Card renderers and hero markup.
// Everything here is a pure function from records to HTML strings; user text
// always goes through db::escape_html, only structural markup is literal.

pub mod card;
pub mod cards;
pub mod hero;

pub use card::badge_spans;
pub use cards::{
    certification_card, contact_cards, education_card, experience_card, photo_card, project_card,
    volunteering_card,
};
pub use hero::render_hero;

use crate::db::escape_html;

/// `<option>` list with `selected` marked.
pub fn select_options(options: &[(String, String)], selected: &str) -> String {
    options
        .iter()
        .map(|(value, label)| {
            let marker = if value == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{marker}>{}</option>"#,
                escape_html(value),
                escape_html(label)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_marks_selected() {
        let options = vec![
            ("all".to_string(), "All".to_string()),
            ("lang".to_string(), "Languages & Tools".to_string()),
        ];
        let html = select_options(&options, "lang");
        assert_eq!(
            html,
            r#"<option value="all">All</option><option value="lang" selected>Languages &amp; Tools</option>"#
        );
    }
}
