//! Skill categories: schema fallback, flattening, default selection.

use std::collections::HashSet;

use crate::models::{SkillCategory, SkillsSchema};

pub const ALL_CATEGORY_ID: &str = "all";
const ALL_CATEGORY_LABEL: &str = "All skills";

/// Trims each item, drops blanks and keeps the first occurrence of each value.
/// Comparison is exact and case-sensitive.
pub fn dedup<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let trimmed = item.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Returns the categorized list verbatim when it is non-empty, otherwise a
/// single synthetic `all` category built from the legacy lists.
pub fn get_skill_categories(schema: &SkillsSchema) -> Vec<SkillCategory> {
    if !schema.categories.is_empty() {
        return schema.categories.clone();
    }
    vec![synthetic_all(dedup(
        schema.top_skills.iter().chain(schema.additional_skills.iter()),
    ))]
}

fn synthetic_all(items: Vec<String>) -> SkillCategory {
    SkillCategory {
        id: ALL_CATEGORY_ID.to_string(),
        label: ALL_CATEGORY_LABEL.to_string(),
        items,
    }
}

/// Items for a category id. `all` flattens every category; unknown ids yield nothing.
pub fn category_items(categories: &[SkillCategory], id: &str) -> Vec<String> {
    if id == ALL_CATEGORY_ID {
        return dedup(categories.iter().flat_map(|c| c.items.iter()));
    }
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| dedup(&c.items))
        .unwrap_or_default()
}

/// `preferred` when such a category exists, `all` otherwise.
pub fn default_category(categories: &[SkillCategory], preferred: &str) -> String {
    if categories.iter().any(|c| c.id == preferred) {
        preferred.to_string()
    } else {
        ALL_CATEGORY_ID.to_string()
    }
}

/// `(id, label)` pairs for the category select, led by the `all` option.
pub fn category_options(categories: &[SkillCategory]) -> Vec<(String, String)> {
    std::iter::once((ALL_CATEGORY_ID.to_string(), "All".to_string()))
        .chain(categories.iter().map(|c| (c.id.clone(), c.label.clone())))
        .collect()
}
