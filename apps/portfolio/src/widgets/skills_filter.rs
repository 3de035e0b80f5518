use crate::models::SkillCategory;
use crate::projection::skills::{category_items, category_options, default_category, ALL_CATEGORY_ID};

use super::{UiEvent, Widget};

/// Category select driving the skill badge list on the home page.
#[derive(Debug, Clone)]
pub struct SkillsFilter {
    categories: Vec<SkillCategory>,
    selected: String,
}

impl SkillsFilter {
    pub fn new(categories: &[SkillCategory], preferred: &str) -> Self {
        Self {
            categories: categories.to_vec(),
            selected: default_category(categories, preferred),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn options(&self) -> Vec<(String, String)> {
        category_options(&self.categories)
    }

    pub fn items(&self) -> Vec<String> {
        category_items(&self.categories, &self.selected)
    }
}

impl Widget for SkillsFilter {
    fn id(&self) -> &'static str {
        "skills-filter"
    }

    fn handle(&mut self, event: &UiEvent) -> bool {
        let UiEvent::Change(value) = event else {
            return false;
        };
        let next = if value.is_empty() {
            ALL_CATEGORY_ID
        } else {
            value.as_str()
        };
        if next == self.selected {
            return false;
        }
        self.selected = next.to_string();
        true
    }
}
