use crate::models::{Certification, Project};
use crate::projection::search::{filter_certifications, filter_projects, SkillFilter};

use super::{UiEvent, Widget};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Idle,
    Filtered { query: String, skill: SkillFilter },
}

/// Search box plus skill select over one list. Every input or change event
/// recomputes the filter; there is no debounce.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    id: &'static str,
    state: FilterState,
}

#[derive(Debug, Clone)]
pub struct FilterResult<T> {
    pub items: Vec<T>,
    pub count: usize,
}

impl<T> FilterResult<T> {
    fn new(items: Vec<T>) -> Self {
        let count = items.len();
        Self { items, count }
    }
}

impl SearchFilter {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            state: FilterState::Idle,
        }
    }

    /// Replays the text and skill a request carries, in the order a user
    /// would produce them.
    pub fn from_request(id: &'static str, query: &str, skill: &str) -> Self {
        let mut filter = Self::new(id);
        if !query.is_empty() {
            filter.handle(&UiEvent::Input(query.to_string()));
        }
        if !skill.is_empty() {
            filter.handle(&UiEvent::Change(skill.to_string()));
        }
        filter
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn query(&self) -> &str {
        match &self.state {
            FilterState::Idle => "",
            FilterState::Filtered { query, .. } => query,
        }
    }

    pub fn skill(&self) -> SkillFilter {
        match &self.state {
            FilterState::Idle => SkillFilter::All,
            FilterState::Filtered { skill, .. } => skill.clone(),
        }
    }

    pub fn apply_projects<'a>(&self, projects: &'a [Project]) -> FilterResult<&'a Project> {
        FilterResult::new(filter_projects(projects, self.query(), &self.skill()))
    }

    pub fn apply_certifications<'a>(
        &self,
        certifications: &'a [Certification],
    ) -> FilterResult<&'a Certification> {
        FilterResult::new(filter_certifications(
            certifications,
            self.query(),
            &self.skill(),
        ))
    }
}

impl Widget for SearchFilter {
    fn id(&self) -> &'static str {
        self.id
    }

    fn handle(&mut self, event: &UiEvent) -> bool {
        let (query, skill) = match event {
            UiEvent::Input(text) => (text.clone(), self.skill()),
            UiEvent::Change(value) => (self.query().to_string(), SkillFilter::parse(value)),
            _ => return false,
        };
        self.state = FilterState::Filtered { query, skill };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<Project> {
        ["Alpha", "Beta", "Alpine"]
            .iter()
            .enumerate()
            .map(|(i, t)| Project {
                title: t.to_string(),
                skills: if i == 2 { vec!["Rust".into()] } else { vec![] },
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_starts_idle_and_shows_everything() {
        let filter = SearchFilter::new("project-search");
        assert_eq!(filter.state(), &FilterState::Idle);
        assert_eq!(filter.apply_projects(&projects()).count, 3);
    }

    #[test]
    fn test_each_keystroke_recomputes() {
        let data = projects();
        let mut filter = SearchFilter::new("project-search");

        assert!(filter.handle(&UiEvent::Input("a".into())));
        assert_eq!(filter.apply_projects(&data).count, 3);

        filter.handle(&UiEvent::Input("al".into()));
        assert_eq!(filter.apply_projects(&data).count, 2);

        filter.handle(&UiEvent::Input("alph".into()));
        let result = filter.apply_projects(&data);
        assert_eq!(result.count, 1);
        assert_eq!(result.items[0].title, "Alpha");
    }

    #[test]
    fn test_change_keeps_query() {
        let data = projects();
        let mut filter = SearchFilter::from_request("project-search", "alp", "");
        filter.handle(&UiEvent::Change("Rust".into()));
        assert_eq!(filter.query(), "alp");
        let result = filter.apply_projects(&data);
        assert_eq!(result.count, 1);
        assert_eq!(result.items[0].title, "Alpine");
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        let mut filter = SearchFilter::new("project-search");
        assert!(!filter.handle(&UiEvent::ClickOutside));
        assert_eq!(filter.state(), &FilterState::Idle);
    }
}
