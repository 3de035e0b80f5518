//! Searchable lists: projects and certifications.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::db::escape_html;
use crate::models::PortfolioDatabase;
use crate::projection::{skill_options, sort_certifications};
use crate::render::{certification_card, project_card, select_options};
use crate::widgets::{SearchFilter, WidgetError, WidgetHost};

use super::{PageView, RenderContext, ViewSlot};

const PROJECT_SEARCH: &str = "project-search";
const CERTIFICATION_SEARCH: &str = "certification-search";

/// A re-rendered list and its visible count.
#[derive(Debug, Clone, Serialize)]
pub struct ListFragment {
    pub count: usize,
    pub html: String,
}

pub fn projects_fragment(db: &PortfolioDatabase, site: &SiteConfig, filter: &SearchFilter) -> ListFragment {
    let result = filter.apply_projects(&db.projects);
    ListFragment {
        count: result.count,
        html: result
            .items
            .iter()
            .map(|p| project_card(p, &site.repo_links))
            .collect(),
    }
}

pub fn certifications_fragment(db: &PortfolioDatabase, filter: &SearchFilter) -> ListFragment {
    let result = filter.apply_certifications(&db.certifications);
    let sorted = sort_certifications(result.items);
    ListFragment {
        count: result.count,
        html: sorted.into_iter().map(certification_card).collect(),
    }
}

fn skill_select(options: Vec<String>, selected: &str) -> String {
    let pairs: Vec<(String, String)> = options.into_iter().map(|s| (s.clone(), s)).collect();
    select_options(&pairs, selected)
}

pub fn render_projects(
    db: &PortfolioDatabase,
    ctx: &RenderContext<'_>,
    host: &mut WidgetHost,
    view: &mut PageView,
) -> Result<(), WidgetError> {
    let filter = host.attach(SearchFilter::from_request(
        PROJECT_SEARCH,
        &ctx.query.q,
        &ctx.query.skill,
    ))?;
    let options = skill_options(db.projects.iter().map(|p| p.skills.as_slice()));

    view.slot("searchInput").render(escape_html(filter.query()));
    view.slot("skillFilter")
        .render(skill_select(options, filter.skill().as_value()));

    let fragment = projects_fragment(db, ctx.site, &filter);
    view.slot("projectsCount").render(fragment.count.to_string());
    view.slot("projectsGrid").render(fragment.html);
    Ok(())
}

pub fn render_certifications(
    db: &PortfolioDatabase,
    ctx: &RenderContext<'_>,
    host: &mut WidgetHost,
    view: &mut PageView,
) -> Result<(), WidgetError> {
    let filter = host.attach(SearchFilter::from_request(
        CERTIFICATION_SEARCH,
        &ctx.query.q,
        &ctx.query.skill,
    ))?;
    let options = skill_options(db.certifications.iter().map(|c| c.skills.as_slice()));

    view.slot("certSearchInput").render(escape_html(filter.query()));
    view.slot("certSkillFilter")
        .render(skill_select(options, filter.skill().as_value()));

    let fragment = certifications_fragment(db, &filter);
    view.slot("certificationsCount").render(fragment.count.to_string());
    view.slot("certificationsGrid").render(fragment.html);
    Ok(())
}

/// Fragment for the projects list as requested by a search box keystroke.
pub fn search_projects(db: &PortfolioDatabase, site: &SiteConfig, q: &str, skill: &str) -> ListFragment {
    projects_fragment(db, site, &SearchFilter::from_request(PROJECT_SEARCH, q, skill))
}

pub fn search_certifications(db: &PortfolioDatabase, q: &str, skill: &str) -> ListFragment {
    certifications_fragment(db, &SearchFilter::from_request(CERTIFICATION_SEARCH, q, skill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{layout::template_slots, Page, PageQuery};
    use serde_json::json;

    fn db() -> PortfolioDatabase {
        serde_json::from_value(json!({
            "projects": [
                { "title": "Alpha", "skills": ["Rust"] },
                { "title": "Beta", "skills": ["Go"] }
            ],
            "certifications": [
                { "title": "Old", "issued": "Jan 2023", "skills": ["Cloud"] },
                { "title": "Newest", "issued": "Jun 2025" },
                { "title": "Undated", "issued": "someday" },
                { "title": "Mid", "issued": "Dec 2024", "skills": ["Cloud"] }
            ]
        }))
        .unwrap()
    }

    fn render(page: Page, query: PageQuery) -> PageView {
        let site = SiteConfig::default();
        let ctx = RenderContext {
            site: &site,
            query: &query,
            reduced_motion: false,
            viewport_width: None,
        };
        let mut host = WidgetHost::new();
        let mut view = PageView::with_slots(template_slots(page));
        match page {
            Page::Projects => render_projects(&db(), &ctx, &mut host, &mut view).unwrap(),
            Page::Certifications => {
                render_certifications(&db(), &ctx, &mut host, &mut view).unwrap()
            }
            _ => unreachable!(),
        }
        view
    }

    #[test]
    fn test_projects_unfiltered() {
        let view = render(Page::Projects, PageQuery::default());
        assert_eq!(view.get("projectsCount"), "2");
        assert!(view
            .get("skillFilter")
            .starts_with(r#"<option value="All skills" selected>"#));
    }

    #[test]
    fn test_projects_search_query() {
        let query = PageQuery {
            q: "  ALP ".into(),
            ..Default::default()
        };
        let view = render(Page::Projects, query);
        assert_eq!(view.get("projectsCount"), "1");
        assert!(view.get("projectsGrid").contains("<h3>Alpha</h3>"));
        assert!(!view.get("projectsGrid").contains("Beta"));
        assert_eq!(view.get("searchInput"), "  ALP ");
    }

    #[test]
    fn test_projects_skill_filter_selected() {
        let query = PageQuery {
            skill: "Go".into(),
            ..Default::default()
        };
        let view = render(Page::Projects, query);
        assert_eq!(view.get("projectsCount"), "1");
        assert!(view.get("skillFilter").contains(r#"<option value="Go" selected>"#));
    }

    #[test]
    fn test_certifications_sorted_newest_first() {
        let view = render(Page::Certifications, PageQuery::default());
        let html = view.get("certificationsGrid");
        let order: Vec<usize> = ["Newest", "Mid", "Old", "Undated"]
            .iter()
            .map(|t| html.find(&format!("<h3>{t}</h3>")).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(view.get("certificationsCount"), "4");
    }

    #[test]
    fn test_certifications_filtered_by_skill() {
        let fragment = search_certifications(&db(), "", "Cloud");
        assert_eq!(fragment.count, 2);
        assert!(fragment.html.find("Mid").unwrap() < fragment.html.find("Old").unwrap());
    }

    #[test]
    fn test_search_projects_fragment() {
        let fragment = search_projects(&db(), &SiteConfig::default(), "beta", "");
        assert_eq!(fragment.count, 1);
        assert!(fragment.html.contains("<h3>Beta</h3>"));
    }
}
