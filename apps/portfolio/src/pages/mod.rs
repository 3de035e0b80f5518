// Page controllers.
// Each controller takes the loaded database plus the request's widget state,
// mounts its widgets on a fresh WidgetHost, and writes fragments into the
// page's view slots. Slots the template does not declare are skipped.

pub mod contact;
pub mod home;
pub mod layout;
pub mod lists;
pub mod query;
pub mod sections;
pub mod view;

use std::fmt;
use std::str::FromStr;

use crate::config::SiteConfig;
use crate::models::PortfolioDatabase;
use crate::widgets::{MobileNav, Target, UiEvent, Widget, WidgetError, WidgetHost};

pub use query::PageQuery;
pub use view::{PageView, ViewSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    Experience,
    Education,
    Certifications,
    Volunteering,
    Contact,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Projects,
        Page::Experience,
        Page::Education,
        Page::Certifications,
        Page::Volunteering,
        Page::Contact,
    ];

    /// Value of the `data-page` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Projects => "projects",
            Page::Experience => "experience",
            Page::Education => "education",
            Page::Certifications => "certifications",
            Page::Volunteering => "volunteering",
            Page::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Experience => "Experience",
            Page::Education => "Education",
            Page::Certifications => "Certifications",
            Page::Volunteering => "Volunteering",
            Page::Contact => "Contact",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Projects => "/projects",
            Page::Experience => "/experience",
            Page::Education => "/education",
            Page::Certifications => "/certifications",
            Page::Volunteering => "/volunteering",
            Page::Contact => "/contact",
        }
    }

    /// Unknown or empty names select the home page.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(Page::Home)
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_end_matches(".html");
        Page::ALL
            .into_iter()
            .find(|p| p.as_str() == name || (name == "index" && *p == Page::Home))
            .ok_or_else(|| format!("unknown page '{s}'"))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request rendering inputs shared by every controller.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub site: &'a SiteConfig,
    pub query: &'a PageQuery,
    pub reduced_motion: bool,
    /// CSS pixel width from the `Sec-CH-Viewport-Width` hint, when sent.
    pub viewport_width: Option<u32>,
}

/// Output of one page load, ready for `layout::render_document`.
#[derive(Debug)]
pub struct RenderedPage {
    pub page: Page,
    pub view: PageView,
    pub nav: MobileNav,
}

impl RenderedPage {
    /// Shell with empty slots, used when the database failed to load.
    pub fn empty(page: Page, ctx: &RenderContext<'_>) -> Self {
        Self {
            page,
            view: PageView::with_slots(layout::template_slots(page)),
            nav: restore_nav(ctx),
        }
    }
}

/// Replays the navigation state a request carries: the toggle when `nav=open`,
/// then the viewport width hint, which closes the menu on wide screens.
fn restore_nav(ctx: &RenderContext<'_>) -> MobileNav {
    let mut nav = MobileNav::new(ctx.site.nav_breakpoint_px);
    if ctx.query.nav_open() {
        nav.handle(&UiEvent::Click(Target::NavToggle));
    }
    if let Some(width) = ctx.viewport_width {
        nav.handle(&UiEvent::Resize { width });
    }
    nav
}

/// Runs the controller for `page` against a fresh widget host.
pub fn render_page(
    page: Page,
    db: &PortfolioDatabase,
    ctx: &RenderContext<'_>,
) -> Result<RenderedPage, WidgetError> {
    let mut host = WidgetHost::new();
    let nav = host.attach(restore_nav(ctx))?;

    let mut view = PageView::with_slots(layout::template_slots(page));
    match page {
        Page::Home => home::render_home(db, ctx, &mut host, &mut view)?,
        Page::Projects => lists::render_projects(db, ctx, &mut host, &mut view)?,
        Page::Experience => sections::render_experience(db, &mut view),
        Page::Education => sections::render_education(db, &mut view),
        Page::Certifications => lists::render_certifications(db, ctx, &mut host, &mut view)?,
        Page::Volunteering => sections::render_volunteering(db, &mut view),
        Page::Contact => contact::render_contact(db, ctx, &mut host, &mut view)?,
    }

    Ok(RenderedPage {
        page,
        view,
        nav: host.detach(nav),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_names_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_name(page.as_str()), page);
        }
    }

    #[test]
    fn test_unknown_page_falls_back_to_home() {
        assert_eq!(Page::from_name(""), Page::Home);
        assert_eq!(Page::from_name("blog"), Page::Home);
        assert_eq!(Page::from_name("index.html"), Page::Home);
        assert_eq!(Page::from_name("projects.html"), Page::Projects);
    }

    fn ctx_with<'a>(site: &'a SiteConfig, query: &'a PageQuery, width: Option<u32>) -> RenderContext<'a> {
        RenderContext {
            site,
            query,
            reduced_motion: false,
            viewport_width: width,
        }
    }

    #[test]
    fn test_nav_state_replays_toggle_and_width() {
        let site = SiteConfig::default();
        let open = PageQuery {
            nav: Some("open".into()),
            ..Default::default()
        };

        assert!(restore_nav(&ctx_with(&site, &open, None)).is_open());
        assert!(restore_nav(&ctx_with(&site, &open, Some(375))).is_open());
        assert!(!restore_nav(&ctx_with(&site, &open, Some(1280))).is_open());
        assert!(!restore_nav(&ctx_with(&site, &PageQuery::default(), Some(375))).is_open());
    }

    #[test]
    fn test_render_page_keeps_nav_open_on_narrow_viewport() {
        let site = SiteConfig::default();
        let query = PageQuery {
            nav: Some("open".into()),
            ..Default::default()
        };
        let db = PortfolioDatabase::default().canonicalize();
        let rendered = render_page(Page::Education, &db, &ctx_with(&site, &query, Some(375))).unwrap();
        assert!(rendered.nav.is_open());
    }
}
