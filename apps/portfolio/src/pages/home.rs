use serde::Serialize;

use crate::config::SiteConfig;
use crate::db::{escape_html, escape_opt, format_range};
use crate::models::{PortfolioDatabase, Project};
use crate::projection::latest_projects;
use crate::render::card::{highlight_list, meta_line};
use crate::render::{badge_spans, render_hero, select_options};
use crate::widgets::{
    Accordion, ExpandableSummary, SkillsFilter, Target, UiEvent, Widget, WidgetError, WidgetHost,
};

use super::{Page, PageView, RenderContext, ViewSlot};

pub fn render_home(
    db: &PortfolioDatabase,
    ctx: &RenderContext<'_>,
    host: &mut WidgetHost,
    view: &mut PageView,
) -> Result<(), WidgetError> {
    let path = Page::Home.path();

    // Hero
    let mut summary = host.attach(ExpandableSummary::new(
        &db.profile.summary,
        ctx.site.summary_word_limit,
    ))?;
    if ctx.query.summary_expanded() {
        summary.dispatch(&UiEvent::Click(Target::SummaryToggle));
    }
    let expanded = summary.is_expanded();
    let toggle_href = ctx.query.href_with(path, |q| {
        q.summary = if expanded { None } else { Some("full".to_string()) };
    });
    let hero = render_hero(&db.profile, &summary, &toggle_href);
    view.slot("name").render(hero.name);
    view.slot("headline").render(hero.headline);
    view.slot("location").render(hero.location);
    view.slot("summary").render(hero.summary);
    view.slot("heroMeta").render(hero.meta);
    view.slot("heroLinks").render(hero.links);

    // Skills badges
    let mut skills = host.attach(SkillsFilter::new(
        db.skill_categories(),
        &ctx.site.default_skill_category,
    ))?;
    if let Some(category) = &ctx.query.category {
        skills.dispatch(&UiEvent::Change(category.clone()));
    }
    let items = skills.items();
    view.slot("skillsCategory")
        .render(select_options(&skills.options(), skills.selected()));
    view.slot("skillsCount").render(items.len().to_string());
    view.slot("skillsBadges").render(badge_spans(&items));

    // Latest projects
    let latest = latest_projects(&db.projects, ctx.site.latest_projects);
    let mut accordion = host.attach(Accordion::new(latest.len(), ctx.reduced_motion))?;
    if let Some(index) = ctx.query.open {
        accordion.dispatch(&UiEvent::Click(Target::AccordionToggle(index)));
    }
    view.slot("homeProjects")
        .render(project_accordion(&latest, &accordion, ctx));

    // Quick contact
    let contacts = &db.profile.contacts;
    view.slot("contactEmail")
        .render(escape_opt(contacts.email.as_deref()));
    view.slot("contactPhone")
        .render(escape_opt(contacts.phone.as_deref()));

    Ok(())
}

fn project_accordion(projects: &[&Project], accordion: &Accordion, ctx: &RenderContext<'_>) -> String {
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let open = accordion.is_open(i);
            let next = accordion.after_toggle(i);
            let href = ctx.query.href_with(Page::Home.path(), |q| q.open = next);
            let animate = if accordion.animate() {
                r#" data-animate="height""#
            } else {
                ""
            };
            let hidden = if open { "" } else { " hidden" };
            let dates = if p.start.is_some() {
                meta_line(&format_range(p.start.as_deref(), p.end.as_deref()))
            } else {
                String::new()
            };
            format!(
                r#"<article class="card accordion-card{}"{animate}><h3><a class="accordion-toggle" href="{}" aria-expanded="{}" aria-controls="home-project-{i}">{}</a></h3><div class="accordion-panel" id="home-project-{i}"{hidden}>{}{}<a class="tag" href="{}">View all projects</a></div></article>"#,
                if open { " open" } else { "" },
                escape_html(&href),
                open,
                escape_html(&p.title),
                dates,
                highlight_list(&p.highlights),
                Page::Projects.path()
            )
        })
        .collect()
}

/// Badge list for one skill category, served to the select's change handler.
#[derive(Debug, Clone, Serialize)]
pub struct SkillsFragment {
    pub category: String,
    pub count: usize,
    pub items: Vec<String>,
    pub html: String,
}

pub fn skills_fragment(
    db: &PortfolioDatabase,
    site: &SiteConfig,
    category: Option<&str>,
) -> SkillsFragment {
    let mut skills = SkillsFilter::new(db.skill_categories(), &site.default_skill_category);
    if let Some(category) = category {
        skills.handle(&UiEvent::Change(category.to_string()));
    }
    let items = skills.items();
    SkillsFragment {
        category: skills.selected().to_string(),
        count: items.len(),
        html: badge_spans(&items),
        items,
    }
}
