//! Page templates: the document shell plus each page's main section.

use crate::db::escape_html;

use super::{Page, PageQuery, PageView, RenderedPage};

const HOME_SLOTS: &[&str] = &[
    "name",
    "headline",
    "location",
    "summary",
    "heroMeta",
    "heroLinks",
    "skillsCategory",
    "skillsCount",
    "skillsBadges",
    "homeProjects",
    "contactEmail",
    "contactPhone",
];
const PROJECTS_SLOTS: &[&str] = &["searchInput", "skillFilter", "projectsCount", "projectsGrid"];
const CERTIFICATIONS_SLOTS: &[&str] = &[
    "certSearchInput",
    "certSkillFilter",
    "certificationsCount",
    "certificationsGrid",
];
const EXPERIENCE_SLOTS: &[&str] = &["experienceGrid"];
const EDUCATION_SLOTS: &[&str] = &["educationGrid"];
const VOLUNTEERING_SLOTS: &[&str] = &["volunteeringGrid"];
const CONTACT_SLOTS: &[&str] = &["contactGrid", "photoModal"];

/// Slot ids each page template provides.
pub fn template_slots(page: Page) -> &'static [&'static str] {
    match page {
        Page::Home => HOME_SLOTS,
        Page::Projects => PROJECTS_SLOTS,
        Page::Experience => EXPERIENCE_SLOTS,
        Page::Education => EDUCATION_SLOTS,
        Page::Certifications => CERTIFICATIONS_SLOTS,
        Page::Volunteering => VOLUNTEERING_SLOTS,
        Page::Contact => CONTACT_SLOTS,
    }
}

/// Full HTML document. `error` fills the `appError` area.
pub fn render_document(
    rendered: &RenderedPage,
    query: &PageQuery,
    site_name: &str,
    error: Option<&str>,
) -> String {
    let page = rendered.page;
    let nav = &rendered.nav;
    let body_class = if nav.is_open() { r#" class="nav-open""# } else { "" };
    let toggle_open = nav.is_open();
    let toggle_href = query.href_with(page.path(), |q| {
        q.nav = if toggle_open { None } else { Some("open".to_string()) };
    });

    let links: String = Page::ALL
        .iter()
        .map(|p| {
            let active = if *p == page { r#" class="active""# } else { "" };
            format!(
                r#"<a href="{}" data-nav="{}"{active}>{}</a>"#,
                p.path(),
                p.as_str(),
                p.title()
            )
        })
        .collect();

    let (error_style, error_text) = match error {
        Some(message) => ("block", escape_html(message)),
        None => ("none", String::new()),
    };

    let title = if site_name.is_empty() {
        page.title().to_string()
    } else {
        format!("{} | {}", page.title(), escape_html(site_name))
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
<link rel="stylesheet" href="/assets/css/styles.css" />
</head>
<body data-page="{}"{body_class}>
<header class="nav">
<a class="nav-toggle" href="{}" aria-expanded="{}" aria-label="{}" aria-controls="navMenu">☰</a>
<nav class="nav-links" id="navMenu">{links}</nav>
</header>
<div id="appError" class="app-error" role="alert" style="display:{error_style}">{error_text}</div>
<main>
{}
</main>
</body>
</html>
"#,
        page.as_str(),
        escape_html(&toggle_href),
        nav.aria_expanded(),
        nav.aria_label(),
        main_section(page, &rendered.view)
    )
}

fn main_section(page: Page, v: &PageView) -> String {
    match page {
        Page::Home => format!(
            r#"<section class="hero">
<h1 id="name">{}</h1>
<p id="headline" class="headline">{}</p>
<p id="location" class="location">{}</p>
<div id="summary">{}</div>
<div id="heroMeta" class="hero-meta">{}</div>
<div id="heroLinks" class="hero-links">{}</div>
</section>
<section class="skills">
<h2>Skills <span id="skillsCount" class="count">{}</span></h2>
<form method="get" action="/"><select id="skillsCategory" name="category">{}</select><button class="btn btn--sm" type="submit">Show</button></form>
<div id="skillsBadges" class="tags">{}</div>
</section>
<section class="latest-projects">
<h2>Latest projects</h2>
<div id="homeProjects" class="grid">{}</div>
</section>
<section class="quick-contact">
<h2>Get in touch</h2>
<p>Email: <span id="contactEmail">{}</span></p>
<p>Phone: <span id="contactPhone">{}</span></p>
</section>"#,
            v.get("name"),
            v.get("headline"),
            v.get("location"),
            v.get("summary"),
            v.get("heroMeta"),
            v.get("heroLinks"),
            v.get("skillsCount"),
            v.get("skillsCategory"),
            v.get("skillsBadges"),
            v.get("homeProjects"),
            v.get("contactEmail"),
            v.get("contactPhone"),
        ),
        Page::Projects => searchable_list(
            "Projects",
            page.path(),
            ("searchInput", "skillFilter", "projectsCount", "projectsGrid"),
            v,
        ),
        Page::Certifications => searchable_list(
            "Certifications",
            page.path(),
            (
                "certSearchInput",
                "certSkillFilter",
                "certificationsCount",
                "certificationsGrid",
            ),
            v,
        ),
        Page::Experience => card_grid("Experience", "experienceGrid", v),
        Page::Education => card_grid("Education", "educationGrid", v),
        Page::Volunteering => card_grid("Volunteering", "volunteeringGrid", v),
        Page::Contact => format!(
            r#"<section>
<h1>Contact</h1>
<div id="contactGrid" class="grid">{}</div>
</section>
{}"#,
            v.get("contactGrid"),
            v.get("photoModal")
        ),
    }
}

fn searchable_list(
    heading: &str,
    action: &str,
    (input, select, count, grid): (&str, &str, &str, &str),
    v: &PageView,
) -> String {
    format!(
        r#"<section>
<h1>{heading}</h1>
<form class="filters" method="get" action="{action}">
<input id="{input}" name="q" type="search" placeholder="Search…" value="{}" />
<select id="{select}" name="skill">{}</select>
<button class="btn btn--sm" type="submit">Filter</button>
</form>
<p class="meta">Showing <span id="{count}">{}</span></p>
<div id="{grid}" class="grid">{}</div>
</section>"#,
        v.get(input),
        v.get(select),
        v.get(count),
        v.get(grid)
    )
}

fn card_grid(heading: &str, grid: &str, v: &PageView) -> String {
    format!(
        r#"<section>
<h1>{heading}</h1>
<div id="{grid}" class="grid">{}</div>
</section>"#,
        v.get(grid)
    )
}
