//! Entity cards. Every function here is pure: one record in, one fragment out.

use crate::db::{escape_html, format_range};
use crate::models::{Certification, Contacts, Education, Experience, Project, Volunteering};
use crate::projection::RepoLinkPredicate;

use super::card::{card, highlight_list, meta_line, tag_badges, CardSpec};

pub const PHOTO_FALLBACK: &str = "./assets/images/profile.jpg";

pub fn experience_card(x: &Experience) -> String {
    let meta = format!(
        "{} • {}",
        format_range(x.start.as_deref(), x.end.as_deref()),
        x.location.as_deref().unwrap_or("")
    );
    card(&CardSpec {
        title: format!("{} — {}", x.title, x.company),
        meta: Some(meta.trim().to_string()),
        highlights: &x.highlights,
        tags: &x.tags,
        ..Default::default()
    })
}

pub fn education_card(x: &Education) -> String {
    let location: Vec<String> = x.location.iter().filter(|l| !l.is_empty()).cloned().collect();
    card(&CardSpec {
        title: x.qualification.clone(),
        meta: Some(format!(
            "{} • {}",
            x.institution,
            format_range(x.start.as_deref(), x.end.as_deref())
        )),
        highlights: &location,
        ..Default::default()
    })
}

pub fn volunteering_card(v: &Volunteering) -> String {
    let cause = v
        .cause
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(|c| format!(" • {c}"))
        .unwrap_or_default();
    card(&CardSpec {
        title: format!("{} — {}", v.role, v.organization),
        meta: Some(format!(
            "{}{}",
            format_range(v.start.as_deref(), v.end.as_deref()),
            cause
        )),
        highlights: &v.highlights,
        ..Default::default()
    })
}

pub fn project_card(p: &Project, repos: &RepoLinkPredicate) -> String {
    let title = if p.title.is_empty() {
        "Untitled project"
    } else {
        p.title.as_str()
    };
    let org = if p.associated_with.is_empty() {
        String::new()
    } else {
        meta_line(&p.associated_with)
    };

    let start = p.start.as_deref().unwrap_or("");
    let end = p.end.as_deref().unwrap_or("");
    let dates = if start.is_empty() && end.is_empty() {
        String::new()
    } else {
        let sep = if !start.is_empty() && !end.is_empty() {
            " – "
        } else {
            ""
        };
        format!(
            r#"<div class="meta">{}{}{}</div>"#,
            escape_html(start),
            sep,
            escape_html(end)
        )
    };

    let repo_links = repos.select(&p.links);
    let repo_html = if repo_links.is_empty() {
        String::new()
    } else {
        let buttons: String = repo_links
            .iter()
            .map(|l| {
                let raw = l.label.trim();
                let text = if repos.label_names_provider(raw) {
                    "View Github Repository"
                } else if raw.is_empty() {
                    "View Repo"
                } else {
                    raw
                };
                format!(
                    r#"<a class="btn btn--sm github-btn" href="{}" target="_blank" rel="noreferrer">{}</a>"#,
                    escape_html(&l.url),
                    escape_html(text)
                )
            })
            .collect();
        format!(r#"<div class="project-links">{buttons}</div>"#)
    };

    format!(
        r#"<article class="card"><h3>{}</h3>{}{}{}{}{}</article>"#,
        escape_html(title),
        org,
        dates,
        highlight_list(&p.highlights),
        repo_html,
        tag_badges(&p.skills)
    )
}

pub fn certification_card(c: &Certification) -> String {
    let issuer = if c.issuer.is_empty() {
        String::new()
    } else {
        meta_line(&c.issuer)
    };
    let issued = if c.issued.is_empty() {
        String::new()
    } else {
        meta_line(&format!("Issued {}", c.issued))
    };
    let credential = c
        .credential_url
        .as_deref()
        .filter(|u| !u.trim().is_empty())
        .map(|u| {
            format!(
                r#"<div class="project-links"><a class="btn btn--sm" href="{}" target="_blank" rel="noreferrer">View credential</a></div>"#,
                escape_html(u)
            )
        })
        .unwrap_or_default();
    let skills = if c.skills.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="meta skills-line">{}</div>"#,
            escape_html(&format!("Skills: {}", c.skills.join(" • ")))
        )
    };

    format!(
        r#"<article class="card"><h3>{}</h3>{}{}{}{}</article>"#,
        escape_html(&c.title),
        issuer,
        issued,
        credential,
        skills
    )
}

/// Contact cards in display order; absent channels are skipped.
pub fn contact_cards(c: &Contacts) -> String {
    let entries = [
        ("Email", c.email.as_deref(), c.email.as_deref().map(|e| format!("mailto:{e}"))),
        ("Phone", c.phone.as_deref(), c.phone.as_deref().map(|p| format!("tel:{p}"))),
        ("LinkedIn", c.linkedin.as_deref(), c.linkedin.clone()),
        ("GitHub", c.github.as_deref(), c.github.clone()),
        ("Address", c.address.as_deref(), None),
    ];

    entries
        .into_iter()
        .filter_map(|(title, value, href)| {
            let value = value.filter(|v| !v.is_empty())?;
            let open = href
                .map(|h| {
                    format!(
                        r#"<div class="tags"><a class="tag" href="{}" target="_blank" rel="noreferrer">Open</a></div>"#,
                        escape_html(&h)
                    )
                })
                .unwrap_or_default();
            Some(format!(
                r#"<article class="card"><h3>{}</h3>{}{}</article>"#,
                title,
                meta_line(value),
                open
            ))
        })
        .collect()
}

pub fn photo_card(src: &str) -> String {
    format!(
        r#"<article class="card contact-photo-card"><h3>Photo</h3><a href="?photo=open"><img class="contact-photo" src="{}" alt="Profile photo" /></a><div class="meta">Hello, This is me ! 😊</div></article>"#,
        escape_html(src)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Link;

    #[test]
    fn test_experience_card_title_and_meta() {
        let html = experience_card(&Experience {
            title: "Engineer".into(),
            company: "Acme & Co".into(),
            location: Some("London".into()),
            start: Some("2023-01".into()),
            end: None,
            ..Default::default()
        });
        assert!(html.contains("<h3>Engineer — Acme &amp; Co</h3>"));
        assert!(html.contains("Jan 2023 — Present • London"));
    }

    #[test]
    fn test_experience_meta_trimmed_without_location() {
        let html = experience_card(&Experience {
            title: "Engineer".into(),
            company: "Acme".into(),
            start: Some("2023-01".into()),
            end: Some("2023-06".into()),
            ..Default::default()
        });
        assert!(html.contains(r#"<div class="meta">Jan 2023 — Jun 2023 •</div>"#));
    }

    #[test]
    fn test_education_card() {
        let html = education_card(&Education {
            qualification: "BSc Computing".into(),
            institution: "Imperial".into(),
            location: Some("London".into()),
            start: Some("2018-10".into()),
            end: Some("2021-06".into()),
        });
        assert!(html.contains("<h3>BSc Computing</h3>"));
        assert!(html.contains("Imperial • Oct 2018 — Jun 2021"));
        assert!(html.contains("<li>London</li>"));
    }

    #[test]
    fn test_volunteering_cause_is_optional() {
        let mut v = Volunteering {
            role: "Mentor".into(),
            organization: "Code Club".into(),
            start: Some("2022-02".into()),
            ..Default::default()
        };
        assert!(volunteering_card(&v).contains(r#"<div class="meta">Feb 2022 — Present</div>"#));
        v.cause = Some("Education".into());
        assert!(volunteering_card(&v).contains("Feb 2022 — Present • Education"));
    }

    #[test]
    fn test_project_card_keeps_only_repo_links() {
        let p = Project {
            title: String::new(),
            associated_with: "Uni".into(),
            start: Some("2024-01".into()),
            end: Some("2024-03".into()),
            skills: vec!["Rust".into()],
            links: vec![
                Link {
                    label: "GitHub".into(),
                    url: "https://github.com/a/b".into(),
                },
                Link {
                    label: "Demo".into(),
                    url: "https://demo.example.org".into(),
                },
                Link {
                    label: "".into(),
                    url: "https://github.com/a/c".into(),
                },
            ],
            ..Default::default()
        };
        let html = project_card(&p, &RepoLinkPredicate::default());
        assert!(html.contains("<h3>Untitled project</h3>"));
        assert!(html.contains("2024-01 – 2024-03"));
        assert!(html.contains("View Github Repository"));
        assert!(html.contains("View Repo"));
        assert!(!html.contains("demo.example.org"));
        assert!(html.contains(r#"<span class="tag">Rust</span>"#));
    }

    #[test]
    fn test_project_card_without_repo_links_has_no_button_row() {
        let p = Project {
            title: "Alpha".into(),
            ..Default::default()
        };
        let html = project_card(&p, &RepoLinkPredicate::default());
        assert!(!html.contains("project-links"));
        assert!(!html.contains("class=\"meta\""));
    }

    #[test]
    fn test_certification_card() {
        let html = certification_card(&Certification {
            title: "CKA".into(),
            issuer: "CNCF".into(),
            issued: "Jun 2025".into(),
            credential_url: Some("https://creds.example.org/1".into()),
            skills: vec!["Kubernetes".into(), "Linux".into()],
        });
        assert!(html.contains("<h3>CKA</h3>"));
        assert!(html.contains("Issued Jun 2025"));
        assert_eq!(html.matches("View credential").count(), 1);
        assert!(html.contains("Skills: Kubernetes • Linux"));
    }

    #[test]
    fn test_contact_cards_skip_missing_channels() {
        let html = contact_cards(&Contacts {
            email: Some("me@example.org".into()),
            address: Some("London".into()),
            ..Default::default()
        });
        assert!(html.contains("mailto:me@example.org"));
        assert!(html.contains("<h3>Address</h3>"));
        assert!(!html.contains("Phone"));
        assert_eq!(html.matches(">Open</a>").count(), 1);
    }
}
