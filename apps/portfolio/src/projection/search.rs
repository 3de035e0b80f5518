//! Text search and skill filtering for the projects and certifications lists.

use std::collections::BTreeSet;

use crate::models::{Certification, Project};

pub const ALL_SKILLS: &str = "All skills";

/// Lower-cases and trims. Queries and haystacks both go through this.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

pub fn project_haystack(p: &Project) -> String {
    let mut parts: Vec<&str> = vec![p.title.as_str(), p.associated_with.as_str()];
    parts.extend(p.highlights.iter().map(String::as_str));
    normalize(&parts.join(" "))
}

pub fn certification_haystack(c: &Certification) -> String {
    let mut parts: Vec<&str> = vec![c.title.as_str(), c.issuer.as_str()];
    parts.extend(c.skills.iter().map(String::as_str));
    normalize(&parts.join(" "))
}

/// Substring match. An empty (normalized) query matches everything.
pub fn matches_query(haystack: &str, query: &str) -> bool {
    let q = normalize(query);
    q.is_empty() || haystack.contains(&q)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Only(String),
}

impl SkillFilter {
    /// `"All skills"` and the empty string both mean "no filter".
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_SKILLS {
            SkillFilter::All
        } else {
            SkillFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, skills: &[String]) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Only(skill) => skills.iter().any(|s| s == skill),
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            SkillFilter::All => ALL_SKILLS,
            SkillFilter::Only(skill) => skill,
        }
    }
}

pub fn filter_projects<'a>(
    projects: &'a [Project],
    query: &str,
    skill: &SkillFilter,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| matches_query(&project_haystack(p), query) && skill.matches(&p.skills))
        .collect()
}

pub fn filter_certifications<'a>(
    certifications: &'a [Certification],
    query: &str,
    skill: &SkillFilter,
) -> Vec<&'a Certification> {
    certifications
        .iter()
        .filter(|c| matches_query(&certification_haystack(c), query) && skill.matches(&c.skills))
        .collect()
}

/// `"All skills"` followed by every distinct skill in ascending order.
pub fn skill_options<'a, I>(skill_lists: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let distinct: BTreeSet<&str> = skill_lists
        .into_iter()
        .flat_map(|list| list.iter().map(String::as_str))
        .collect();
    std::iter::once(ALL_SKILLS.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}
