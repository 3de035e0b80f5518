use serde::{Deserialize, Deserializer, Serialize};

use crate::projection::skills::get_skill_categories;

/// Root of the portfolio JSON document. Every collection defaults to empty so
/// a partially filled database still renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioDatabase {
    #[serde(deserialize_with = "null_default")]
    pub profile: Profile,
    #[serde(deserialize_with = "null_default")]
    pub skills: SkillsSchema,
    #[serde(deserialize_with = "null_default")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "null_default")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "null_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_default")]
    pub volunteering: Vec<Volunteering>,
    #[serde(deserialize_with = "null_default")]
    pub certifications: Vec<Certification>,
}

impl PortfolioDatabase {
    /// Resolves `skills` to a non-empty category list and clears the legacy
    /// lists, so render code only reads `categories`.
    pub fn canonicalize(mut self) -> Self {
        self.skills = SkillsSchema {
            categories: get_skill_categories(&self.skills),
            ..Default::default()
        };
        self
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.skills.categories
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_default")]
    pub location: String,
    #[serde(deserialize_with = "null_default")]
    pub summary: String,
    pub photo: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub contacts: Contacts,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contacts {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub leetcode: Option<String>,
    pub address: Option<String>,
}

/// `skills` in either of its two shapes: `categories`, or the older
/// `topSkills` plus `additionalSkills` lists. `canonicalize` resolves it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsSchema {
    #[serde(deserialize_with = "null_default")]
    pub categories: Vec<SkillCategory>,
    #[serde(deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub top_skills: Vec<String>,
    #[serde(deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub additional_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub label: String,
    #[serde(deserialize_with = "null_default")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "null_default")]
    pub label: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub associated_with: String,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub company: String,
    pub location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "null_default")]
    pub qualification: String,
    #[serde(deserialize_with = "null_default")]
    pub institution: String,
    pub location: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volunteering {
    #[serde(deserialize_with = "null_default")]
    pub role: String,
    #[serde(deserialize_with = "null_default")]
    pub organization: String,
    pub cause: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub issuer: String,
    #[serde(deserialize_with = "null_default")]
    pub issued: String,
    pub credential_url: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub skills: Vec<String>,
}

/// Treats an explicit `null` like a missing key.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_sections_default_to_empty() {
        let db: PortfolioDatabase = serde_json::from_value(json!({
            "profile": { "fullName": "Ada Lovelace" }
        }))
        .unwrap();
        assert_eq!(db.profile.full_name, "Ada Lovelace");
        assert!(db.projects.is_empty());
        assert!(db.profile.contacts.email.is_none());
    }

    #[test]
    fn test_categorized_skills_parse() {
        let db: PortfolioDatabase = serde_json::from_value(json!({
            "skills": { "categories": [{ "id": "lang", "label": "Languages", "items": ["Rust"] }] }
        }))
        .unwrap();
        assert_eq!(db.skill_categories()[0].items, vec!["Rust"]);
    }

    #[test]
    fn test_legacy_skills_canonicalize_into_all_category() {
        let db: PortfolioDatabase = serde_json::from_value(json!({
            "skills": { "topSkills": ["Rust", " Go "], "additionalSkills": ["Rust", "SQL"] }
        }))
        .unwrap();
        assert!(db.skill_categories().is_empty());

        let db = db.canonicalize();
        let categories = db.skill_categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "all");
        assert_eq!(categories[0].items, vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_project_fields_use_camel_case() {
        let p: Project = serde_json::from_value(json!({
            "title": "Alpha",
            "associatedWith": "Uni",
            "start": "2024-01",
            "links": [{ "label": "GitHub", "url": "https://github.com/x/alpha" }]
        }))
        .unwrap();
        assert_eq!(p.associated_with, "Uni");
        assert_eq!(p.links[0].label, "GitHub");
        assert!(p.end.is_none());
    }

    #[test]
    fn test_empty_categories_fall_back_to_legacy_lists() {
        let db: PortfolioDatabase = serde_json::from_value(json!({
            "skills": {
                "categories": [],
                "topSkills": ["Rust"],
                "additionalSkills": ["SQL"]
            }
        }))
        .unwrap();

        let db = db.canonicalize();
        let categories = db.skill_categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "all");
        assert_eq!(categories[0].items, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let db: PortfolioDatabase = serde_json::from_value(json!({
            "profile": { "fullName": null, "contacts": null },
            "skills": { "categories": null, "topSkills": ["Go"] },
            "projects": [{ "title": "A", "highlights": null, "associatedWith": null, "links": null }],
            "experience": [{ "title": null, "company": "Acme", "tags": null }],
            "certifications": [{ "title": "C", "issued": null, "skills": null }],
            "education": null
        }))
        .unwrap();

        assert_eq!(db.profile.full_name, "");
        assert!(db.profile.contacts.email.is_none());
        assert_eq!(db.projects[0].title, "A");
        assert!(db.projects[0].highlights.is_empty());
        assert_eq!(db.projects[0].associated_with, "");
        assert_eq!(db.experience[0].company, "Acme");
        assert_eq!(db.certifications[0].issued, "");
        assert!(db.education.is_empty());

        let db = db.canonicalize();
        assert_eq!(db.skill_categories()[0].items, vec!["Go"]);
    }
}
