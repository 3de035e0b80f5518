pub mod portfolio;

pub use portfolio::{
    Certification, Contacts, Education, Experience, Link, PortfolioDatabase, Profile, Project,
    SkillCategory, SkillsSchema, Volunteering,
};
