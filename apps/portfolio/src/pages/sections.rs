//! Plain card lists with no interactive state.

use crate::models::PortfolioDatabase;
use crate::render::{education_card, experience_card, volunteering_card};

use super::{PageView, ViewSlot};

pub fn render_experience(db: &PortfolioDatabase, view: &mut PageView) {
    view.slot("experienceGrid")
        .render(db.experience.iter().map(experience_card).collect());
}

pub fn render_education(db: &PortfolioDatabase, view: &mut PageView) {
    view.slot("educationGrid")
        .render(db.education.iter().map(education_card).collect());
}

pub fn render_volunteering(db: &PortfolioDatabase, view: &mut PageView) {
    view.slot("volunteeringGrid")
        .render(db.volunteering.iter().map(volunteering_card).collect());
}
