// Projection layer: pure derivations over the loaded database.
// Nothing here mutates the source collections; every function returns a new
// Vec or borrows from its input.

pub mod links;
pub mod ordering;
pub mod search;
pub mod skills;

pub use links::RepoLinkPredicate;
pub use ordering::{latest_projects, sort_certifications};
pub use search::skill_options;
