use chrono::Month;

use crate::models::{Certification, Project};

pub const LATEST_PROJECTS: usize = 4;

/// The `n` most recent projects by `start`, newest first.
///
/// `YYYY-MM` strings sort chronologically as plain strings; a missing start
/// compares as `""` and therefore lands last.
pub fn latest_projects(projects: &[Project], n: usize) -> Vec<&Project> {
    let mut sorted: Vec<&Project> = projects.iter().collect();
    sorted.sort_by(|a, b| {
        let a = a.start.as_deref().unwrap_or("");
        let b = b.start.as_deref().unwrap_or("");
        b.cmp(a)
    });
    sorted.truncate(n);
    sorted
}

/// `"Jun 2025"` → `202506`. Anything that is not a three-letter month name
/// followed by a year keys to 0, as does a year too large for the key.
pub fn certification_date_key(issued: &str) -> u32 {
    let mut parts = issued.split_whitespace();
    let (Some(month), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
        return 0;
    };
    if month.chars().count() != 3 {
        return 0;
    }
    let Ok(month) = month.parse::<Month>() else {
        return 0;
    };
    let Ok(year) = year.parse::<u32>() else {
        return 0;
    };
    year.checked_mul(100)
        .and_then(|key| key.checked_add(month.number_from_month()))
        .unwrap_or(0)
}

/// Newest first; unparseable dates keep their relative order at the end.
pub fn sort_certifications<'a, I>(certifications: I) -> Vec<&'a Certification>
where
    I: IntoIterator<Item = &'a Certification>,
{
    let mut sorted: Vec<&Certification> = certifications.into_iter().collect();
    sorted.sort_by_key(|c| std::cmp::Reverse(certification_date_key(&c.issued)));
    sorted
}
