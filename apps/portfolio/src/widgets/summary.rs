//! Hero summary with a "Read more" toggle once it exceeds a word budget.

use super::{Target, UiEvent, Widget};

pub const SUMMARY_WORD_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct ExpandableSummary {
    paragraphs: Vec<String>,
    preview: Vec<String>,
    truncated: bool,
    expanded: bool,
}

impl ExpandableSummary {
    pub fn new(summary: &str, word_limit: usize) -> Self {
        let paragraphs = split_paragraphs(summary);
        let truncated = word_count(summary) > word_limit;
        let preview = if truncated {
            preview_paragraphs(&paragraphs, word_limit)
        } else {
            paragraphs.clone()
        };
        Self {
            paragraphs,
            preview,
            truncated,
            expanded: false,
        }
    }

    /// Whether a toggle button is needed at all.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn preview(&self) -> &[String] {
        &self.preview
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.expanded {
            "Show less"
        } else {
            "Read more"
        }
    }
}

impl Widget for ExpandableSummary {
    fn id(&self) -> &'static str {
        "summary-toggle"
    }

    fn handle(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::Click(Target::SummaryToggle) if self.truncated => {
                self.expanded = !self.expanded;
                true
            }
            _ => false,
        }
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Paragraphs are separated by one or more blank lines.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_string());
    }
    paragraphs
}

/// Whole paragraphs until the budget runs out; the paragraph that crosses it
/// is cut at the budget and ends with an ellipsis.
pub fn preview_paragraphs(paragraphs: &[String], word_limit: usize) -> Vec<String> {
    let mut used = 0;
    let mut out = Vec::new();
    for p in paragraphs {
        if used >= word_limit {
            break;
        }
        let words: Vec<&str> = p.split_whitespace().collect();
        if used + words.len() <= word_limit {
            out.push(p.clone());
            used += words.len();
        } else {
            let remaining = word_limit - used;
            out.push(format!("{}…", words[..remaining].join(" ")));
            break;
        }
    }
    out
}
