use super::{Target, UiEvent, Widget};

/// Sibling cards where at most one is open at a time.
#[derive(Debug, Clone)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
    animate: bool,
}

impl Accordion {
    /// `reduced_motion` turns off the expand/collapse height transition.
    pub fn new(len: usize, reduced_motion: bool) -> Self {
        Self {
            len,
            open: None,
            animate: !reduced_motion,
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn animate(&self) -> bool {
        self.animate
    }

    /// Which card would be open after toggling `index`.
    pub fn after_toggle(&self, index: usize) -> Option<usize> {
        if self.open == Some(index) || index >= self.len {
            None
        } else {
            Some(index)
        }
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.open = self.after_toggle(index);
        true
    }
}

impl Widget for Accordion {
    fn id(&self) -> &'static str {
        "project-accordion"
    }

    fn handle(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::Click(Target::AccordionToggle(index)) => self.toggle(*index),
            _ => false,
        }
    }
}
