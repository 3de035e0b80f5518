//! Named view slots. A page template declares which slots it provides;
//! writing to a slot the template lacks is a silent no-op.

/// A place a controller can render markup into.
pub trait ViewSlot {
    fn present(&self) -> bool;
    fn render(&mut self, content: String);
}

#[derive(Debug, Clone)]
struct Slot {
    id: &'static str,
    content: String,
}

#[derive(Debug, Clone, Default)]
pub struct PageView {
    slots: Vec<Slot>,
}

impl PageView {
    pub fn with_slots(ids: &[&'static str]) -> Self {
        Self {
            slots: ids
                .iter()
                .map(|&id| Slot {
                    id,
                    content: String::new(),
                })
                .collect(),
        }
    }

    pub fn slot(&mut self, id: &str) -> SlotHandle<'_> {
        match self.slots.iter_mut().find(|s| s.id == id) {
            Some(slot) => SlotHandle::Present(&mut slot.content),
            None => SlotHandle::Missing,
        }
    }

    /// Rendered markup for `id`, empty when absent or never written.
    pub fn get(&self, id: &str) -> &str {
        self.slots
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.content.as_str())
            .unwrap_or("")
    }
}

pub enum SlotHandle<'a> {
    Present(&'a mut String),
    Missing,
}

impl ViewSlot for SlotHandle<'_> {
    fn present(&self) -> bool {
        matches!(self, SlotHandle::Present(_))
    }

    fn render(&mut self, content: String) {
        if let SlotHandle::Present(target) = self {
            **target = content;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_into_declared_slot() {
        let mut view = PageView::with_slots(&["projectsGrid"]);
        let mut slot = view.slot("projectsGrid");
        assert!(slot.present());
        slot.render("<p>hi</p>".into());
        assert_eq!(view.get("projectsGrid"), "<p>hi</p>");
    }

    #[test]
    fn test_missing_slot_is_noop() {
        let mut view = PageView::with_slots(&["projectsGrid"]);
        let mut slot = view.slot("homeProjects");
        assert!(!slot.present());
        slot.render("ignored".into());
        assert_eq!(view.get("homeProjects"), "");
    }
}
