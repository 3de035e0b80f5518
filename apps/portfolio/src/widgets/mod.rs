//! Interactive widgets as explicit state machines.
//!
//! Each widget owns its own state and reacts to `UiEvent`s; nothing is shared
//! between widgets. A `WidgetHost` is created once per page load and mounts
//! each widget at most once, which replaces per-element "already bound" flags.

use std::collections::HashSet;
use std::ops::Deref;

use thiserror::Error;
use tracing::debug;

pub mod accordion;
pub mod lightbox;
pub mod mobile_nav;
pub mod search_filter;
pub mod skills_filter;
pub mod summary;

pub use accordion::Accordion;
pub use lightbox::Lightbox;
pub use mobile_nav::MobileNav;
pub use search_filter::SearchFilter;
pub use skills_filter::SkillsFilter;
pub use summary::ExpandableSummary;

// Variants marked `allow(dead_code)` are raised only by the browser script;
// server-rendered pages reach the same states through plain links.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    #[allow(dead_code)]
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    AccordionToggle(usize),
    SummaryToggle,
    Photo,
    #[allow(dead_code)]
    ModalClose,
    #[allow(dead_code)]
    Backdrop,
    NavToggle,
    #[allow(dead_code)]
    NavLink { viewport_width: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Text typed into a search box.
    Input(String),
    /// New value picked in a select.
    Change(String),
    Click(Target),
    #[allow(dead_code)]
    ClickOutside,
    #[allow(dead_code)]
    KeyDown(Key),
    /// Viewport width, from the client hint on the server side.
    Resize { width: u32 },
}

pub trait Widget {
    fn id(&self) -> &'static str;

    /// Applies one event. Returns `true` when the visible state changed.
    fn handle(&mut self, event: &UiEvent) -> bool;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("widget '{0}' is already attached")]
    AlreadyAttached(&'static str),
}

/// Tracks which widgets are attached for the current page load.
#[derive(Debug, Default)]
pub struct WidgetHost {
    attached: HashSet<&'static str>,
}

impl WidgetHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach<W: Widget>(&mut self, widget: W) -> Result<Mounted<W>, WidgetError> {
        let id = widget.id();
        if !self.attached.insert(id) {
            return Err(WidgetError::AlreadyAttached(id));
        }
        debug!("Attached widget {id}");
        Ok(Mounted { widget })
    }

    pub fn detach<W: Widget>(&mut self, mounted: Mounted<W>) -> W {
        self.attached.remove(mounted.widget.id());
        mounted.widget
    }
}

/// A widget bound to a host. `WidgetHost::detach` consumes it, so a detached
/// widget cannot receive events.
#[derive(Debug)]
pub struct Mounted<W> {
    widget: W,
}

impl<W: Widget> Mounted<W> {
    pub fn dispatch(&mut self, event: &UiEvent) -> bool {
        self.widget.handle(event)
    }
}

impl<W> Deref for Mounted<W> {
    type Target = W;

    fn deref(&self) -> &W {
        &self.widget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_twice_is_rejected() {
        let mut host = WidgetHost::new();
        let first = host.attach(MobileNav::new(720)).unwrap();
        let err = host.attach(MobileNav::new(720)).unwrap_err();
        assert_eq!(err, WidgetError::AlreadyAttached("mobile-nav"));

        let _nav = host.detach(first);
        assert!(host.attach(MobileNav::new(720)).is_ok());
    }

    #[test]
    fn test_mounted_widget_receives_events() {
        let mut host = WidgetHost::new();
        let mut nav = host.attach(MobileNav::new(720)).unwrap();
        assert!(nav.dispatch(&UiEvent::Click(Target::NavToggle)));
        assert!(nav.is_open());
    }
}
