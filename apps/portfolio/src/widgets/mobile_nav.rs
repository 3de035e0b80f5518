use super::{Key, Target, UiEvent, Widget};

pub const NAV_BREAKPOINT_PX: u32 = 720;

/// Navigation overlay for narrow viewports.
#[derive(Debug, Clone)]
pub struct MobileNav {
    open: bool,
    breakpoint: u32,
}

impl MobileNav {
    pub fn new(breakpoint: u32) -> Self {
        Self {
            open: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn aria_label(&self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

impl Widget for MobileNav {
    fn id(&self) -> &'static str {
        "mobile-nav"
    }

    fn handle(&mut self, event: &UiEvent) -> bool {
        match event {
            UiEvent::Click(Target::NavToggle) => {
                self.open = !self.open;
                true
            }
            UiEvent::Click(Target::NavLink { viewport_width }) if *viewport_width <= self.breakpoint => {
                self.close()
            }
            UiEvent::ClickOutside | UiEvent::KeyDown(Key::Escape) => self.close(),
            UiEvent::Resize { width } if *width > self.breakpoint => self.close(),
            _ => false,
        }
    }
}
