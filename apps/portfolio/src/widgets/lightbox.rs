use super::{Key, Target, UiEvent, Widget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open { src: String },
}

/// Full-size photo modal.
#[derive(Debug, Clone)]
pub struct Lightbox {
    photo_src: String,
    state: LightboxState,
}

impl Lightbox {
    pub fn new(photo_src: impl Into<String>) -> Self {
        Self {
            photo_src: photo_src.into(),
            state: LightboxState::Closed,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }

    /// Image shown in the modal; empty while closed.
    pub fn modal_src(&self) -> &str {
        match &self.state {
            LightboxState::Open { src } => src,
            LightboxState::Closed => "",
        }
    }
}

impl Widget for Lightbox {
    fn id(&self) -> &'static str {
        "photo-lightbox"
    }

    fn handle(&mut self, event: &UiEvent) -> bool {
        let next = match event {
            UiEvent::Click(Target::Photo) => LightboxState::Open {
                src: self.photo_src.clone(),
            },
            UiEvent::Click(Target::ModalClose)
            | UiEvent::Click(Target::Backdrop)
            | UiEvent::KeyDown(Key::Escape) => LightboxState::Closed,
            _ => return false,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }
}
