/// Lightbox: full-view image overlay for the detail page gallery
///
/// A small state machine (`Closed` / `Open(index)`) over the resolved
/// gallery URLs of one detail view, plus the adapter that turns pointer
/// and keyboard input into transitions. Nothing here knows about iced.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

/// What the overlay should show for the current image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxFrame {
    pub url: String,
    /// "Photo {n} of {N}"
    pub alt: String,
    pub show_previous: bool,
    pub show_next: bool,
}

/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Input events, already stripped of any toolkit types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxInput {
    /// Click on the gallery thumbnail at this index
    ThumbnailClicked(usize),
    CloseClicked,
    /// Click on the dark backdrop around the image
    BackdropClicked,
    /// Click on the displayed image itself; never closes
    ImageClicked,
    PreviousClicked,
    NextClicked,
    KeyPressed(LightboxKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<String>,
    state: LightboxState,
}

impl Lightbox {
    /// Create a closed lightbox over a fixed list of image URLs
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            state: LightboxState::Closed,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    /// Background scrolling is suspended for as long as the overlay is open
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Open at `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) {
        if index >= self.images.len() {
            debug!(index, len = self.images.len(), "ignoring lightbox open out of range");
            return;
        }
        self.state = LightboxState::Open(index);
        debug!(index, "lightbox opened");
    }

    pub fn close(&mut self) {
        if self.is_open() {
            debug!("lightbox closed");
        }
        self.state = LightboxState::Closed;
    }

    /// Jump to `index` while open; no-op when closed or out of range
    pub fn show_index(&mut self, index: usize) {
        if self.is_open() && index < self.images.len() {
            self.state = LightboxState::Open(index);
        }
    }

    pub fn previous(&mut self) {
        if let LightboxState::Open(index) = self.state {
            if index > 0 {
                self.show_index(index - 1);
            }
        }
    }

    pub fn next(&mut self) {
        if let LightboxState::Open(index) = self.state {
            self.show_index(index + 1);
        }
    }

    /// The image currently on screen, or `None` while closed
    pub fn frame(&self) -> Option<LightboxFrame> {
        let LightboxState::Open(index) = self.state else {
            return None;
        };
        let url = self.images.get(index)?.clone();
        let last = self.images.len() - 1;

        Some(LightboxFrame {
            url,
            alt: format!("Photo {} of {}", index + 1, self.images.len()),
            show_previous: index != 0,
            show_next: index != last,
        })
    }

    /// Map one input event onto the transition table
    pub fn handle(&mut self, input: LightboxInput) {
        match input {
            LightboxInput::ThumbnailClicked(index) => self.open(index),
            LightboxInput::CloseClicked | LightboxInput::BackdropClicked => self.close(),
            LightboxInput::ImageClicked => {}
            LightboxInput::PreviousClicked => self.previous(),
            LightboxInput::NextClicked => self.next(),
            LightboxInput::KeyPressed(key) => {
                // Keyboard only matters while the overlay is up
                if !self.is_open() {
                    return;
                }
                match key {
                    LightboxKey::Escape => self.close(),
                    LightboxKey::ArrowLeft => self.previous(),
                    LightboxKey::ArrowRight => self.next(),
                }
            }
        }
    }
}
