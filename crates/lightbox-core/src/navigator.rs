//! Lightbox navigation state
//!
//! `LightboxNavigator` is the single source of truth for which image is
//! being viewed and whether the overlay is visible. Operations never fail:
//! invalid requests leave the state untouched and report
//! [`Transition::Ignored`] so a stray click cannot break the page.

use crate::command::{Command, Direction};
use crate::display::Display;
use crate::error::NavigatorError;
use crate::image_set::ImageSet;

/// Render instruction produced by a navigator operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed; the renderer has nothing to do
    Ignored,
    /// Overlay became (or stayed) visible on this image; lock page scroll
    Opened(Display),
    /// Overlay is still visible and now shows this image
    Moved(Display),
    /// Overlay was hidden; restore page scroll
    Closed,
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }

    pub fn display(&self) -> Option<&Display> {
        match self {
            Transition::Opened(display) | Transition::Moved(display) => Some(display),
            Transition::Ignored | Transition::Closed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxNavigator {
    images: ImageSet,
    current_index: usize,
    is_open: bool,
}

impl LightboxNavigator {
    /// Creates a closed navigator over `images`. An empty set is valid and
    /// turns every operation into a no-op.
    pub fn new(images: ImageSet) -> Self {
        Self {
            images,
            current_index: 0,
            is_open: false,
        }
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Index of the last viewed image, `None` for an empty gallery
    pub fn current_index(&self) -> Option<usize> {
        (!self.images.is_empty()).then_some(self.current_index)
    }

    /// Opens the overlay on `index`, reporting why a request was rejected.
    pub fn try_open(&mut self, index: usize) -> Result<Display, NavigatorError> {
        let len = self.images.len();
        if len == 0 {
            return Err(NavigatorError::EmptyGallery);
        }
        if index >= len {
            return Err(NavigatorError::InvalidIndex { index, len });
        }

        self.current_index = index;
        self.is_open = true;
        tracing::trace!(index, len, "lightbox opened");
        self.current_display().ok_or(NavigatorError::EmptyGallery)
    }

    /// Opens the overlay on `index`. Out-of-range indices and empty
    /// galleries are ignored.
    pub fn open(&mut self, index: usize) -> Transition {
        match self.try_open(index) {
            Ok(display) => Transition::Opened(display),
            Err(e) => {
                tracing::debug!(index, "open ignored: {}", e);
                Transition::Ignored
            }
        }
    }

    /// Moves one image in `direction`, wrapping at both ends.
    /// Identity while closed.
    pub fn advance(&mut self, direction: Direction) -> Transition {
        let len = self.images.len();
        if !self.is_open || len == 0 {
            return Transition::Ignored;
        }

        // rem_euclid keeps -1 mod n at n - 1
        let next = (self.current_index as isize + direction.step()).rem_euclid(len as isize);
        self.current_index = next as usize;
        tracing::trace!(index = self.current_index, len, ?direction, "lightbox moved");

        match self.current_display() {
            Some(display) => Transition::Moved(display),
            None => Transition::Ignored,
        }
    }

    /// Hides the overlay. The current index is kept.
    pub fn close(&mut self) -> Transition {
        if !self.is_open {
            return Transition::Ignored;
        }
        self.is_open = false;
        tracing::trace!(index = self.current_index, "lightbox closed");
        Transition::Closed
    }

    /// Image, 1-based position and total for rendering. Still reports the
    /// last viewed image while closed.
    pub fn current_display(&self) -> Option<Display> {
        let reference = self.images.get(self.current_index)?.clone();
        Some(Display {
            reference,
            position: self.current_index + 1,
            total: self.images.len(),
        })
    }

    pub fn dispatch(&mut self, command: Command) -> Transition {
        match command {
            Command::Open { index } => self.open(index),
            Command::Advance { direction } => self.advance(direction),
            Command::Close => self.close(),
        }
    }
}
