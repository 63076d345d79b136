//! Carousel controller: cyclic navigation over one product's photos.
//!
//! The state borrows the product's image list and only tracks which slide is
//! current. `next`/`previous` wrap around; with zero or one image they are
//! no-ops, and the shell hides every navigation affordance.

use gajanand_core::{DomainError, DomainResult, StateMachine};

use crate::product::ImageRef;

/// Per-card carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState<'a> {
    images: &'a [ImageRef],
    current: usize,
}

/// One dot in the slide indicator strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

impl<'a> CarouselState<'a> {
    /// Start on the first image. `images` may be empty.
    pub fn new(images: &'a [ImageRef]) -> Self {
        Self { images, current: 0 }
    }

    pub fn images(&self) -> &'a [ImageRef] {
        self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&'a ImageRef> {
        self.images.get(self.current)
    }

    pub fn next(self) -> Self {
        let len = self.len();
        if len <= 1 {
            return self;
        }
        Self {
            current: (self.current + 1) % len,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        let len = self.len();
        if len <= 1 {
            return self;
        }
        let current = if self.current == 0 {
            len - 1
        } else {
            self.current - 1
        };
        Self { current, ..self }
    }

    /// Jump to `index`. Only indices reported by [`indicators`](Self::indicators)
    /// are valid; anything else is rejected and the state is left as-is.
    pub fn go_to(self, index: usize) -> DomainResult<Self> {
        if index >= self.len() {
            return Err(DomainError::invariant(format!(
                "slide {index} out of range for carousel of {}",
                self.len()
            )));
        }
        Ok(Self {
            current: index,
            ..self
        })
    }

    /// Navigation arrows and dots are shown only for two or more images.
    pub fn has_navigation(&self) -> bool {
        self.len() > 1
    }

    /// 1-based position and total, e.g. `(3, 8)` for "3 / 8".
    pub fn position(&self) -> Option<(usize, usize)> {
        self.has_navigation()
            .then(|| (self.current + 1, self.len()))
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        if !self.has_navigation() {
            return Vec::new();
        }
        (0..self.len())
            .map(|index| Indicator {
                index,
                active: index == self.current,
            })
            .collect()
    }

    /// Alt text for the current slide.
    pub fn alt_text(&self, product_title: &str) -> String {
        format!("{product_title} - Image {}", self.current + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Next,
    Previous,
    GoTo(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The current slide changed; the shell crossfades from `from` to `to`.
    SlideChanged { from: usize, to: usize },
}

impl StateMachine for CarouselState<'_> {
    type Command = CarouselCommand;
    type Event = CarouselEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CarouselEvent::SlideChanged { to, .. } => {
                debug_assert!(*to < self.len());
                self.current = *to;
            }
        }
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let target = match command {
            CarouselCommand::Next => self.next(),
            CarouselCommand::Previous => self.previous(),
            CarouselCommand::GoTo(index) => self.go_to(*index)?,
        };

        if target.current == self.current {
            return Ok(Vec::new());
        }

        Ok(vec![CarouselEvent::SlideChanged {
            from: self.current,
            to: target.current,
        }])
    }
}
