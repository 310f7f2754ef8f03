//! In-memory engine doubles for tests and host previews

use std::collections::HashSet;

use image::{Rgba, RgbaImage};

use crate::backend::{DocumentBackend, PageBackend};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// Document backend with a fixed page count and uniform page bounds.
///
/// Pages render as a solid fill whose shade depends on the index, so tests
/// can tell pages apart by pixel content. Individual pages can be marked as
/// failing to exercise blank-slot handling.
pub struct FakeDocument {
    pages: usize,
    bounds: Rect,
    failing: HashSet<usize>,
}

impl FakeDocument {
    #[must_use]
    pub fn new(pages: usize, bounds: Rect) -> Self {
        Self {
            pages,
            bounds,
            failing: HashSet::new(),
        }
    }

    /// Mark a page whose render call fails.
    #[must_use]
    pub fn with_failing_page(mut self, index: usize) -> Self {
        self.failing.insert(index);
        self
    }

    /// Wrap into the public [`Document`] facade.
    #[must_use]
    pub fn into_document(self) -> Document {
        Document::from_backend(Box::new(self))
    }
}

impl DocumentBackend for FakeDocument {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn open_page(&self, index: usize) -> Result<Box<dyn PageBackend>> {
        Ok(Box::new(FakePage {
            bounds: self.bounds,
            fill: shade(index),
            fail: self.failing.contains(&index),
        }))
    }
}

struct FakePage {
    bounds: Rect,
    fill: Rgba<u8>,
    fail: bool,
}

impl PageBackend for FakePage {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn render_into(&self, target: &mut RgbaImage) -> Result<()> {
        if self.fail {
            return Err(Error::engine("injected render failure"));
        }
        for pixel in target.pixels_mut() {
            *pixel = self.fill;
        }
        Ok(())
    }
}

fn shade(index: usize) -> Rgba<u8> {
    let v = ((index * 37) % 200) as u8;
    Rgba([v, v.wrapping_add(20), v.wrapping_add(40), 255])
}
