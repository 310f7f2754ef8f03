//! Capability traits implemented by each PDF engine
//!
//! One engine is wired in at build time (see [`crate::engine`]); the
//! [`crate::Document`] and [`crate::Page`] facades only ever talk to these
//! traits, so swapping engines never touches the callers.

use image::RgbaImage;

use crate::error::Result;
use crate::geometry::Rect;

/// An open document inside a PDF engine.
///
/// Releasing the engine resource is dropping the box; there is no separate
/// close operation at this layer.
pub trait DocumentBackend {
    /// Number of pages reported by the engine.
    fn page_count(&self) -> usize;

    /// Acquire the engine resource for one page.
    ///
    /// `index` is already range-checked by the facade. Whether several pages
    /// of the same document may be open at once is engine-specific and the
    /// caller's responsibility.
    fn open_page(&self, index: usize) -> Result<Box<dyn PageBackend>>;
}

/// The engine resource for one page of an open document.
pub trait PageBackend {
    /// Page rectangle with origin (0,0), in device-independent points.
    fn bounds(&self) -> Rect;

    /// Rasterize the page into the caller-sized pixel buffer.
    ///
    /// Page space is scaled to the buffer's dimensions; no cropping or
    /// layout logic of its own.
    fn render_into(&self, target: &mut RgbaImage) -> Result<()>;
}
