//! folio - PDF page viewing and writing, delegated to a native PDF engine.
//!
//! The crate opens documents, hands out page handles that rasterize into
//! caller-sized pixel buffers, drives a host-virtualized page list, and
//! writes new PDFs one fixed-size page at a time. Parsing PDF syntax and
//! turning content streams into pixels belong entirely to the engine (MuPDF
//! by default, selected at build time); this layer translates shapes, enums
//! and lifecycle calls.

pub mod backend;
pub mod cache;
pub mod document;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod view;
pub mod writer;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use cache::{CacheKey, PageCache};
pub use document::{Document, Page};
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use view::{
    DisplayConfig, DisplayDirection, DisplayMode, InterpolationQuality, PageList, RenderedPage,
    Viewport,
};
pub use writer::{PageContext, PdfWriter, WriterFormat};
