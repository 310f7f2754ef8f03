//! PDF engine backends
//!
//! The engine is selected at build time: with the `mupdf` feature (default)
//! documents open through MuPDF; without it the inert stub engine is used
//! and every open yields absence, matching the behavior of a platform with
//! no PDF library.

pub mod stub;

#[cfg(feature = "mupdf")]
pub mod mupdf;

use std::path::Path;

use crate::backend::DocumentBackend;
use crate::error::Result;

#[cfg(feature = "mupdf")]
pub(crate) fn open_default(path: &Path) -> Result<Box<dyn DocumentBackend>> {
    let doc = mupdf::MupdfDocument::open(path)?;
    Ok(Box::new(doc))
}

#[cfg(not(feature = "mupdf"))]
pub(crate) fn open_default(path: &Path) -> Result<Box<dyn DocumentBackend>> {
    stub::open(path)
}
