//! Inert engine for builds without a PDF library
//!
//! Mirrors an engine-less platform: opens fail, page counts are zero, and
//! the writer produces no output. Exists so the facade compiles and behaves
//! predictably everywhere.

use std::path::Path;

use crate::backend::{DocumentBackend, PageBackend};
use crate::error::{Error, Result};

/// Always fails; the stub engine cannot open anything.
pub fn open(_path: &Path) -> Result<Box<dyn DocumentBackend>> {
    Err(Error::engine("no PDF engine compiled in"))
}

/// Document backend with no pages.
#[derive(Debug, Default)]
pub struct StubDocument;

impl DocumentBackend for StubDocument {
    fn page_count(&self) -> usize {
        0
    }

    fn open_page(&self, _index: usize) -> Result<Box<dyn PageBackend>> {
        Err(Error::engine("no PDF engine compiled in"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_document_has_no_pages() {
        let doc = StubDocument;
        assert_eq!(doc.page_count(), 0);
        assert!(doc.open_page(0).is_err());
    }

    #[test]
    fn stub_open_fails() {
        assert!(open(Path::new("anything.pdf")).is_err());
    }
}
