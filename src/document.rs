//! Document and page handles
//!
//! Thin facades over the backend traits. Open failures and out-of-range
//! access are absence, never panics; closing is idempotent and also happens
//! implicitly on drop.

use std::fmt;
use std::path::Path;

use image::RgbaImage;
use log::{debug, warn};

use crate::backend::{DocumentBackend, PageBackend};
use crate::engine;
use crate::error::Result;
use crate::geometry::Rect;

/// An opened PDF document.
///
/// Owns at most one engine resource. No parsing or rasterization happens
/// here; both are delegated to the engine selected at build time.
pub struct Document {
    backend: Option<Box<dyn DocumentBackend>>,
}

impl Document {
    /// Attempt to open a PDF at a file location.
    ///
    /// Absence means the file is missing or the engine rejected it
    /// (corrupt, unsupported); the cause is logged at debug level. No
    /// partial state is retained on failure.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match engine::open_default(path) {
            Ok(backend) => {
                debug!(
                    "opened {} ({} pages)",
                    path.display(),
                    backend.page_count()
                );
                Some(Self {
                    backend: Some(backend),
                })
            }
            Err(err) => {
                debug!("failed to open {}: {err}", path.display());
                None
            }
        }
    }

    /// Wrap an explicit backend.
    ///
    /// For composing non-default engines and test doubles.
    #[must_use]
    pub fn from_backend(backend: Box<dyn DocumentBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Engine-reported page count; 0 when closed or never opened.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.backend.as_ref().map_or(0, |b| b.page_count())
    }

    /// Acquire a handle to the page at a zero-based index.
    ///
    /// Absence when the index is out of range, the document is closed, or
    /// the engine refuses the page. Each call opens a fresh engine resource;
    /// the returned [`Page`] owns it and releases it on [`Page::close`] or
    /// drop.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<Page> {
        let backend = self.backend.as_ref()?;
        if index >= backend.page_count() {
            return None;
        }
        match backend.open_page(index) {
            Ok(page) => Some(Page {
                backend: page,
                index,
            }),
            Err(err) => {
                warn!("failed to open page {index}: {err}");
                None
            }
        }
    }

    /// Release the engine resource. Idempotent.
    ///
    /// Afterwards `page_count()` is 0 and `page()` is always absent.
    pub fn close(&mut self) {
        if self.backend.take().is_some() {
            debug!("document closed");
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.backend.is_none()
    }
}

impl Drop for Document {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("page_count", &self.page_count())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// A handle to one page of an open [`Document`].
///
/// Owns the engine's page resource. `close(self)` consumes the handle, so
/// use-after-close is unrepresentable; dropping without closing releases the
/// resource just the same, which covers early returns and error paths.
pub struct Page {
    backend: Box<dyn PageBackend>,
    index: usize,
}

impl Page {
    /// Zero-based index within the owning document.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Page rectangle with origin (0,0), in device-independent points.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.backend.bounds()
    }

    /// Rasterize the page into the caller-sized pixel buffer.
    ///
    /// Callers pre-size the target to the desired output resolution; page
    /// space is scaled to fill it.
    pub fn render_into(&self, target: &mut RgbaImage) -> Result<()> {
        self.backend.render_into(target)
    }

    /// Release the engine's page resource.
    pub fn close(self) {}
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("index", &self.index)
            .field("bounds", &self.bounds())
            .finish()
    }
}
