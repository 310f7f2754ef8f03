//! PDF writer - builder-style page output delegated to the engine
//!
//! A session fixes one media box, then the caller's draw closure appends
//! pages in order: every [`PageContext::begin_page`] finalizes the previous
//! page and opens a new one, and whatever page is still open when the
//! closure returns is finalized automatically. The bytes of the resulting
//! file are produced entirely by the engine's document writer; this layer
//! contributes only page-boundary sequencing and the shared bounds.

use std::path::Path;

use crate::error::Result;
use crate::geometry::Rect;

/// A4 portrait in points, the default media box.
pub const A4_PORTRAIT: Rect = Rect::new(0.0, 0.0, 595.0, 842.0);

/// Fixed page format shared by every page of a writer session.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriterFormat {
    /// Media box applied to every page; no per-page override.
    pub bounds: Rect,
}

impl WriterFormat {
    #[must_use]
    pub const fn new(bounds: Rect) -> Self {
        Self { bounds }
    }
}

impl Default for WriterFormat {
    fn default() -> Self {
        Self::new(A4_PORTRAIT)
    }
}

/// A PDF-producing session with a fixed page size.
#[derive(Clone, Copy, Debug)]
pub struct PdfWriter {
    format: WriterFormat,
}

impl PdfWriter {
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self::with_format(WriterFormat::new(bounds))
    }

    #[must_use]
    pub fn with_format(format: WriterFormat) -> Self {
        Self { format }
    }

    /// Media box applied to every page of this session.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.format.bounds
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::with_format(WriterFormat::default())
    }
}

#[cfg(feature = "mupdf")]
mod engine_backed {
    use super::{PdfWriter, Result};
    use crate::geometry::Rect;

    use mupdf::{Device, DocumentWriter};

    /// Drawing context handed to the caller's draw closure.
    ///
    /// Pages transition `begin -> draw -> (implicit end on next begin or on
    /// finalize)`. Drawing before the first `begin_page` has no page to
    /// land on and is the caller's mistake; this layer does not guard it.
    pub struct PageContext<'a> {
        writer: &'a mut DocumentWriter,
        media_box: mupdf::Rect,
        device: Option<Device>,
        pages_begun: usize,
    }

    impl PageContext<'_> {
        /// Finalize the previous page (if any) and open a new one sized to
        /// the session bounds.
        pub fn begin_page(&mut self) -> Result<()> {
            self.finish_open_page()?;
            self.device = Some(self.writer.begin_page(self.media_box)?);
            self.pages_begun += 1;
            Ok(())
        }

        /// The engine's drawing device for the currently open page.
        #[must_use]
        pub fn device(&self) -> Option<&Device> {
            self.device.as_ref()
        }

        /// Number of pages begun so far in this session.
        #[must_use]
        pub fn pages_begun(&self) -> usize {
            self.pages_begun
        }

        fn finish_open_page(&mut self) -> Result<()> {
            if let Some(device) = self.device.take() {
                self.writer.end_page(device)?;
            }
            Ok(())
        }
    }

    fn media_box(bounds: Rect) -> mupdf::Rect {
        mupdf::Rect {
            x0: bounds.x as f32,
            y0: bounds.y as f32,
            x1: (bounds.x + bounds.width) as f32,
            y1: (bounds.y + bounds.height) as f32,
        }
    }

    impl PdfWriter {
        /// Run the draw closure once and return the finished PDF as bytes.
        ///
        /// The engine writer emits to a temporary file, which is read back
        /// after finalization.
        pub fn pdf_data(
            &self,
            draw: impl FnOnce(&mut PageContext<'_>) -> Result<()>,
        ) -> Result<Vec<u8>> {
            let dir = tempfile::tempdir()?;
            let path = dir.path().join("session.pdf");

            let mut writer = DocumentWriter::new(&*path.to_string_lossy(), "pdf", "")?;
            let mut ctx = PageContext {
                writer: &mut writer,
                media_box: media_box(self.bounds()),
                device: None,
                pages_begun: 0,
            };
            draw(&mut ctx)?;
            ctx.finish_open_page()?;
            drop(ctx);

            // Dropping the writer closes the document and flushes the file.
            drop(writer);
            Ok(std::fs::read(&path)?)
        }

        /// Same contract as [`pdf_data`](Self::pdf_data), persisted to
        /// `path`. I/O failure propagates; data loss must be visible.
        pub fn write_to(
            &self,
            path: impl AsRef<super::Path>,
            draw: impl FnOnce(&mut PageContext<'_>) -> Result<()>,
        ) -> Result<()> {
            let data = self.pdf_data(draw)?;
            std::fs::write(path, data)?;
            Ok(())
        }
    }
}

#[cfg(feature = "mupdf")]
pub use engine_backed::PageContext;

#[cfg(not(feature = "mupdf"))]
mod inert {
    use super::{PdfWriter, Result};

    /// Drawing context of the inert engine; counts pages, draws nothing.
    #[derive(Debug, Default)]
    pub struct PageContext {
        pages_begun: usize,
    }

    impl PageContext {
        /// Finalize the previous page (if any) and open a new one.
        pub fn begin_page(&mut self) -> Result<()> {
            self.pages_begun += 1;
            Ok(())
        }

        /// Number of pages begun so far in this session.
        #[must_use]
        pub fn pages_begun(&self) -> usize {
            self.pages_begun
        }
    }

    impl PdfWriter {
        /// Without an engine the session produces an empty buffer.
        pub fn pdf_data(
            &self,
            draw: impl FnOnce(&mut PageContext) -> Result<()>,
        ) -> Result<Vec<u8>> {
            let mut ctx = PageContext::default();
            draw(&mut ctx)?;
            Ok(Vec::new())
        }

        /// Without an engine nothing is persisted.
        pub fn write_to(
            &self,
            _path: impl AsRef<super::Path>,
            draw: impl FnOnce(&mut PageContext) -> Result<()>,
        ) -> Result<()> {
            let mut ctx = PageContext::default();
            draw(&mut ctx)?;
            Ok(())
        }
    }
}

#[cfg(not(feature = "mupdf"))]
pub use inert::PageContext;
