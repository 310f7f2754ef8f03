//! MuPDF-backed document and page backends

use std::path::Path;

use image::RgbaImage;
use mupdf::{Colorspace, Document, Matrix, Page, Pixmap};

use crate::backend::{DocumentBackend, PageBackend};
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// An open MuPDF document.
pub struct MupdfDocument {
    doc: Document,
    page_count: usize,
}

impl MupdfDocument {
    /// Open the document at `path` and read its page count once.
    ///
    /// The count is fixed for the lifetime of the open document.
    pub fn open(path: &Path) -> Result<Self> {
        let doc = Document::open(path.to_string_lossy().as_ref())?;
        let page_count = usize::try_from(doc.page_count()?).unwrap_or(0);
        Ok(Self { doc, page_count })
    }
}

impl DocumentBackend for MupdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn open_page(&self, index: usize) -> Result<Box<dyn PageBackend>> {
        let page = self.doc.load_page(index as i32)?;
        let b = page.bounds()?;
        let bounds = Rect::new(
            0.0,
            0.0,
            f64::from(b.x1 - b.x0),
            f64::from(b.y1 - b.y0),
        );
        Ok(Box::new(MupdfPage { page, bounds }))
    }
}

/// One loaded MuPDF page; the engine resource is released on drop.
pub struct MupdfPage {
    page: Page,
    bounds: Rect,
}

impl PageBackend for MupdfPage {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn render_into(&self, target: &mut RgbaImage) -> Result<()> {
        let (width, height) = target.dimensions();
        if width == 0 || height == 0 || self.bounds.is_empty() {
            return Ok(());
        }

        let sx = width as f64 / self.bounds.width;
        let sy = height as f64 / self.bounds.height;
        let transform = Matrix::new_scale(sx as f32, sy as f32);

        let rgb = Colorspace::device_rgb();
        let pixmap = self.page.to_pixmap(&transform, &rgb, false, false)?;
        blit_pixmap(&pixmap, target)
    }
}

/// Copy pixmap samples into the RGBA target, honoring the pixmap stride.
///
/// Rounding in the scale transform may leave the pixmap a pixel off the
/// target size; the overlap is copied and the rest keeps the cleared
/// background.
fn blit_pixmap(pixmap: &Pixmap, target: &mut RgbaImage) -> Result<()> {
    let n = pixmap.n() as usize;
    if n < 3 {
        return Err(Error::engine(format!(
            "unsupported pixmap format: {n} channels"
        )));
    }

    let src_width = pixmap.width() as usize;
    let src_height = pixmap.height() as usize;
    let stride = pixmap.stride() as usize;
    let samples = pixmap.samples();

    let row_bytes = src_width * n;
    if samples.len() < stride.saturating_mul(src_height) || row_bytes > stride {
        return Err(Error::engine("pixmap buffer size mismatch"));
    }

    let (target_width, target_height) = target.dimensions();
    let copy_width = src_width.min(target_width as usize);
    let copy_height = src_height.min(target_height as usize);
    let out_stride = target_width as usize * 4;
    let out: &mut [u8] = target;

    for y in 0..copy_height {
        let src_row = &samples[y * stride..y * stride + copy_width * n];
        let dst_row = &mut out[y * out_stride..y * out_stride + copy_width * 4];
        for (src, dst) in src_row.chunks_exact(n).zip(dst_row.chunks_exact_mut(4)) {
            dst[..3].copy_from_slice(&src[..3]);
            dst[3] = 255;
        }
    }

    Ok(())
}
