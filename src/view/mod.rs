//! Headless page-list core
//!
//! Presents the pages of a [`Document`] as a scrollable list without owning
//! the scrolling: the host UI toolkit decides which indices are near the
//! viewport and asks for those only, list-virtualization style. `PageList`
//! answers "given an index, produce a rendered image" plus the layout
//! scalars the host needs (axis, spacing, padding, navigation target).

mod config;

pub use config::{DisplayConfig, DisplayDirection, DisplayMode, InterpolationQuality, Viewport};

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use log::warn;

use crate::cache::{CacheKey, PageCache};
use crate::document::Document;
use crate::geometry::Rect;

/// Fixed padding between the viewport edge and page content, in
/// device-independent units.
pub const CONTENT_PADDING: f64 = 12.0;

/// Inter-page gap in continuous-scroll modes.
pub const PAGE_GAP: f64 = 12.0;

/// One page rasterized for display.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    /// White-backed RGBA pixels at the target resolution.
    pub image: RgbaImage,
    /// Zero-based page index.
    pub index: usize,
    /// The page bounds the target size was derived from.
    pub page_bounds: Rect,
}

/// The page-list view core.
///
/// Borrows the document; configuration and viewport are plain values
/// re-evaluated on every pass. A document with zero pages yields an empty
/// list, and any page that fails to render yields a blank slot without
/// affecting the rest.
pub struct PageList<'a> {
    document: &'a Document,
    config: DisplayConfig,
    viewport: Viewport,
}

impl<'a> PageList<'a> {
    #[must_use]
    pub fn new(document: &'a Document, config: DisplayConfig, viewport: Viewport) -> Self {
        Self {
            document,
            config,
            viewport,
        }
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    #[must_use]
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Scroll axis of the list.
    #[must_use]
    pub fn axis(&self) -> DisplayDirection {
        self.config.direction
    }

    /// Padding between viewport edge and content, both edges.
    #[must_use]
    pub fn content_padding(&self) -> f64 {
        CONTENT_PADDING
    }

    /// Gap between consecutive pages along the scroll axis.
    ///
    /// Paged modes widen the gap to the full viewport extent so exactly one
    /// page lands in view at a time; continuous modes use the small fixed
    /// gap.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        if self.config.mode.paged() {
            self.viewport.extent_along(self.config.direction)
        } else {
            PAGE_GAP
        }
    }

    /// Whether the host should stretch the image to the available width.
    ///
    /// Off means native resolution; content may overflow and clip.
    #[must_use]
    pub fn fill_width(&self) -> bool {
        self.config.auto_scales
    }

    /// Resolved navigation target: the configured index when in range,
    /// absent otherwise (out-of-range targets are ignored silently).
    #[must_use]
    pub fn scroll_target(&self) -> Option<usize> {
        self.config
            .go_to_page
            .filter(|&index| index < self.page_count())
    }

    /// Target pixel width shared by every slot, derived from the viewport.
    ///
    /// `None` when the viewport leaves no positive width after padding.
    #[must_use]
    pub fn target_width_px(&self) -> Option<u32> {
        let available = self.viewport.width - 2.0 * CONTENT_PADDING;
        let width = available * self.viewport.density * self.config.effective_scale();
        if width >= 1.0 {
            Some(width as u32)
        } else {
            None
        }
    }

    /// Target pixel size for a page with the given bounds: shared width,
    /// height following the page's aspect ratio.
    #[must_use]
    pub fn target_size(&self, bounds: Rect) -> Option<(u32, u32)> {
        let width = self.target_width_px()?;
        let ratio = bounds.aspect_ratio()?;
        let height = (f64::from(width) * ratio) as u32;
        if height == 0 {
            return None;
        }
        Some((width, height))
    }

    /// Rasterize one page for display.
    ///
    /// Absent for out-of-range indices, degenerate page bounds, and render
    /// failures - all of which the host shows as a blank slot. A failure on
    /// one page never propagates to the rest of the list.
    #[must_use]
    pub fn render_page(&self, index: usize) -> Option<RenderedPage> {
        let page = self.document.page(index)?;
        let page_bounds = page.bounds();

        let Some((width, height)) = self.target_size(page_bounds) else {
            page.close();
            return None;
        };

        let mut image = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
        let rendered = page.render_into(&mut image);
        page.close();

        match rendered {
            Ok(()) => Some(RenderedPage {
                image,
                index,
                page_bounds,
            }),
            Err(err) => {
                warn!("page {index} failed to render: {err}");
                None
            }
        }
    }

    /// Like [`render_page`](Self::render_page), backed by an LRU cache
    /// keyed on index, target width and scale.
    #[must_use]
    pub fn render_page_cached(
        &self,
        index: usize,
        cache: &mut PageCache,
    ) -> Option<Arc<RenderedPage>> {
        let width = self.target_width_px()?;
        let key = CacheKey::new(index, width, self.config.effective_scale());
        if let Some(hit) = cache.get(&key) {
            return Some(hit);
        }
        let rendered = self.render_page(index)?;
        Some(cache.insert(key, rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeDocument;

    const PAGE: Rect = Rect::new(0.0, 0.0, 100.0, 200.0);

    fn doc(pages: usize) -> crate::Document {
        FakeDocument::new(pages, PAGE).into_document()
    }

    fn viewport() -> Viewport {
        Viewport::new(400.0, 800.0, 2.0)
    }

    #[test]
    fn target_size_follows_aspect_ratio() {
        let doc = doc(1);
        let list = PageList::new(&doc, DisplayConfig::default(), viewport());

        // (400 - 24) * 2.0 * 1.0 = 752 wide; aspect 2.0 doubles the height.
        assert_eq!(list.target_width_px(), Some(752));
        assert_eq!(list.target_size(PAGE), Some((752, 1504)));
    }

    #[test]
    fn rendered_page_matches_target_size() {
        let doc = doc(3);
        let list = PageList::new(&doc, DisplayConfig::default(), viewport());

        let rendered = list.render_page(1).expect("in-range page renders");
        assert_eq!(rendered.index, 1);
        assert_eq!(rendered.image.dimensions(), (752, 1504));
        assert_eq!(rendered.page_bounds, PAGE);
    }

    #[test]
    fn scale_factor_scales_width() {
        let doc = doc(1);
        let config = DisplayConfig {
            scale_factor: 2.0,
            ..DisplayConfig::default()
        };
        let list = PageList::new(&doc, config, viewport());
        assert_eq!(list.target_width_px(), Some(1504));
    }

    #[test]
    fn out_of_range_is_blank_slot() {
        let doc = doc(2);
        let list = PageList::new(&doc, DisplayConfig::default(), viewport());
        assert!(list.render_page(2).is_none());
    }

    #[test]
    fn failing_page_is_isolated() {
        let doc = FakeDocument::new(3, PAGE)
            .with_failing_page(1)
            .into_document();
        let list = PageList::new(&doc, DisplayConfig::default(), viewport());

        assert!(list.render_page(0).is_some());
        assert!(list.render_page(1).is_none());
        assert!(list.render_page(2).is_some());
    }

    #[test]
    fn zero_page_document_is_empty_list() {
        let doc = doc(0);
        let list = PageList::new(&doc, DisplayConfig::default(), viewport());
        assert_eq!(list.page_count(), 0);
        assert!(list.render_page(0).is_none());
        assert_eq!(list.scroll_target(), None);
    }

    #[test]
    fn degenerate_bounds_are_blank() {
        let doc = FakeDocument::new(1, Rect::ZERO).into_document();
        let list = PageList::new(&doc, DisplayConfig::default(), viewport());
        assert!(list.render_page(0).is_none());
    }

    #[test]
    fn spacing_continuous_vs_paged() {
        let doc = doc(5);
        let continuous = PageList::new(&doc, DisplayConfig::default(), viewport());
        assert_eq!(continuous.spacing(), PAGE_GAP);

        let mut config = DisplayConfig {
            mode: DisplayMode::SinglePage,
            ..DisplayConfig::default()
        };
        let paged = PageList::new(&doc, config.clone(), viewport());
        assert_eq!(paged.spacing(), 800.0);

        config.direction = DisplayDirection::Horizontal;
        let paged_h = PageList::new(&doc, config, viewport());
        assert_eq!(paged_h.spacing(), 400.0);
    }

    #[test]
    fn direction_changes_only_the_axis() {
        let doc = doc(3);
        let config = DisplayConfig {
            direction: DisplayDirection::Horizontal,
            ..DisplayConfig::default()
        };
        let horizontal = PageList::new(&doc, config, viewport());
        let vertical = PageList::new(&doc, DisplayConfig::default(), viewport());

        assert_eq!(horizontal.axis(), DisplayDirection::Horizontal);
        assert_eq!(vertical.axis(), DisplayDirection::Vertical);
        // Page content and sizing are identical either way.
        let h = horizontal.render_page(0).unwrap();
        let v = vertical.render_page(0).unwrap();
        assert_eq!(h.image.dimensions(), v.image.dimensions());
        assert_eq!(h.image.as_raw(), v.image.as_raw());
    }

    #[test]
    fn navigation_ignored_when_out_of_range() {
        let doc = doc(4);
        let mut config = DisplayConfig {
            go_to_page: Some(4), // one past the end
            ..DisplayConfig::default()
        };
        let list = PageList::new(&doc, config.clone(), viewport());
        assert_eq!(list.scroll_target(), None);

        config.go_to_page = Some(3);
        let list = PageList::new(&doc, config, viewport());
        assert_eq!(list.scroll_target(), Some(3));
    }

    #[test]
    fn cached_render_hits_on_second_pass() {
        let doc = doc(2);
        let list = PageList::new(&doc, DisplayConfig::default(), viewport());
        let mut cache = PageCache::new(4);

        let first = list.render_page_cached(0, &mut cache).unwrap();
        let second = list.render_page_cached(0, &mut cache).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn closed_document_renders_nothing() {
        let mut doc = doc(3);
        doc.close();
        let list = PageList::new(&doc, DisplayConfig::default(), viewport());
        assert_eq!(list.page_count(), 0);
        assert!(list.render_page(0).is_none());
    }
}
