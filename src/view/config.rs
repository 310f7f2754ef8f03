//! Display configuration for the page-list view
//!
//! Pure configuration, re-evaluated on every render pass; no lifecycle of
//! its own.

use image::imageops::FilterType;

/// How pages are grouped and paged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayMode {
    /// One page visible at a time
    SinglePage,
    /// All pages in a continuous scroll
    #[default]
    SinglePageContinuous,
    /// Two-page spread, paged
    TwoUp,
    /// Two-page spread, continuous scroll
    TwoUpContinuous,
}

impl DisplayMode {
    /// Paged modes show exactly one page (or spread) per viewport.
    #[must_use]
    pub fn paged(self) -> bool {
        matches!(self, Self::SinglePage | Self::TwoUp)
    }
}

/// Scroll axis of the page list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayDirection {
    /// Pages stacked top to bottom
    #[default]
    Vertical,
    /// Pages placed left to right
    Horizontal,
}

/// Interpolation hint for hosts that rescale rendered pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InterpolationQuality {
    None,
    Low,
    #[default]
    High,
}

impl InterpolationQuality {
    /// Resize filter a host should use when scaling a rendered page.
    #[must_use]
    pub fn filter(self) -> FilterType {
        match self {
            Self::None => FilterType::Nearest,
            Self::Low => FilterType::Triangle,
            Self::High => FilterType::Lanczos3,
        }
    }
}

const DEFAULT_MIN_SCALE: f64 = 0.25;
const DEFAULT_MAX_SCALE: f64 = 4.0;

/// Configuration driving the page-list view.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    pub direction: DisplayDirection,
    /// Scale rendered pages to fill the available layout width.
    pub auto_scales: bool,
    /// User scale factor (1.0 = 100%).
    pub scale_factor: f64,
    pub min_scale_factor: f64,
    pub max_scale_factor: f64,
    pub interpolation: InterpolationQuality,
    /// Programmatic navigation target; out-of-range values are ignored.
    pub go_to_page: Option<usize>,
    /// Host passthrough: draw a shadow under each page.
    pub page_shadows: bool,
    /// Host passthrough: draw separators between pages.
    pub page_breaks: bool,
    /// Host passthrough: treat the first page as a book cover in two-up.
    pub as_book: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            direction: DisplayDirection::default(),
            auto_scales: true,
            scale_factor: 1.0,
            min_scale_factor: DEFAULT_MIN_SCALE,
            max_scale_factor: DEFAULT_MAX_SCALE,
            interpolation: InterpolationQuality::default(),
            go_to_page: None,
            page_shadows: true,
            page_breaks: true,
            as_book: false,
        }
    }
}

impl DisplayConfig {
    /// Scale factor clamped into `[min, max]`; non-finite input falls back
    /// to 1.0, and non-finite or inverted bounds fall back to the defaults.
    #[must_use]
    pub fn effective_scale(&self) -> f64 {
        if !self.scale_factor.is_finite() {
            return 1.0;
        }
        let mut min = self.min_scale_factor;
        let mut max = self.max_scale_factor;
        if !min.is_finite() {
            min = DEFAULT_MIN_SCALE;
        }
        if !max.is_finite() {
            max = DEFAULT_MAX_SCALE;
        }
        if min > max {
            min = DEFAULT_MIN_SCALE;
            max = DEFAULT_MAX_SCALE;
        }
        self.scale_factor.max(min).min(max)
    }
}

/// The layout extent available to the page list, in device-independent
/// units, plus the device pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Physical pixels per device-independent unit.
    pub density: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64, density: f64) -> Self {
        Self {
            width,
            height,
            density,
        }
    }

    /// Viewport extent along the given scroll axis.
    #[must_use]
    pub fn extent_along(&self, direction: DisplayDirection) -> f64 {
        match direction {
            DisplayDirection::Vertical => self.height,
            DisplayDirection::Horizontal => self.width,
        }
    }
}
