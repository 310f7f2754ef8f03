//! Page-space geometry value types
//!
//! Plain `Copy` values in floating-point page units (points). They carry no
//! behavior beyond the small derived accessors the rest of the crate needs.

/// A point in page space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An extent in page space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangle in page space, used for page bounds and media boxes.
///
/// The zero rectangle is the canonical empty value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// A rectangle without positive extent in both dimensions is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Height-over-width ratio used for proportional page sizing.
    ///
    /// `None` when the width is not positive (the ratio would be
    /// meaningless).
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width > 0.0 {
            Some(self.height / self.width)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rect_is_empty() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::new(0.0, 0.0, 100.0, 0.0).is_empty());
        assert!(Rect::new(0.0, 0.0, -1.0, 50.0).is_empty());
        assert!(!Rect::new(10.0, 10.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn aspect_ratio_of_a4() {
        let a4 = Rect::new(0.0, 0.0, 595.0, 842.0);
        let ratio = a4.aspect_ratio().unwrap();
        assert!((ratio - 842.0 / 595.0).abs() < 1e-9);
    }

    #[test]
    fn aspect_ratio_degenerate_width() {
        assert_eq!(Rect::new(0.0, 0.0, 0.0, 842.0).aspect_ratio(), None);
        assert_eq!(Rect::new(0.0, 0.0, -5.0, 842.0).aspect_ratio(), None);
    }

    #[test]
    fn accessors() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.origin(), Point::new(1.0, 2.0));
        assert_eq!(r.size(), Size::new(3.0, 4.0));
    }
}
