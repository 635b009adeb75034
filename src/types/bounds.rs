//! Rectangular domain extent.

use std::fmt;

/// Physical extent of a rectangular domain in meters.
///
/// For a grid this is the outer edge of the cell faces, so the width is
/// `nx * dx` regardless of where the coordinate anchor sits.
///
/// # Example
///
/// ```
/// use eddy_island::types::Bounds2D;
///
/// let bounds = Bounds2D::new(0.0, 600e3, 0.0, 400e3);
/// assert_eq!(bounds.center(), (300e3, 200e3));
/// assert!(bounds.contains(450e3, 200e3));
/// assert!(!bounds.contains(700e3, 200e3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2D {
    /// Western edge
    pub x_min: f64,
    /// Eastern edge
    pub x_max: f64,
    /// Southern edge
    pub y_min: f64,
    /// Northern edge
    pub y_max: f64,
}

impl Bounds2D {
    /// Create new domain bounds.
    ///
    /// # Panics
    ///
    /// Panics if `x_max <= x_min` or `y_max <= y_min`.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        assert!(
            x_max > x_min,
            "x_max ({}) must be greater than x_min ({})",
            x_max,
            x_min
        );
        assert!(
            y_max > y_min,
            "y_max ({}) must be greater than y_min ({})",
            y_max,
            y_min
        );

        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// East-west extent.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// North-south extent.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Domain center point.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Check if a point is inside the domain (edges inclusive).
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.1}, {:.1}] × [{:.1}, {:.1}] km",
            self.x_min / 1e3,
            self.x_max / 1e3,
            self.y_min / 1e3,
            self.y_max / 1e3
        )
    }
}
