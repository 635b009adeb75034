//! Grid cell counts.

use std::fmt;

/// Number of cells in each horizontal direction.
///
/// Arrays built on a grid of this resolution are indexed `[row, col]`
/// with rows running along y, so the array shape is `(ny, nx)`.
///
/// # Example
///
/// ```
/// use eddy_island::types::Resolution2D;
///
/// let res = Resolution2D::new(120, 80);
/// assert_eq!(res.nx(), 120);
/// assert_eq!(res.ny(), 80);
/// assert_eq!(res.shape(), (80, 120));
/// assert_eq!(res.total_cells(), 9600);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution2D {
    nx: usize,
    ny: usize,
}

impl Resolution2D {
    /// Create a new resolution.
    ///
    /// # Panics
    ///
    /// Panics if either `nx` or `ny` is zero.
    pub fn new(nx: usize, ny: usize) -> Self {
        assert!(nx > 0, "nx must be positive, got {}", nx);
        assert!(ny > 0, "ny must be positive, got {}", ny);
        Self { nx, ny }
    }

    /// Same number of cells in both directions.
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Cells along x (columns).
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Cells along y (rows).
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Total number of cells.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.nx * self.ny
    }

    /// Row-major array shape `(ny, nx)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.ny, self.nx)
    }
}

impl fmt::Display for Resolution2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.nx, self.ny)
    }
}

impl From<(usize, usize)> for Resolution2D {
    /// Converts from `(nx, ny)`.
    fn from((nx, ny): (usize, usize)) -> Self {
        Self::new(nx, ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_is_row_major() {
        let r = Resolution2D::new(200, 100);
        assert_eq!(r.shape(), (100, 200));
    }

    #[test]
    fn test_square() {
        let r = Resolution2D::square(256);
        assert_eq!(r.nx(), 256);
        assert_eq!(r.ny(), 256);
        assert_eq!(r.total_cells(), 65536);
    }

    #[test]
    fn test_from_tuple() {
        let r: Resolution2D = (120, 80).into();
        assert_eq!(r.nx(), 120);
        assert_eq!(r.ny(), 80);
        assert_eq!(r.to_string(), "120×80");
    }

    #[test]
    #[should_panic(expected = "nx must be positive")]
    fn test_zero_nx() {
        Resolution2D::new(0, 10);
    }

    #[test]
    #[should_panic(expected = "ny must be positive")]
    fn test_zero_ny() {
        Resolution2D::new(10, 0);
    }
}
