//! Circular island geometry.

/// Radial profile of an island's flank.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IslandProfile {
    /// Vertical wall: dry land for `r < R`, full depth outside.
    HardWall,
    /// Dry core plus a linear ramp to full depth over `slope_width`.
    SlopedRim { slope_width: f64 },
    /// Like [`IslandProfile::SlopedRim`], but the core holds `elevation`
    /// instead of 0 and the ramp runs from full depth to that value.
    Elevated { slope_width: f64, elevation: f64 },
}

/// A circular island.
///
/// # Example
///
/// ```
/// use eddy_island::bathymetry::Island;
///
/// let island = Island::sloped(300e3, 250e3, 50e3, 30e3);
///
/// assert_eq!(island.land_weight(300e3, 250e3), 1.0);  // core
/// assert_eq!(island.land_weight(300e3, 315e3), 0.5);  // mid-slope
/// assert_eq!(island.land_weight(300e3, 400e3), 0.0);  // open ocean
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Island {
    /// Center x (m)
    pub x: f64,
    /// Center y (m)
    pub y: f64,
    /// Core radius R (m)
    pub radius: f64,
    /// Flank shape
    pub profile: IslandProfile,
}

impl Island {
    /// # Panics
    ///
    /// Panics if `radius` is not positive and finite.
    pub fn hard_wall(x: f64, y: f64, radius: f64) -> Self {
        Self::with_profile(x, y, radius, IslandProfile::HardWall)
    }

    /// # Panics
    ///
    /// Panics if `radius` is not positive or `slope_width` is negative.
    pub fn sloped(x: f64, y: f64, radius: f64, slope_width: f64) -> Self {
        Self::with_profile(x, y, radius, IslandProfile::SlopedRim { slope_width })
    }

    /// # Panics
    ///
    /// Panics if `radius` is not positive, `slope_width` is negative, or
    /// `elevation` is negative.
    pub fn elevated(x: f64, y: f64, radius: f64, slope_width: f64, elevation: f64) -> Self {
        assert!(
            elevation.is_finite() && elevation >= 0.0,
            "elevation must be non-negative, got {}",
            elevation
        );
        Self::with_profile(
            x,
            y,
            radius,
            IslandProfile::Elevated {
                slope_width,
                elevation,
            },
        )
    }

    fn with_profile(x: f64, y: f64, radius: f64, profile: IslandProfile) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "island radius must be positive, got {}",
            radius
        );
        let island = Self {
            x,
            y,
            radius,
            profile,
        };
        let w = island.slope_width();
        assert!(
            w.is_finite() && w >= 0.0,
            "slope width must be non-negative, got {}",
            w
        );
        island
    }

    /// Width of the ramp band (0 for a hard wall).
    pub fn slope_width(&self) -> f64 {
        match self.profile {
            IslandProfile::HardWall => 0.0,
            IslandProfile::SlopedRim { slope_width }
            | IslandProfile::Elevated { slope_width, .. } => slope_width,
        }
    }

    /// Value written on the island core: 0 for dry islands, the elevation
    /// for elevated ones.
    pub fn land_value(&self) -> f64 {
        match self.profile {
            IslandProfile::Elevated { elevation, .. } => elevation,
            _ => 0.0,
        }
    }

    /// Radius beyond which the island has no influence.
    pub fn outer_radius(&self) -> f64 {
        self.radius + self.slope_width()
    }

    #[inline]
    pub fn distance(&self, x: f64, y: f64) -> f64 {
        (x - self.x).hypot(y - self.y)
    }

    /// Land weight in [0, 1] at a point.
    ///
    /// 1 inside the core (`r < R`), `min(1, (R + w - r) / w)` on the ramp
    /// `R <= r < R + w`, 0 beyond. The weight is non-increasing in `r`.
    pub fn land_weight(&self, x: f64, y: f64) -> f64 {
        let r = self.distance(x, y);
        if r < self.radius {
            return 1.0;
        }
        let w = self.slope_width();
        if w <= 0.0 || r >= self.radius + w {
            return 0.0;
        }
        ((self.radius + w - r) / w).min(1.0)
    }
}
