//! Zoom-level to query-radius mapping.
//!
//! A tap on a zoomed-out map is imprecise and should match a wide area; zoomed
//! in, it should match a tight spot. [`ZoomRadiusMap`] clamps the zoom into its
//! window and interpolates linearly from the maximum radius at the floor down
//! to the minimum radius at the ceiling.
use crate::error::{Error, Result};

/// Default radius at the zoom ceiling, in degrees.
pub const DEFAULT_MIN_RADIUS_DEG: f64 = 0.0008;

/// Default radius at the zoom floor, in degrees.
pub const DEFAULT_MAX_RADIUS_DEG: f64 = 0.012;

/// Default lower end of the zoom window.
pub const DEFAULT_ZOOM_FLOOR: i32 = 10;

/// Default upper end of the zoom window.
pub const DEFAULT_ZOOM_CEIL: i32 = 18;

/// Clamped inverse-linear mapping from map zoom level to query radius.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomRadiusMap {
    /// Radius returned at (and above) the zoom ceiling, in degrees.
    pub min_radius_deg: f64,
    /// Radius returned at (and below) the zoom floor, in degrees.
    pub max_radius_deg: f64,
    /// Zoom level at which the radius reaches its maximum.
    pub zoom_floor: i32,
    /// Zoom level at which the radius reaches its minimum.
    pub zoom_ceil: i32,
}

impl Default for ZoomRadiusMap {
    fn default() -> Self {
        Self {
            min_radius_deg: DEFAULT_MIN_RADIUS_DEG,
            max_radius_deg: DEFAULT_MAX_RADIUS_DEG,
            zoom_floor: DEFAULT_ZOOM_FLOOR,
            zoom_ceil: DEFAULT_ZOOM_CEIL,
        }
    }
}

impl ZoomRadiusMap {
    /// Creates a map with the default window and radii.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the radius returned at the zoom ceiling.
    pub fn with_min_radius_deg(mut self, min_radius_deg: f64) -> Self {
        self.min_radius_deg = min_radius_deg;
        self
    }

    /// Sets the radius returned at the zoom floor.
    pub fn with_max_radius_deg(mut self, max_radius_deg: f64) -> Self {
        self.max_radius_deg = max_radius_deg;
        self
    }

    /// Sets the zoom window.
    pub fn with_zoom_window(mut self, zoom_floor: i32, zoom_ceil: i32) -> Self {
        self.zoom_floor = zoom_floor;
        self.zoom_ceil = zoom_ceil;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.min_radius_deg.is_finite() || self.min_radius_deg <= 0.0 {
            return Err(Error::InvalidConfig("min_radius_deg must be > 0".into()));
        }
        if !self.max_radius_deg.is_finite() || self.max_radius_deg < self.min_radius_deg {
            return Err(Error::InvalidConfig(
                "max_radius_deg must be >= min_radius_deg".into(),
            ));
        }
        if self.zoom_floor >= self.zoom_ceil {
            return Err(Error::InvalidConfig(
                "zoom_floor must be below zoom_ceil".into(),
            ));
        }

        Ok(())
    }

    /// Maps a zoom level to a query radius in degrees.
    ///
    /// Monotonically non-increasing in `zoom`; values outside the window clamp
    /// to the window's edge radii.
    pub fn radius_for_zoom(&self, zoom: i32) -> f64 {
        let clamped = zoom.clamp(self.zoom_floor, self.zoom_ceil);
        let t = (clamped - self.zoom_floor) as f64 / (self.zoom_ceil - self.zoom_floor) as f64;
        self.max_radius_deg * (1.0 - t) + self.min_radius_deg * t
    }
}

/// Maps a zoom level to a query radius using the default [`ZoomRadiusMap`].
pub fn radius_for_zoom(zoom: i32) -> f64 {
    ZoomRadiusMap::default().radius_for_zoom(zoom)
}
