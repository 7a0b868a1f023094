//! Radius-bounded spatial queries over scattered point batches.
//!
//! A user click plus the current zoom level becomes a transient [`QueryCircle`];
//! [`points_within_radius`] filters a batch against it. Distances are planar
//! Euclidean degrees with no latitude correction, matching the small-radius
//! simplification the rest of the crate queries with.
use crate::error::{Error, Result};
use crate::geo::{planar_distance_deg, GeoPoint};
use crate::query::zoom::ZoomRadiusMap;
use crate::scatter::ScatteredPoint;

pub mod zoom;

/// A transient center-plus-radius pair derived from a user interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryCircle {
    /// Center of the query, usually the clicked coordinate.
    pub center: GeoPoint,
    /// Query radius in degrees.
    pub radius_deg: f64,
}

impl QueryCircle {
    /// Creates a query circle, validating the center and radius.
    pub fn new(center: GeoPoint, radius_deg: f64) -> Result<Self> {
        if !center.is_finite() {
            return Err(Error::InvalidArgument("center must be finite".into()));
        }
        if !radius_deg.is_finite() || radius_deg <= 0.0 {
            return Err(Error::InvalidArgument("radius_deg must be > 0".into()));
        }

        Ok(Self { center, radius_deg })
    }

    /// Derives a query circle from a clicked coordinate and the current zoom level.
    pub fn from_click(center: GeoPoint, zoom: i32, map: &ZoomRadiusMap) -> Result<Self> {
        map.validate()?;
        Self::new(center, map.radius_for_zoom(zoom))
    }

    /// Returns true when `point` lies within the circle, boundary included.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        planar_distance_deg(self.center, *point) <= self.radius_deg
    }
}

/// Returns the subset of `points` within `radius_deg` of `center`.
///
/// Input order is preserved; empty input or no matches yield an empty vec.
pub fn points_within_radius<P: Clone>(
    center: GeoPoint,
    radius_deg: f64,
    points: &[ScatteredPoint<P>],
) -> Result<Vec<ScatteredPoint<P>>> {
    let circle = QueryCircle::new(center, radius_deg)?;

    Ok(points
        .iter()
        .filter(|p| circle.contains(&p.position))
        .cloned()
        .collect())
}
