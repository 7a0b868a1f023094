//! Heat-layer weight normalization.
//!
//! Map heat layers want intensities in `[0, 1]`. [`normalize_heat`] divides
//! each weight by the batch maximum, floored at 1.0 so sparse all-light batches
//! are not inflated to full intensity.
use crate::geo::GeoPoint;
use crate::scatter::ScatteredPoint;

/// A weighted coordinate feeding a heat layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatPoint {
    /// Position of the sample.
    pub position: GeoPoint,
    /// Raw weight, any non-negative magnitude.
    pub weight: f64,
}

impl HeatPoint {
    /// Creates a weighted heat point.
    pub fn new(position: GeoPoint, weight: f64) -> Self {
        Self { position, weight }
    }

    /// Creates a heat point with unit weight.
    pub fn unit(position: GeoPoint) -> Self {
        Self::new(position, 1.0)
    }
}

/// A normalized heat sample ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatSample {
    /// Position of the sample.
    pub position: GeoPoint,
    /// Intensity in `[0, 1]`.
    pub intensity: f64,
}

/// Normalizes weights into intensities by dividing by the maximum weight,
/// floored at 1.0. Order is preserved.
pub fn normalize_heat(points: &[HeatPoint]) -> Vec<HeatSample> {
    let max_weight = points.iter().map(|p| p.weight).fold(1.0_f64, f64::max);

    points
        .iter()
        .map(|p| HeatSample {
            position: p.position,
            intensity: p.weight / max_weight,
        })
        .collect()
}

/// Unit-weight heat points from a scattered batch.
pub fn heat_points_from_scatter<P>(points: &[ScatteredPoint<P>]) -> Vec<HeatPoint> {
    points.iter().map(|p| HeatPoint::unit(p.position)).collect()
}
