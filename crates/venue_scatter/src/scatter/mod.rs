//! Deterministic scattering of synthetic points around a venue anchor.
//!
//! [`scatter_points`] places `count` points in an annulus around an anchor
//! coordinate. Every point draws its polar angle and radial distance from its
//! own seeded random stream, so a batch is a pure function of
//! `(anchor, count, config)` and reproduces bit-identically across calls.
use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::{offset_by_meters, GeoPoint};
use crate::scatter::seed::{rand01, seed_for_index};

pub mod seed;

/// Default scatter radius around the anchor, in meters.
pub const DEFAULT_RADIUS_M: f64 = 500.0;

/// Default minimum distance from the anchor, in meters.
///
/// Keeps points off the anchor itself so markers never stack at the center.
pub const DEFAULT_MIN_RADIUS_M: f64 = 30.0;

/// Default base seed for the per-point draw streams.
pub const DEFAULT_BASE_SEED: u64 = 2026;

/// A scattered point: a coordinate, a batch-local identifier, and an opaque
/// payload reference carried through untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScatteredPoint<P> {
    /// Stable identifier, equal to the point's index within its batch.
    pub id: u32,
    /// Position of the point.
    pub position: GeoPoint,
    /// Payload reference, `None` when the batch was scattered without payloads.
    pub payload: Option<P>,
}

/// Configuration for scattering a batch of points.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScatterConfig {
    /// Maximum distance from the anchor in meters.
    pub radius_m: f64,
    /// Minimum distance from the anchor in meters.
    pub min_radius_m: f64,
    /// Base seed for the per-point draw streams.
    pub seed: u64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
            min_radius_m: DEFAULT_MIN_RADIUS_M,
            seed: DEFAULT_BASE_SEED,
        }
    }
}

impl ScatterConfig {
    /// Creates a new [`ScatterConfig`] with the specified radius in meters.
    pub fn new(radius_m: f64) -> Self {
        Self {
            radius_m,
            ..Default::default()
        }
    }

    /// Sets the maximum scatter radius in meters.
    pub fn with_radius_m(mut self, radius_m: f64) -> Self {
        self.radius_m = radius_m;
        self
    }

    /// Sets the minimum distance from the anchor in meters.
    pub fn with_min_radius_m(mut self, min_radius_m: f64) -> Self {
        self.min_radius_m = min_radius_m;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.radius_m.is_finite() || self.radius_m <= 0.0 {
            return Err(Error::InvalidConfig("radius_m must be > 0".into()));
        }
        if !self.min_radius_m.is_finite() || self.min_radius_m <= 0.0 {
            return Err(Error::InvalidConfig("min_radius_m must be > 0".into()));
        }
        if self.min_radius_m > self.radius_m {
            return Err(Error::InvalidConfig(
                "min_radius_m must not exceed radius_m".into(),
            ));
        }

        Ok(())
    }
}

/// Scatters `count` points around `anchor` within the configured annulus.
///
/// Payloads are assigned round-robin from `payloads`; an empty slice yields
/// points with no payload. The result is ordered by point id and is a pure
/// function of the arguments.
pub fn scatter_points<P: Clone>(
    anchor: GeoPoint,
    count: usize,
    config: &ScatterConfig,
    payloads: &[P],
) -> Result<Vec<ScatteredPoint<P>>> {
    config.validate()?;

    if !anchor.is_finite() {
        return Err(Error::InvalidArgument("anchor must be finite".into()));
    }
    if anchor.lat.abs() >= 90.0 {
        // The longitude correction divides by cos(lat) and diverges at the poles.
        return Err(Error::InvalidArgument(
            "anchor latitude must be within (-90, 90)".into(),
        ));
    }

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let stream = 2 * i as u64;
        let mut angle_rng = StdRng::seed_from_u64(seed_for_index(config.seed, stream));
        let mut dist_rng = StdRng::seed_from_u64(seed_for_index(config.seed, stream + 1));

        let angle = TAU * rand01(&mut angle_rng);
        let distance =
            config.min_radius_m + (config.radius_m - config.min_radius_m) * rand01(&mut dist_rng);

        let north = distance * angle.cos();
        let east = distance * angle.sin();

        out.push(ScatteredPoint {
            id: i as u32,
            position: offset_by_meters(anchor, north, east),
            payload: if payloads.is_empty() {
                None
            } else {
                Some(payloads[i % payloads.len()].clone())
            },
        });
    }

    debug!(
        count,
        radius_m = config.radius_m,
        seed = config.seed,
        "scattered point batch"
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{deg_per_meter_lng, METERS_PER_DEG_LAT};

    const EMIRATES: GeoPoint = GeoPoint {
        lat: 51.5550,
        lng: -0.1084,
    };

    fn metric_distance(anchor: GeoPoint, p: GeoPoint) -> f64 {
        let north = (p.lat - anchor.lat) * METERS_PER_DEG_LAT;
        let east = (p.lng - anchor.lng) / deg_per_meter_lng(anchor.lat);
        (north * north + east * east).sqrt()
    }

    #[test]
    fn returns_exactly_count_points_with_sequential_ids() {
        let batch =
            scatter_points::<String>(EMIRATES, 25, &ScatterConfig::default(), &[]).unwrap();
        assert_eq!(batch.len(), 25);
        for (i, p) in batch.iter().enumerate() {
            assert_eq!(p.id, i as u32);
        }
    }

    #[test]
    fn zero_count_yields_empty_batch() {
        let batch = scatter_points::<String>(EMIRATES, 0, &ScatterConfig::default(), &[]).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn points_stay_within_the_configured_annulus() {
        let config = ScatterConfig::default();
        let batch = scatter_points::<String>(EMIRATES, 200, &config, &[]).unwrap();

        for p in &batch {
            let d = metric_distance(EMIRATES, p.position);
            assert!(
                d >= config.min_radius_m - 1e-6 && d <= config.radius_m + 1e-6,
                "point {} at {d} m is outside [{}, {}]",
                p.id,
                config.min_radius_m,
                config.radius_m
            );
        }
    }

    #[test]
    fn identical_inputs_reproduce_bit_identical_batches() {
        let config = ScatterConfig::default().with_seed(7);
        let payloads = vec!["a".to_string(), "b".to_string()];

        let first = scatter_points(EMIRATES, 50, &config, &payloads).unwrap();
        let second = scatter_points(EMIRATES, 50, &config, &payloads).unwrap();
        assert_eq!(first, second);

        let other_seed = scatter_points(EMIRATES, 50, &config.clone().with_seed(8), &payloads);
        assert_ne!(first, other_seed.unwrap());
    }

    #[test]
    fn payloads_are_assigned_round_robin() {
        let payloads = vec!["x", "y", "z"];
        let batch = scatter_points(EMIRATES, 7, &ScatterConfig::default(), &payloads).unwrap();

        assert_eq!(batch[0].payload, Some("x"));
        assert_eq!(batch[1].payload, Some("y"));
        assert_eq!(batch[2].payload, Some("z"));
        assert_eq!(batch[3].payload, Some("x"));
        assert_eq!(batch[6].payload, Some("x"));
    }

    #[test]
    fn empty_payload_list_leaves_points_bare() {
        let batch = scatter_points::<&str>(EMIRATES, 3, &ScatterConfig::default(), &[]).unwrap();
        assert!(batch.iter().all(|p| p.payload.is_none()));
    }

    #[test]
    fn rejects_non_finite_and_polar_anchors() {
        let config = ScatterConfig::default();

        let nan = scatter_points::<&str>(GeoPoint::new(f64::NAN, 0.0), 1, &config, &[]);
        assert!(matches!(nan, Err(Error::InvalidArgument(_))));

        let pole = scatter_points::<&str>(GeoPoint::new(90.0, 0.0), 1, &config, &[]);
        assert!(matches!(pole, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn rejects_invalid_configurations() {
        let zero_radius = ScatterConfig::default().with_radius_m(0.0);
        assert!(matches!(
            zero_radius.validate(),
            Err(Error::InvalidConfig(_))
        ));

        let negative_floor = ScatterConfig::default().with_min_radius_m(-1.0);
        assert!(matches!(
            negative_floor.validate(),
            Err(Error::InvalidConfig(_))
        ));

        let floor_above_radius = ScatterConfig::new(100.0).with_min_radius_m(200.0);
        assert!(matches!(
            floor_above_radius.validate(),
            Err(Error::InvalidConfig(_))
        ));

        let inverted = scatter_points::<&str>(EMIRATES, 1, &floor_above_radius, &[]);
        assert!(inverted.is_err());
    }

    #[test]
    fn emirates_batch_stays_within_per_axis_degree_bounds() {
        // 500 m is ~0.0045 deg of latitude; longitude widens by 1/cos(51.555 deg).
        let batch = scatter_points::<&str>(EMIRATES, 20, &ScatterConfig::default(), &[]).unwrap();
        assert_eq!(batch.len(), 20);

        for p in &batch {
            assert!((p.position.lat - EMIRATES.lat).abs() <= 0.0045);
            assert!((p.position.lng - EMIRATES.lng).abs() <= 0.0072);
        }

        let again = scatter_points::<&str>(EMIRATES, 20, &ScatterConfig::default(), &[]).unwrap();
        assert_eq!(batch, again);
    }
}
