#![forbid(unsafe_code)]
//! venue_scatter: Deterministic geo scattering and radius queries around venue anchors.
//!
//! Modules:
//! - geo: coordinate model and flat-earth conversions
//! - scatter: seeded point scattering within an annulus around an anchor
//! - query: zoom-to-radius mapping and radius-bounded filtering
//! - cache: per-venue batch memoization
//! - registry: venue-name to anchor lookup
//! - heat: heat-layer weight normalization
//!
//! For examples and docs, see README and docs.rs.
pub mod cache;
pub mod error;
pub mod geo;
pub mod heat;
pub mod query;
pub mod registry;
pub mod scatter;

/// Convenient re-exports for common types. Import with `use venue_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::cache::VenueScatterCache;
    pub use crate::error::{Error, Result};
    pub use crate::geo::{
        deg_per_meter_lat, deg_per_meter_lng, offset_by_meters, planar_distance_deg, GeoPoint,
        METERS_PER_DEG_LAT,
    };
    pub use crate::heat::{heat_points_from_scatter, normalize_heat, HeatPoint, HeatSample};
    pub use crate::query::zoom::{radius_for_zoom, ZoomRadiusMap};
    pub use crate::query::{points_within_radius, QueryCircle};
    pub use crate::registry::VenueRegistry;
    pub use crate::scatter::seed::seed_for_index;
    pub use crate::scatter::{scatter_points, ScatterConfig, ScatteredPoint};
}
