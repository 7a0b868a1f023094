//! Geographic coordinate model and flat-earth conversion helpers.
//!
//! Coordinates are WGS84-like latitude/longitude pairs in degrees. All
//! conversions use a local flat-earth approximation: one degree of latitude is
//! treated as a fixed [`METERS_PER_DEG_LAT`] meters and one degree of longitude
//! shrinks with the cosine of the latitude. The approximation holds for offsets
//! of a few hundred meters, which covers every radius this crate works with.
use glam::DVec2;

/// Meters spanned by one degree of latitude.
pub const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new point from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<GeoPoint> for DVec2 {
    fn from(p: GeoPoint) -> Self {
        DVec2::new(p.lng, p.lat)
    }
}

impl From<DVec2> for GeoPoint {
    fn from(v: DVec2) -> Self {
        GeoPoint::new(v.y, v.x)
    }
}

impl From<GeoPoint> for mint::Point2<f64> {
    fn from(p: GeoPoint) -> Self {
        mint::Point2 { x: p.lng, y: p.lat }
    }
}

impl From<mint::Point2<f64>> for GeoPoint {
    fn from(p: mint::Point2<f64>) -> Self {
        GeoPoint::new(p.y, p.x)
    }
}

/// Degrees of latitude per meter.
#[inline]
pub fn deg_per_meter_lat() -> f64 {
    1.0 / METERS_PER_DEG_LAT
}

/// Degrees of longitude per meter at the given latitude.
///
/// Diverges toward the poles where the cosine vanishes; callers reject
/// latitudes at or beyond +/-90 degrees before converting.
#[inline]
pub fn deg_per_meter_lng(lat_deg: f64) -> f64 {
    1.0 / (METERS_PER_DEG_LAT * lat_deg.to_radians().cos())
}

/// Offsets `anchor` by a metric north/east displacement, returning the shifted point.
pub fn offset_by_meters(anchor: GeoPoint, north_m: f64, east_m: f64) -> GeoPoint {
    GeoPoint::new(
        anchor.lat + north_m * deg_per_meter_lat(),
        anchor.lng + east_m * deg_per_meter_lng(anchor.lat),
    )
}

/// Planar Euclidean distance between two points in degrees.
///
/// No latitude correction is applied to the longitude axis; at the small radii
/// this crate queries with, the resulting error is negligible.
pub fn planar_distance_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    DVec2::from(a).distance(DVec2::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_check_rejects_nan_and_infinity() {
        assert!(GeoPoint::new(51.5, -0.1).is_finite());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn latitude_offset_is_latitude_independent() {
        let equator = offset_by_meters(GeoPoint::new(0.0, 0.0), METERS_PER_DEG_LAT, 0.0);
        let north = offset_by_meters(GeoPoint::new(60.0, 10.0), METERS_PER_DEG_LAT, 0.0);

        assert!((equator.lat - 1.0).abs() < 1e-12);
        assert!((north.lat - 61.0).abs() < 1e-12);
        assert_eq!(north.lng, 10.0);
    }

    #[test]
    fn longitude_offset_widens_with_latitude() {
        let at_equator = offset_by_meters(GeoPoint::new(0.0, 0.0), 0.0, 1000.0);
        let at_60 = offset_by_meters(GeoPoint::new(60.0, 0.0), 0.0, 1000.0);

        // cos(60 deg) = 0.5, so the same metric offset spans twice the degrees.
        let ratio = at_60.lng / at_equator.lng;
        assert!((ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn planar_distance_matches_pythagoras() {
        let a = GeoPoint::new(1.0, 2.0);
        let b = GeoPoint::new(4.0, 6.0);
        assert!((planar_distance_deg(a, b) - 5.0).abs() < 1e-12);
        assert_eq!(planar_distance_deg(a, a), 0.0);
    }

    #[test]
    fn conversions_round_trip() {
        let p = GeoPoint::new(51.5550, -0.1084);

        let v: DVec2 = p.into();
        assert_eq!(v, DVec2::new(-0.1084, 51.5550));
        assert_eq!(GeoPoint::from(v), p);

        let m: mint::Point2<f64> = p.into();
        assert_eq!(m.x, -0.1084);
        assert_eq!(m.y, 51.5550);
        assert_eq!(GeoPoint::from(m), p);
    }
}
