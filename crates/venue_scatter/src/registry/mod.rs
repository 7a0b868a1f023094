//! Static venue-name to anchor lookup.
//!
//! The scatter engine never guesses a venue: an unknown name must be resolved
//! to a fallback anchor here, on the caller side, before any scattering
//! happens. [`VenueRegistry::world_cup_2026`] ships the stadium set the demo
//! backend seeds its match schedule with.
use std::collections::HashMap;

use crate::geo::GeoPoint;

/// Mapping from venue name to anchor coordinate.
#[derive(Debug, Clone, Default)]
pub struct VenueRegistry {
    anchors: HashMap<String, GeoPoint>,
}

impl VenueRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            anchors: HashMap::new(),
        }
    }

    /// Adds a venue (builder-style).
    pub fn with_venue(mut self, name: impl Into<String>, anchor: GeoPoint) -> Self {
        self.anchors.insert(name.into(), anchor);
        self
    }

    /// Inserts a venue, replacing any existing anchor under the same name.
    pub fn insert(&mut self, name: impl Into<String>, anchor: GeoPoint) {
        self.anchors.insert(name.into(), anchor);
    }

    /// Looks up the anchor for a venue name.
    pub fn anchor_for(&self, name: &str) -> Option<GeoPoint> {
        self.anchors.get(name).copied()
    }

    /// Looks up the anchor for a venue name, resolving unknown names to `fallback`.
    pub fn anchor_or(&self, name: &str, fallback: GeoPoint) -> GeoPoint {
        self.anchor_for(name).unwrap_or(fallback)
    }

    /// Number of registered venues.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns true when no venues are registered.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Iterates over registered venue names and anchors.
    pub fn iter(&self) -> impl Iterator<Item = (&str, GeoPoint)> {
        self.anchors.iter().map(|(name, p)| (name.as_str(), *p))
    }

    /// The 2026 World Cup stadiums used by the demo match schedule.
    pub fn world_cup_2026() -> Self {
        Self::new()
            .with_venue("MetLife Stadium", GeoPoint::new(40.8128, -74.0742))
            .with_venue("SoFi Stadium", GeoPoint::new(33.9535, -118.3392))
            .with_venue("Soldier Field", GeoPoint::new(41.8623, -87.6167))
            .with_venue("AT&T Stadium", GeoPoint::new(32.7473, -97.0945))
            .with_venue("Mercedes-Benz Stadium", GeoPoint::new(33.7554, -84.4008))
            .with_venue("Hard Rock Stadium", GeoPoint::new(25.9580, -80.2389))
            .with_venue("Levi's Stadium", GeoPoint::new(37.4033, -121.9694))
            .with_venue("Lincoln Financial Field", GeoPoint::new(39.9008, -75.1675))
            .with_venue("Rose Bowl", GeoPoint::new(34.1613, -118.1676))
    }
}
