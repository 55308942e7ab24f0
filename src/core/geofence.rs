//! Geofence predicates.
//!
//! A geofence is a pure predicate over [`Coordinate`]s. It is evaluated after
//! the provider succeeds and before a location is accepted.

use super::state::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Rectangular latitude/longitude region, bounds inclusive.
///
/// The default region is an approximate bounding box around Turkey.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeofenceRegion {
    /// Human-readable name used in logs
    pub name: String,
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl GeofenceRegion {
    /// Approximate bounding box of Turkey.
    pub fn turkey() -> Self {
        Self {
            name: "Turkey".to_string(),
            min_latitude: 35.81,
            max_latitude: 42.11,
            min_longitude: 25.66,
            max_longitude: 44.83,
        }
    }

    /// Inclusive bounds check. Non-finite coordinates are never contained.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.is_finite()
            && (self.min_latitude..=self.max_latitude).contains(&coordinate.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&coordinate.longitude)
    }
}

impl Default for GeofenceRegion {
    fn default() -> Self {
        Self::turkey()
    }
}

/// Pure predicate deciding whether a coordinate is inside the permitted
/// region.
///
/// # Example
///
/// ```rust
/// use locgate::core::{Coordinate, Geofence, GeofenceRegion};
///
/// let geofence = Geofence::from_region(GeofenceRegion::turkey());
///
/// assert!(geofence.check(&Coordinate::new(39.0, 35.0)));
/// assert!(!geofence.check(&Coordinate::new(48.8, 2.3)));
/// ```
#[derive(Clone)]
pub struct Geofence {
    predicate: Arc<dyn Fn(&Coordinate) -> bool + Send + Sync>,
    label: String,
}

impl Geofence {
    /// Create a geofence from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    ///
    /// ```rust
    /// use locgate::core::{Coordinate, Geofence};
    ///
    /// let northern = Geofence::new("northern hemisphere", |c: &Coordinate| c.latitude >= 0.0);
    /// assert!(northern.check(&Coordinate::new(10.0, 0.0)));
    /// assert!(!northern.check(&Coordinate::new(-10.0, 0.0)));
    /// ```
    pub fn new<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Coordinate) -> bool + Send + Sync + 'static,
    {
        Geofence {
            predicate: Arc::new(predicate),
            label: label.into(),
        }
    }

    pub fn from_region(region: GeofenceRegion) -> Self {
        let label = region.name.clone();
        Self::new(label, move |c: &Coordinate| region.contains(c))
    }

    pub fn check(&self, coordinate: &Coordinate) -> bool {
        (self.predicate)(coordinate)
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for Geofence {
    fn default() -> Self {
        Self::from_region(GeofenceRegion::default())
    }
}

impl fmt::Debug for Geofence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Geofence")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Convenience check against the default Turkey region.
pub fn is_in_turkey(coordinate: &Coordinate) -> bool {
    GeofenceRegion::turkey().contains(coordinate)
}
