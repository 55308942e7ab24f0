//! Validation rules for acquisition configuration.
//!
//! All rules run on every validation and ALL violations are reported, not
//! just the first.

use crate::config::error::ConfigError;
use crate::core::GeofenceRegion;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigError>>;

fn ensure(ok: bool, error: impl FnOnce() -> ConfigError) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(error())
    }
}

fn latitude_bound(field: &'static str, value: f64) -> Check {
    if !value.is_finite() {
        return Validation::fail(ConfigError::NonFiniteBound { field });
    }
    ensure((-90.0..=90.0).contains(&value), || {
        ConfigError::LatitudeOutOfRange { field, value }
    })
}

fn longitude_bound(field: &'static str, value: f64) -> Check {
    if !value.is_finite() {
        return Validation::fail(ConfigError::NonFiniteBound { field });
    }
    ensure((-180.0..=180.0).contains(&value), || {
        ConfigError::LongitudeOutOfRange { field, value }
    })
}

fn ordered(axis: &'static str, min: f64, max: f64) -> Check {
    // NaN bounds are reported as non-finite instead.
    let comparable = min.is_finite() && max.is_finite();
    ensure(!comparable || min <= max, || ConfigError::InvertedBounds {
        axis,
        min,
        max,
    })
}

/// Validate a geofence region, accumulating every violation.
pub fn validate_region(region: &GeofenceRegion) -> Validation<(), NonEmptyVec<ConfigError>> {
    let checks = vec![
        ensure(!region.name.trim().is_empty(), || {
            ConfigError::EmptyRegionName
        }),
        latitude_bound("min_latitude", region.min_latitude),
        latitude_bound("max_latitude", region.max_latitude),
        longitude_bound("min_longitude", region.min_longitude),
        longitude_bound("max_longitude", region.max_longitude),
        ordered("latitude", region.min_latitude, region.max_latitude),
        ordered("longitude", region.min_longitude, region.max_longitude),
    ];

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_region_is_valid() {
        assert!(validate_region(&GeofenceRegion::turkey()).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let region = GeofenceRegion {
            name: "  ".to_string(),
            min_latitude: 95.0,
            max_latitude: 10.0,
            min_longitude: f64::NAN,
            max_longitude: 200.0,
        };

        match validate_region(&region) {
            Validation::Failure(errors) => {
                let errors: Vec<_> = errors.iter().cloned().collect();
                assert!(errors.contains(&ConfigError::EmptyRegionName));
                assert!(errors.contains(&ConfigError::LatitudeOutOfRange {
                    field: "min_latitude",
                    value: 95.0
                }));
                assert!(errors.contains(&ConfigError::NonFiniteBound {
                    field: "min_longitude"
                }));
                assert!(errors.contains(&ConfigError::LongitudeOutOfRange {
                    field: "max_longitude",
                    value: 200.0
                }));
                assert!(errors.contains(&ConfigError::InvertedBounds {
                    axis: "latitude",
                    min: 95.0,
                    max: 10.0
                }));
                assert_eq!(errors.len(), 5);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn inverted_longitude_is_reported() {
        let region = GeofenceRegion {
            min_longitude: 44.0,
            max_longitude: 26.0,
            ..GeofenceRegion::turkey()
        };

        let result = validate_region(&region);
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| matches!(e, ConfigError::InvertedBounds { axis: "longitude", .. })));
        }
    }

    #[test]
    fn degenerate_point_region_is_valid() {
        let region = GeofenceRegion {
            name: "point".to_string(),
            min_latitude: 39.0,
            max_latitude: 39.0,
            min_longitude: 35.0,
            max_longitude: 35.0,
        };

        assert!(validate_region(&region).is_success());
    }
}
