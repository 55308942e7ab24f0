//! Acquisition configuration.
//!
//! Configuration is deliberately small: the permitted region and the notice
//! language. It can be built in code with [`ConfigBuilder`] or loaded from
//! JSON; both paths run the same validation, which reports every violation
//! at once.
//!
//! # Example
//!
//! ```rust
//! use locgate::config::{AcquisitionConfig, ConfigBuilder};
//! use locgate::failure::Locale;
//!
//! let config = ConfigBuilder::new().locale(Locale::English).build().unwrap();
//! assert_eq!(config.region.name, "Turkey");
//!
//! let loaded = AcquisitionConfig::from_json(
//!     r#"{"region": {"name": "Turkey", "min_latitude": 35.81, "max_latitude": 42.11,
//!         "min_longitude": 25.66, "max_longitude": 44.83}, "locale": "en"}"#,
//! )
//! .unwrap();
//! assert_eq!(loaded, config);
//! ```

pub mod builder;
pub mod error;
pub mod rules;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigErrors, LoadError};

use crate::core::{Geofence, GeofenceRegion};
use crate::failure::Locale;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Settings for an [`AcquisitionMachine`](crate::machine::AcquisitionMachine).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    /// Region a location must fall inside to be confirmed
    #[serde(default)]
    pub region: GeofenceRegion,
    /// Language for user-facing notices
    #[serde(default)]
    pub locale: Locale,
}

impl AcquisitionConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(input: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_str(input)?;
        Ok(config.validated()?)
    }

    /// Run every validation rule over this configuration.
    pub fn validated(self) -> Result<Self, ConfigErrors> {
        match rules::validate_region(&self.region) {
            Validation::Success(()) => Ok(self),
            Validation::Failure(errors) => Err(ConfigErrors(errors.iter().cloned().collect())),
        }
    }

    pub fn geofence(&self) -> Geofence {
        Geofence::from_region(self.region.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = AcquisitionConfig::from_json("{}").unwrap();
        assert_eq!(config, AcquisitionConfig::default());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = AcquisitionConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn invalid_document_reports_violations() {
        let err = AcquisitionConfig::from_json(
            r#"{"region": {"name": "", "min_latitude": 0, "max_latitude": 1,
                "min_longitude": 0, "max_longitude": 1}}"#,
        )
        .unwrap_err();

        match err {
            LoadError::Invalid(errors) => {
                assert_eq!(errors.errors(), &[ConfigError::EmptyRegionName]);
                assert_eq!(
                    errors.to_string(),
                    "invalid configuration: Region name must not be empty"
                );
            }
            other => panic!("Expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn geofence_follows_region() {
        let config = AcquisitionConfig::builder()
            .bounds("unit square", (0.0, 1.0), (0.0, 1.0))
            .build()
            .unwrap();

        let geofence = config.geofence();
        assert_eq!(geofence.label(), "unit square");
        assert!(geofence.check(&crate::core::Coordinate::new(0.5, 0.5)));
        assert!(!geofence.check(&crate::core::Coordinate::new(39.0, 35.0)));
    }
}
