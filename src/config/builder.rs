//! Builder API for acquisition configuration.

use crate::config::error::ConfigErrors;
use crate::config::AcquisitionConfig;
use crate::core::GeofenceRegion;
use crate::failure::Locale;

/// Builder for [`AcquisitionConfig`].
///
/// Starts from the defaults (Turkey, Turkish locale). `build` validates the
/// result.
pub struct ConfigBuilder {
    region: GeofenceRegion,
    locale: Locale,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            region: GeofenceRegion::default(),
            locale: Locale::default(),
        }
    }

    /// Replace the permitted region
    pub fn region(mut self, region: GeofenceRegion) -> Self {
        self.region = region;
        self
    }

    /// Set the region's name and latitude/longitude bounds
    pub fn bounds(
        mut self,
        name: impl Into<String>,
        latitude: (f64, f64),
        longitude: (f64, f64),
    ) -> Self {
        self.region = GeofenceRegion {
            name: name.into(),
            min_latitude: latitude.0,
            max_latitude: latitude.1,
            min_longitude: longitude.0,
            max_longitude: longitude.1,
        };
        self
    }

    /// Set the notice language
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<AcquisitionConfig, ConfigErrors> {
        AcquisitionConfig {
            region: self.region,
            locale: self.locale,
        }
        .validated()
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
