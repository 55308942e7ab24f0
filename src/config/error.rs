//! Configuration error types.

use std::fmt;
use thiserror::Error;

/// A single configuration rule violation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Region name must not be empty")]
    EmptyRegionName,

    #[error("Bound '{field}' is not a finite number")]
    NonFiniteBound { field: &'static str },

    #[error("Latitude bound '{field}' ({value}) outside [-90, 90]")]
    LatitudeOutOfRange { field: &'static str, value: f64 },

    #[error("Longitude bound '{field}' ({value}) outside [-180, 180]")]
    LongitudeOutOfRange { field: &'static str, value: f64 },

    #[error("Inverted {axis} bounds: min {min} > max {max}")]
    InvertedBounds { axis: &'static str, min: f64, max: f64 },
}

/// Every violation found while validating a configuration.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigErrors(pub(crate) Vec<ConfigError>);

impl ConfigErrors {
    pub fn errors(&self) -> &[ConfigError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: ")?;
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

/// Errors that can occur when loading a configuration document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigErrors),
}
