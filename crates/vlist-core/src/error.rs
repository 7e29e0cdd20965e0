#![forbid(unsafe_code)]

//! Error types for geometry validation and configuration loading.

use std::fmt;

/// Invalid viewport geometry.
///
/// Produced by [`ViewportGeometry::new`](crate::geometry::ViewportGeometry::new)
/// when the caller supplies a configuration the window calculation has no
/// defined behavior for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Item height is NaN or infinite.
    NonFiniteItemHeight(f64),
    /// Item height is zero or negative.
    NonPositiveItemHeight(f64),
    /// Container height is NaN or infinite.
    NonFiniteContainerHeight(f64),
    /// Container height is negative.
    NegativeContainerHeight(f64),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteItemHeight(h) => write!(f, "item height must be finite (got {h})"),
            Self::NonPositiveItemHeight(h) => write!(f, "item height must be > 0 (got {h})"),
            Self::NonFiniteContainerHeight(h) => {
                write!(f, "container height must be finite (got {h})")
            }
            Self::NegativeContainerHeight(h) => {
                write!(f, "container height must be >= 0 (got {h})")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Errors from loading configuration out of the environment or CLI.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A variable or flag held a value that is not a number.
    InvalidNumber {
        /// Variable or flag name.
        key: String,
        /// The offending raw value.
        value: String,
    },
    /// The parsed numbers do not form a valid geometry.
    Geometry(GeometryError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "{key}: expected a number, got {value:?}")
            }
            Self::Geometry(err) => write!(f, "invalid geometry: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            Self::InvalidNumber { .. } => None,
        }
    }
}

impl From<GeometryError> for ConfigError {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}
