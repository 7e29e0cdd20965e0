#![forbid(unsafe_code)]

//! Environment configuration.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `VLIST_ITEM_HEIGHT` | Row height | `30` |
//! | `VLIST_CONTAINER_HEIGHT` | Viewport height | `300` |
//!
//! Lookups go through an injectable `get_env` closure so tests never touch
//! the process environment.

use crate::error::ConfigError;
use crate::geometry::ViewportGeometry;

/// Environment variable for the row height.
pub const ENV_ITEM_HEIGHT: &str = "VLIST_ITEM_HEIGHT";
/// Environment variable for the viewport height.
pub const ENV_CONTAINER_HEIGHT: &str = "VLIST_CONTAINER_HEIGHT";

const DEFAULT_ITEM_HEIGHT: f64 = 30.0;
const DEFAULT_CONTAINER_HEIGHT: f64 = 300.0;

/// Unvalidated viewport parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    /// Row height.
    pub item_height: f64,
    /// Viewport height.
    pub container_height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            container_height: DEFAULT_CONTAINER_HEIGHT,
        }
    }
}

impl ViewportConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ViewportConfig::from_env_with`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load using a custom environment lookup.
    ///
    /// Unset or blank variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] when a variable is set to
    /// something that does not parse as a number.
    pub fn from_env_with<F>(get_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = read_number(&get_env, ENV_ITEM_HEIGHT)? {
            config.item_height = value;
        }
        if let Some(value) = read_number(&get_env, ENV_CONTAINER_HEIGHT)? {
            config.container_height = value;
        }
        Ok(config)
    }

    /// Validate into a [`ViewportGeometry`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Geometry`] when [`ViewportGeometry::new`]
    /// rejects the configured heights.
    pub fn geometry(&self) -> Result<ViewportGeometry, ConfigError> {
        Ok(ViewportGeometry::new(self.item_height, self.container_height)?)
    }
}

/// Parse a numeric flag or variable value.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidNumber`] naming `key` on failure.
pub fn parse_number(key: &str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: raw.to_string(),
        })
}

fn read_number<F>(get_env: &F, key: &str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get_env(key) {
        Some(raw) if !raw.trim().is_empty() => parse_number(key, &raw).map(Some),
        _ => Ok(None),
    }
}
