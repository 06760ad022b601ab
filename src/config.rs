//! # Configuration Module
//!
//! Streaming configuration and its validation. Invalid values are rejected
//! when the configuration is constructed or loaded, never at tick time,
//! where a non-positive chunk size would poison every coordinate division.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The default chunk edge length in world-block units.
pub const DEFAULT_CHUNK_SIZE: i32 = 16;

/// The default render radius in world-block units (not chunks).
pub const DEFAULT_RENDER_RADIUS: i32 = 2;

/// Configuration for the chunk stream manager.
///
/// A `StreamConfig` obtained through [`StreamConfig::new`],
/// [`StreamConfig::from_json`] or `Default` always satisfies the
/// configuration invariants; deserializing through serde directly bypasses
/// them, so such values must pass through [`StreamConfig::validate`] before
/// use.
///
/// # Examples
///
/// ```
/// use voxel_world::StreamConfig;
///
/// let config = StreamConfig::new(16, 2).expect("valid configuration");
/// assert_eq!(config, StreamConfig::default());
///
/// assert!(StreamConfig::new(0, 2).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// The chunk edge length in world-block units. Must be positive.
    pub chunk_size: i32,

    /// The render radius in world-block units. Must be non-negative.
    pub render_radius: i32,
}

impl StreamConfig {
    /// Creates a validated configuration.
    ///
    /// # Arguments
    /// * `chunk_size` - The chunk edge length in world-block units
    /// * `render_radius` - The render radius in world-block units
    ///
    /// # Returns
    /// The configuration, or a `ConfigError` if either value violates the
    /// configuration invariants.
    pub fn new(chunk_size: i32, render_radius: i32) -> Result<Self, ConfigError> {
        let config = StreamConfig {
            chunk_size,
            render_radius,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration invariants.
    ///
    /// # Returns
    /// `Ok(())` if `chunk_size` is positive and `render_radius` is
    /// non-negative; the corresponding `ConfigError` otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size <= 0 {
            return Err(ConfigError::NonPositiveChunkSize(self.chunk_size));
        }
        if self.render_radius < 0 {
            return Err(ConfigError::NegativeRenderRadius(self.render_radius));
        }
        Ok(())
    }

    /// Loads a configuration from a JSON document.
    ///
    /// The parsed value is validated before it is returned, so a
    /// configuration file cannot smuggle invalid values past the
    /// construction-time checks.
    ///
    /// # Arguments
    /// * `json` - A JSON object with `chunk_size` and `render_radius` fields
    ///
    /// # Returns
    /// The validated configuration, or a `ConfigError` describing the parse
    /// failure or violated invariant.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StreamConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
            render_radius: DEFAULT_RENDER_RADIUS,
        }
    }
}

/// Errors produced when constructing or loading a `StreamConfig`.
#[derive(Debug)]
pub enum ConfigError {
    /// The chunk size was zero or negative; chunk coordinate division is
    /// undefined for such sizes.
    NonPositiveChunkSize(i32),

    /// The render radius was negative; the observer square would be empty.
    NegativeRenderRadius(i32),

    /// The configuration document could not be parsed.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveChunkSize(chunk_size) => {
                write!(f, "chunk_size must be positive, got {}", chunk_size)
            }
            ConfigError::NegativeRenderRadius(render_radius) => {
                write!(f, "render_radius must be non-negative, got {}", render_radius)
            }
            ConfigError::Parse(err) => write!(f, "invalid configuration document: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        let config = StreamConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.render_radius, DEFAULT_RENDER_RADIUS);
    }

    #[test]
    fn non_positive_chunk_sizes_are_rejected() {
        assert!(matches!(
            StreamConfig::new(0, 2),
            Err(ConfigError::NonPositiveChunkSize(0))
        ));
        assert!(matches!(
            StreamConfig::new(-16, 2),
            Err(ConfigError::NonPositiveChunkSize(-16))
        ));
    }

    #[test]
    fn negative_render_radii_are_rejected() {
        assert!(matches!(
            StreamConfig::new(16, -1),
            Err(ConfigError::NegativeRenderRadius(-1))
        ));
    }

    #[test]
    fn zero_render_radius_is_valid() {
        assert!(StreamConfig::new(16, 0).is_ok());
    }

    #[test]
    fn json_loading_validates_after_parsing() {
        let config = StreamConfig::from_json(r#"{ "chunk_size": 32, "render_radius": 4 }"#)
            .expect("well-formed valid configuration");
        assert_eq!(config.chunk_size, 32);
        assert_eq!(config.render_radius, 4);

        assert!(matches!(
            StreamConfig::from_json(r#"{ "chunk_size": 0, "render_radius": 4 }"#),
            Err(ConfigError::NonPositiveChunkSize(0))
        ));

        assert!(matches!(
            StreamConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
