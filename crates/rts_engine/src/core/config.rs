//! # Engine Configuration
//!
//! Typed configuration for the engine core and the collision system. The
//! top-level [`ApplicationConfig`] can be stored as TOML or RON through the
//! [`Config`] trait.
//!
//! ```toml
//! [engine]
//! log_level = "info"
//! debug_mode = false
//!
//! [collision]
//! default_collision_type = "PHYSICAL"
//! log_cull_statistics = false
//! ```

use serde::{Serialize, Deserialize};

use crate::physics::collision::CollisionType;

// Re-export the file support for convenience
pub use crate::config::{Config, ConfigError};

/// # Engine Configuration
///
/// Core engine behavior: logging and debug features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, e.g. `"info"` or `"rts_engine::physics=trace"`
    pub log_level: String,
    /// Whether to enable debug features
    pub debug_mode: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            debug_mode: cfg!(debug_assertions),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    /// Install the logger using `log_level` as the default filter
    pub fn init_logging(&self) -> bool {
        crate::foundation::logging::init_with_level(&self.log_level)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Collision Configuration
///
/// Defaults for the swept collision tests built by the broad phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Collision type given to tests that don't ask for one
    pub default_collision_type: CollisionType,
    /// Log every broad-phase pass at debug level instead of trace
    pub log_cull_statistics: bool,
}

impl CollisionConfig {
    /// Create a new collision configuration
    pub fn new() -> Self {
        Self {
            default_collision_type: CollisionType::default(),
            log_cull_statistics: false,
        }
    }

    /// Set the default collision type
    pub fn with_default_collision_type(mut self, collision_type: CollisionType) -> Self {
        self.default_collision_type = collision_type;
        self
    }

    /// Enable per-pass statistics logging
    pub fn with_cull_statistics(mut self, enabled: bool) -> Self {
        self.log_cull_statistics = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_collision_type.is_empty() {
            return Err(ConfigError::Invalid(
                "default collision type must name at least one category".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Collision system configuration
    pub collision: CollisionConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.collision.validate()
    }
}

impl Config for ApplicationConfig {}
