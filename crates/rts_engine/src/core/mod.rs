//! # Core Engine Module
//!
//! Shared configuration used by the engine subsystems.

pub mod config;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    EngineConfig,
    CollisionConfig,
    Config,
    ConfigError,
};
