//! Configuration module for passkeep
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PasskeepPaths;
pub use settings::Settings;
