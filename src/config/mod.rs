//! Configuration module for the budget optimizer
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (currency symbol, policy thresholds)

pub mod paths;
pub mod settings;

pub use paths::OptimizerPaths;
pub use settings::Settings;
