//! Error types for weft
//!
//! Interaction logic never fails; errors only come from loading and
//! validating component settings.

use thiserror::Error;

/// Errors that can occur while configuring weft components
#[derive(Error, Debug)]
pub enum WeftError {
    /// Failed to read a settings file
    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML or has the wrong shape
    #[error("Settings parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings could not be written back out as TOML
    #[error("Settings serialize failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Settings parsed but are inconsistent
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for weft operations
pub type Result<T> = std::result::Result<T, WeftError>;
