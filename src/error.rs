//! Error types for wavefront configuration and startup

use std::fmt;

/// Errors that can occur while configuring or starting a wavefront run
///
/// Everything here is fatal at startup: the engine refuses to start rather
/// than attempting a partial run. Once a run is underway there is no
/// recoverable-error category; out-of-bounds neighbors and duplicate
/// admissions are expected and silently excluded.
#[derive(Debug, Clone)]
pub enum WavefrontError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Unrecognized distance metric name
    InvalidMetric(String),
}

impl fmt::Display for WavefrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WavefrontError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            WavefrontError::InvalidMetric(name) => write!(f, "invalid distance metric: {}", name),
        }
    }
}

impl std::error::Error for WavefrontError {}

/// Result type alias for wavefront operations
pub type Result<T> = std::result::Result<T, WavefrontError>;
