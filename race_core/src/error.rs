//! Errors for fallible construction paths
//!
//! The simulation step itself never fails; only building a track or
//! accepting a configuration can be rejected.

/// Rejected track definition
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackError {
    #[error("Track needs at least 2 control points, got {0}")]
    TooFewPoints(usize),

    #[error("Track width must be positive, got {0}")]
    InvalidWidth(f32),

    #[error("Control point {0} has a non-finite coordinate")]
    NonFinitePoint(usize),
}

/// Rejected tuning configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_speed must be positive, got {0}")]
    InvalidMaxSpeed(f32),

    #[error("{name} must be within (0, 1], got {value}")]
    InvalidDrag { name: &'static str, value: f32 },

    #[error("max_boost must be positive, got {0}")]
    InvalidMaxBoost(f32),

    #[error("field of view must be positive, got {0}")]
    InvalidFov(f32),

    #[error("screen size must be non-zero, got {0}x{1}")]
    InvalidScreen(u32, u32),
}
