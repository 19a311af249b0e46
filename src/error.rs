//! Error type for simulation construction and startup.
//!
//! The frame loop itself never fails: every fallible operation happens when an
//! entity, spawner, or configuration is built, so invalid values are rejected
//! before they can reach the registry.

use thiserror::Error;

/// Errors raised when building simulation objects or loading startup assets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A duration, interval, or count that must be strictly positive was not.
    #[error("{what} must be positive and finite, got {value}")]
    NonPositive { what: &'static str, value: f32 },

    /// A `[min, max]` range was empty, inverted, or negative.
    #[error("{what} range is invalid: [{min}, {max}]")]
    InvalidRange {
        what: &'static str,
        min: f32,
        max: f32,
    },

    /// The palette has no themes to pick from.
    #[error("palette has no themes")]
    EmptyPalette,

    /// The configuration file could not be read, parsed, or written.
    #[error("config error: {0}")]
    Config(String),

    /// A theme texture could not be created.
    #[error("texture error: {0}")]
    Texture(String),
}

/// Reject anything that is not a strictly positive, finite number.
pub(crate) fn ensure_positive(what: &'static str, value: f32) -> Result<f32, SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::NonPositive { what, value })
    }
}

/// Reject ranges that are inverted, non-finite, or start below zero.
pub(crate) fn ensure_range(what: &'static str, min: f32, max: f32) -> Result<(), SimError> {
    if min.is_finite() && max.is_finite() && min >= 0.0 && min <= max {
        Ok(())
    } else {
        Err(SimError::InvalidRange { what, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_accepts_positive() {
        assert_eq!(ensure_positive("fuse", 1.5), Ok(1.5));
    }

    #[test]
    fn test_ensure_positive_rejects_zero_negative_and_nan() {
        assert!(ensure_positive("fuse", 0.0).is_err());
        assert!(ensure_positive("fuse", -1.0).is_err());
        assert!(ensure_positive("fuse", f32::NAN).is_err());
        assert!(ensure_positive("fuse", f32::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_range() {
        assert!(ensure_range("speed", 1.0, 2.0).is_ok());
        assert!(ensure_range("speed", 2.0, 2.0).is_ok());
        assert!(ensure_range("speed", 3.0, 2.0).is_err());
        assert!(ensure_range("speed", -1.0, 2.0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let e = SimError::NonPositive {
            what: "interval",
            value: 0.0,
        };
        assert_eq!(e.to_string(), "interval must be positive and finite, got 0");
        assert_eq!(SimError::EmptyPalette.to_string(), "palette has no themes");
    }
}
