/// Error types for the analysis entry points

use thiserror::Error;

/// Errors raised before any computation starts.
///
/// A missing safe-sales threshold is not an error; it is reported as `None`
/// on the overbooking result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl AnalysisError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Reject NaN and infinities
pub fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalysisError::invalid(name, format!("must be finite, got {}", value)))
    }
}

pub fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(AnalysisError::invalid(name, format!("must be > 0, got {}", value)))
    }
}

pub fn require_non_negative(name: &'static str, value: f64) -> Result<f64> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(AnalysisError::invalid(name, format!("must be >= 0, got {}", value)))
    }
}

pub fn require_probability(name: &'static str, value: f64) -> Result<f64> {
    require_finite(name, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(AnalysisError::invalid(name, format!("must be within [0, 1], got {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_parameter() {
        let err = AnalysisError::invalid("investment", "must be > 0, got 0");
        assert_eq!(err.to_string(), "invalid parameter `investment`: must be > 0, got 0");
    }

    #[test]
    fn test_validators() {
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert_eq!(require_positive("x", 2.5), Ok(2.5));
        assert!(require_non_negative("x", -0.1).is_err());
        assert_eq!(require_non_negative("x", 0.0), Ok(0.0));
        assert!(require_probability("p", 1.01).is_err());
        assert!(require_probability("p", -0.01).is_err());
        assert_eq!(require_probability("p", 1.0), Ok(1.0));
        assert!(require_finite("x", f64::INFINITY).is_err());
    }
}
