//! Error types and validation functions for surrogate-data analysis.
//!
//! All fallible operations in this crate return [`SurrogateResult`]. The
//! computations are deterministic given their inputs and seed, so there is no
//! retry machinery anywhere: every error is surfaced immediately to the caller.

use thiserror::Error;

/// Error types for surrogate-data significance testing and spectral estimation.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum SurrogateError {
    /// Paired input series have different lengths.
    #[error("Shape mismatch: paired series have lengths {expected} and {actual}")]
    ShapeMismatch {
        /// Length of the first series
        expected: usize,
        /// Length of the second series
        actual: usize,
    },

    /// Insufficient data for the requested operation.
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData {
        /// Minimum required data points
        required: usize,
        /// Actual number of data points provided
        actual: usize,
    },

    /// Invalid parameter value for a configuration field.
    #[error("Invalid parameter: {parameter} = {value}, expected {constraint}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value provided
        value: f64,
        /// Valid range or constraint description
        constraint: String,
    },

    /// Numerical computation failure (degenerate or non-finite inputs).
    #[error("Numerical computation failed: {reason}")]
    NumericalError {
        /// Detailed reason for numerical failure
        reason: String,
    },

    /// FFT computation error.
    #[error("FFT computation failed: input size {size} not supported")]
    FftError {
        /// Transform size that caused the failure
        size: usize,
    },
}

/// Result type for surrogate-data operations.
pub type SurrogateResult<T> = Result<T, SurrogateError>;

/// Validates that two paired series have identical lengths.
///
/// # Example
/// ```rust
/// use spectral_surrogates::errors::validate_equal_length;
///
/// assert!(validate_equal_length(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
/// assert!(validate_equal_length(&[1.0, 2.0], &[3.0]).is_err());
/// ```
pub fn validate_equal_length(x: &[f64], y: &[f64]) -> SurrogateResult<()> {
    if x.len() != y.len() {
        Err(SurrogateError::ShapeMismatch {
            expected: x.len(),
            actual: y.len(),
        })
    } else {
        Ok(())
    }
}

/// Validates that data has sufficient length for analysis.
///
/// # Example
/// ```rust
/// use spectral_surrogates::errors::validate_data_length;
///
/// let data = vec![1.0, 2.0, 3.0];
/// assert!(validate_data_length(&data, 2, "test").is_ok());
/// assert!(validate_data_length(&data, 5, "test").is_err());
/// ```
pub fn validate_data_length(
    data: &[f64],
    min_required: usize,
    _operation: &str,
) -> SurrogateResult<()> {
    if data.len() < min_required {
        Err(SurrogateError::InsufficientData {
            required: min_required,
            actual: data.len(),
        })
    } else {
        Ok(())
    }
}

/// Validates that all values in a slice are finite.
///
/// Returns immediately on the first non-finite value.
///
/// # Example
/// ```rust
/// use spectral_surrogates::errors::validate_all_finite;
///
/// assert!(validate_all_finite(&[1.0, 2.0, 3.0], "x").is_ok());
/// assert!(validate_all_finite(&[1.0, f64::NAN], "x").is_err());
/// ```
pub fn validate_all_finite(data: &[f64], name: &str) -> SurrogateResult<()> {
    if let Some((i, &value)) = data.iter().enumerate().find(|(_, &v)| !v.is_finite()) {
        return Err(SurrogateError::NumericalError {
            reason: format!("{} contains non-finite value at index {}: {}", name, i, value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_equal_length() {
        assert!(validate_equal_length(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).is_ok());

        match validate_equal_length(&[1.0, 2.0, 3.0], &[4.0]) {
            Err(SurrogateError::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 1);
            }
            _ => panic!("Expected ShapeMismatch error"),
        }
    }

    #[test]
    fn test_validate_data_length() {
        let data = vec![1.0, 2.0];
        assert!(validate_data_length(&data, 2, "test").is_ok());

        match validate_data_length(&data, 5, "test") {
            Err(SurrogateError::InsufficientData { required, actual }) => {
                assert_eq!(required, 5);
                assert_eq!(actual, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_validate_all_finite() {
        assert!(validate_all_finite(&[], "empty").is_ok());
        assert!(validate_all_finite(&[1.0, -2.0, 1e10], "x").is_ok());

        match validate_all_finite(&[1.0, f64::INFINITY, 3.0], "x") {
            Err(SurrogateError::NumericalError { reason }) => {
                assert!(reason.contains("index 1"));
                assert!(reason.contains('x'));
            }
            _ => panic!("Expected NumericalError"),
        }
    }

    #[test]
    fn test_error_display_formatting() {
        let err = SurrogateError::ShapeMismatch {
            expected: 128,
            actual: 64,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("128"));
        assert!(msg.contains("64"));

        let err = SurrogateError::InvalidParameter {
            parameter: "num_surrogates".to_string(),
            value: 0.0,
            constraint: "must be >= 1".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("num_surrogates"));
        assert!(msg.contains("must be >= 1"));
    }
}
