//! Error types for the toolkit calculations
//!
//! Every calculation either returns a complete result or fails with
//! `InvalidInput` before producing any output.

use thiserror::Error;

/// Errors raised by the calculation core
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// A documented precondition on an input was violated
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// A reference table could not be parsed
    #[error("failed to parse reference table: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;

impl ToolkitError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::warn!("rejected input {}: {}", field, reason);
        ToolkitError::InvalidInput { field, reason }
    }

    /// True for precondition failures (as opposed to reference parsing errors)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ToolkitError::InvalidInput { .. })
    }
}

/// Reject negative, NaN and infinite amounts
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(ToolkitError::invalid(field, format!("must be finite, got {}", value)));
    }
    if value < 0.0 {
        return Err(ToolkitError::invalid(field, format!("must be >= 0, got {}", value)));
    }
    Ok(value)
}

/// Reject negative counts coming from untyped front ends
pub(crate) fn ensure_count(field: &'static str, value: i32) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| ToolkitError::invalid(field, format!("must be >= 0, got {}", value)))
}
