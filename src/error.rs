//! Control error types.

use thiserror::Error;

use crate::types::Axis;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// A size, inset or available budget was negative.
    #[error("{property} must be non-negative, got {value}")]
    InvalidValue { property: &'static str, value: i32 },

    /// A min bound exceeds the max bound on the same axis.
    #[error("{axis} min ({min}) exceeds max ({max})")]
    Constraint { axis: Axis, min: i32, max: i32 },
}

impl ControlError {
    /// True for the value-class errors (negative inputs).
    pub fn is_value_error(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// True for min/max conflicts.
    pub fn is_constraint_error(&self) -> bool {
        matches!(self, Self::Constraint { .. })
    }
}

pub type Result<T> = std::result::Result<T, ControlError>;

/// Reject a negative value for `property`.
pub(crate) fn non_negative(property: &'static str, value: i32) -> Result<i32> {
    if value < 0 {
        return Err(ControlError::InvalidValue { property, value });
    }
    Ok(value)
}
