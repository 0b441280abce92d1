//! Error types for value generation

use battle_core::{Value, ValueKind};
use thiserror::Error;

/// Errors raised while allocating a generator for a leaf
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueGenerationError {
    #[error("Unsupported value kind: {0}")]
    UnsupportedKind(ValueKind),
    #[error("Invalid range for {kind}: [{min}, {max}]")]
    InvalidRange {
        kind: ValueKind,
        min: String,
        max: String,
    },
    #[error("Empty choice list for {0}")]
    EmptyChoices(ValueKind),
    #[error("Choice {value} is not a valid {kind}")]
    ChoiceKind { kind: ValueKind, value: Value },
}

impl ValueGenerationError {
    pub(crate) fn invalid_range(
        kind: ValueKind,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::InvalidRange {
            kind,
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let err = ValueGenerationError::UnsupportedKind(ValueKind::array_of(ValueKind::Object));
        assert_eq!(err.to_string(), "Unsupported value kind: array<object>");

        let err = ValueGenerationError::invalid_range(ValueKind::Integer, 10, 2);
        assert_eq!(err.to_string(), "Invalid range for integer: [10, 2]");
    }
}
