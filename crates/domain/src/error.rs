//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TempCalcError`] via `#[from]` or an explicit `into_domain`.

/// Top-level error for the tempcalc workspace.
#[derive(Debug, thiserror::Error)]
pub enum TempCalcError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// An error raised at an IO boundary (snapshot loading, parsing, …).
    #[error("source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name field was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// An identifier was empty.
    #[error("identifier must not be empty")]
    EmptyId,

    /// A classification strategy name was not recognised.
    #[error("unknown classification strategy {0:?}")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_tempcalc_error() {
        let err: TempCalcError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            TempCalcError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_display_unknown_strategy_with_name() {
        let err = ValidationError::UnknownStrategy("magic".to_string());
        assert_eq!(err.to_string(), "unknown classification strategy \"magic\"");
    }
}
