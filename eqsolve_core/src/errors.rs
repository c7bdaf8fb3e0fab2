//! # Error Types
//!
//! Structured error types for eqsolve_core. Every anticipated bad input is
//! reported as a [`SolveError`] value naming the offending variable and the
//! violated constraint, so a form shell can highlight the right field without
//! parsing message text.
//!
//! ## Example
//!
//! ```rust
//! use eqsolve_core::errors::{EqResult, SolveError};
//!
//! fn validate_mass(mass_kg: f64) -> EqResult<()> {
//!     if mass_kg <= 0.0 {
//!         return Err(SolveError::domain_violation("m", mass_kg.to_string(), "> 0"));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_mass(-1.0).unwrap_err().error_code(), "DOMAIN_VIOLATION");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for eqsolve_core operations
pub type EqResult<T> = Result<T, SolveError>;

/// Structured error type for solve operations.
///
/// The engine never panics on user input; each variant below is a
/// recoverable, deterministic outcome. Retrying with the same request
/// produces the same error.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SolveError {
    /// Wrong set of known variables for the requested target
    #[error("Incomplete input: {reason}")]
    IncompleteInput { reason: String },

    /// A raw input string is not a finite real number
    #[error("Invalid number for '{variable}': '{raw}'")]
    InvalidNumber { variable: String, raw: String },

    /// A value lies outside its variable's allowed range
    #[error("Value {value} for '{variable}' violates constraint {constraint}")]
    DomainViolation {
        variable: String,
        value: String,
        constraint: String,
    },

    /// An inverse would divide by a zero-valued quantity
    #[error("Division by zero solving '{variable}': {divisor} is zero")]
    DivisionByZero { variable: String, divisor: String },

    /// A square or cube root was requested of a negative radicand
    #[error("Negative radicand solving '{variable}': {radicand}")]
    RadicandNegative { variable: String, radicand: String },

    /// arccos argument outside [-1, 1]
    #[error("No real angle for '{variable}': cosine ratio {ratio} is outside [-1, 1]")]
    ArccosDomain { variable: String, ratio: String },

    /// Multi-input structural check failed (triangle inequality, angle sum, collinear points)
    #[error("Structural constraint violated: {reason}")]
    StructuralInequality { reason: String },

    /// Unit symbol is not registered for the quantity kind
    #[error("Unknown unit '{unit}' for {kind}")]
    UnknownUnit { unit: String, kind: String },

    /// No calculator is registered under this id
    #[error("Unknown equation: {id}")]
    UnknownEquation { id: String },

    /// The computed value is NaN or infinite
    #[error("Result for '{variable}' is not a finite number")]
    NonFiniteResult { variable: String },

    /// Settings (de)serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings file could not be read
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Configuration defect in an equation descriptor (should never reach users)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SolveError {
    /// Create an IncompleteInput error
    pub fn incomplete_input(reason: impl Into<String>) -> Self {
        SolveError::IncompleteInput { reason: reason.into() }
    }

    /// Create an InvalidNumber error
    pub fn invalid_number(variable: impl Into<String>, raw: impl Into<String>) -> Self {
        SolveError::InvalidNumber {
            variable: variable.into(),
            raw: raw.into(),
        }
    }

    /// Create a DomainViolation error
    pub fn domain_violation(
        variable: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        SolveError::DomainViolation {
            variable: variable.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(variable: impl Into<String>, divisor: impl Into<String>) -> Self {
        SolveError::DivisionByZero {
            variable: variable.into(),
            divisor: divisor.into(),
        }
    }

    /// Create a RadicandNegative error
    pub fn radicand_negative(variable: impl Into<String>, radicand: f64) -> Self {
        SolveError::RadicandNegative {
            variable: variable.into(),
            radicand: radicand.to_string(),
        }
    }

    /// Create an ArccosDomain error
    pub fn arccos_domain(variable: impl Into<String>, ratio: f64) -> Self {
        SolveError::ArccosDomain {
            variable: variable.into(),
            ratio: ratio.to_string(),
        }
    }

    /// Create a StructuralInequality error
    pub fn structural(reason: impl Into<String>) -> Self {
        SolveError::StructuralInequality { reason: reason.into() }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>, kind: impl Into<String>) -> Self {
        SolveError::UnknownUnit {
            unit: unit.into(),
            kind: kind.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SolveError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        SolveError::Internal { message: message.into() }
    }

    /// The variable this error is about, if it names one
    pub fn variable(&self) -> Option<&str> {
        match self {
            SolveError::InvalidNumber { variable, .. }
            | SolveError::DomainViolation { variable, .. }
            | SolveError::DivisionByZero { variable, .. }
            | SolveError::RadicandNegative { variable, .. }
            | SolveError::ArccosDomain { variable, .. }
            | SolveError::NonFiniteResult { variable } => Some(variable),
            _ => None,
        }
    }

    /// Whether correcting user input can resolve this error.
    ///
    /// Only `Internal` is a developer-side defect.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, SolveError::Internal { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SolveError::IncompleteInput { .. } => "INCOMPLETE_INPUT",
            SolveError::InvalidNumber { .. } => "INVALID_NUMBER",
            SolveError::DomainViolation { .. } => "DOMAIN_VIOLATION",
            SolveError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            SolveError::RadicandNegative { .. } => "RADICAND_NEGATIVE",
            SolveError::ArccosDomain { .. } => "ARCCOS_DOMAIN",
            SolveError::StructuralInequality { .. } => "STRUCTURAL_INEQUALITY",
            SolveError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            SolveError::UnknownEquation { .. } => "UNKNOWN_EQUATION",
            SolveError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            SolveError::SerializationError { .. } => "SERIALIZATION_ERROR",
            SolveError::FileError { .. } => "FILE_ERROR",
            SolveError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SolveError::arccos_domain("theta", 1.25);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"ArccosDomain\""));
        let roundtrip: SolveError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SolveError::incomplete_input("x").error_code(), "INCOMPLETE_INPUT");
        assert_eq!(SolveError::division_by_zero("m", "g").error_code(), "DIVISION_BY_ZERO");
        assert_eq!(SolveError::unknown_unit("furlong", "Length").error_code(), "UNKNOWN_UNIT");
    }

    #[test]
    fn test_variable_accessor() {
        assert_eq!(SolveError::invalid_number("rho", "abc").variable(), Some("rho"));
        assert_eq!(SolveError::structural("1 + 1 <= 5").variable(), None);
    }

    #[test]
    fn test_display_names_offending_variable() {
        let error = SolveError::domain_violation("m", "-2", "> 0");
        assert_eq!(error.to_string(), "Value -2 for 'm' violates constraint > 0");
        assert!(error.is_user_error());
        assert!(!SolveError::internal("bad descriptor").is_user_error());
    }
}
