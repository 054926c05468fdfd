//! # Error Types — Mechanism Parameter Assembly
//!
//! Errors raised while assembling mechanism parameter blocks. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Parameter assembly has exactly one failure mode: a required field was
//! never supplied. Validation is fail-fast — the first absent field in
//! canonical order is reported, and no partially assembled block escapes.
//! Buffer *contents* are never validated here; cryptographic validity is
//! the token's business.

use thiserror::Error;

/// Error raised when a mechanism parameter block cannot be assembled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// A required parameter field was never supplied.
    #[error("required mechanism parameter field `{field}` is missing")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
}

impl ParameterError {
    /// The field name carried by this error.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } => field,
        }
    }
}
