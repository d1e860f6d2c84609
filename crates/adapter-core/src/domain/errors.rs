//! # Error Taxonomy
//!
//! Each variant maps to one documented failure mode and carries a
//! stable machine-readable code for the transport boundary. Decoding,
//! validation and not-found errors are recovered per request; a
//! signing failure means the process is misconfigured and is treated
//! as fatal at startup.

use crate::domain::deal::DealId;
use thiserror::Error;

/// Errors the adapter core can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// Malformed hex or byte input to a proposal.
    #[error("decoding error: {reason}")]
    Decoding {
        /// What failed to decode.
        reason: String,
    },

    /// Structurally invalid proposal (empty parameters, no outcomes).
    #[error("validation error: {reason}")]
    Validation {
        /// Which structural rule was violated.
        reason: String,
    },

    /// Resolution referenced a deal id that was never proposed.
    #[error("unknown deal id {id}")]
    DealNotFound {
        /// The id that was requested.
        id: DealId,
    },

    /// The signing primitive rejected its key or input. Indicates a
    /// process-level misconfiguration, not a caller error.
    #[error("signing failure: {reason}")]
    Signing {
        /// Underlying cause.
        reason: String,
    },
}

impl AdapterError {
    /// Stable error code exposed in transport responses.
    pub fn code(&self) -> &'static str {
        match self {
            AdapterError::Decoding { .. } => "DECODING_ERROR",
            AdapterError::Validation { .. } => "VALIDATION_ERROR",
            AdapterError::DealNotFound { .. } => "DEAL_NOT_FOUND",
            AdapterError::Signing { .. } => "SIGNING_FAILURE",
        }
    }
}
