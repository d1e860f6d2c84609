//! # Deal Proposer
//!
//! Converts a proposal request into a signed, stored deal:
//! decode parameters → Keccak-256 commitment → recoverable signature →
//! (v, r, s) split → insert. A failed proposal mutates nothing and
//! consumes no id.

use crate::domain::deal::{Deal, Outcome};
use crate::domain::errors::AdapterError;
use crate::signing::SigningIdentity;
use crate::store::{DealDraft, DealStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Transport-facing proposal request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeDealRequest {
    /// Hex-encoded deal parameters (`0x` prefix optional). Must
    /// decode to a non-empty byte sequence.
    pub parameters_hex: String,
    /// Ordered, non-empty outcome list. Stored verbatim.
    pub outcomes: Vec<Outcome>,
}

/// Orchestrates proposal: signing identity + store.
pub struct DealProposer {
    identity: Arc<SigningIdentity>,
    store: Arc<DealStore>,
}

impl DealProposer {
    /// Create a proposer over a shared identity and store.
    pub fn new(identity: Arc<SigningIdentity>, store: Arc<DealStore>) -> Self {
        Self { identity, store }
    }

    /// Canonicalize, sign and store a proposed deal, returning the
    /// complete record the caller submits on-chain.
    pub fn propose(&self, request: ProposeDealRequest) -> Result<Arc<Deal>, AdapterError> {
        let parameters = decode_parameters(&request.parameters_hex)?;
        if request.outcomes.is_empty() {
            return Err(AdapterError::Validation {
                reason: "outcomes must not be empty".into(),
            });
        }

        let parameters_hash = crate::signing::keccak256(&parameters);
        let signature = self.identity.sign(&parameters_hash)?;
        let signature_parts = signature.split();

        let deal = self.store.insert(DealDraft {
            parameters_hex: request.parameters_hex,
            parameters_hash: parameters_hash.into(),
            signature: signature.to_hex(),
            signature_parts,
            outcomes: request.outcomes,
        });

        info!(
            id = deal.id,
            hash = %deal.parameters_hash,
            outcomes = deal.outcomes.len(),
            "deal proposed"
        );
        Ok(deal)
    }
}

/// Decode `0x`-optional parameter hex into non-empty raw bytes.
fn decode_parameters(parameters_hex: &str) -> Result<Vec<u8>, AdapterError> {
    let stripped = parameters_hex.strip_prefix("0x").unwrap_or(parameters_hex);
    let bytes = hex::decode(stripped).map_err(|e| AdapterError::Decoding {
        reason: format!("parametersHex is not valid hex: {e}"),
    })?;
    if bytes.is_empty() {
        return Err(AdapterError::Validation {
            reason: "parametersHex must decode to a non-empty byte sequence".into(),
        });
    }
    Ok(bytes)
}
