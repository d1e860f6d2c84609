//! # Deal Entities
//!
//! The `Deal` aggregate and its parts. JSON field names are camelCase
//! to match what the on-chain tooling submits and reads back.
//!
//! Invariant: once a `Deal` is constructed and inserted into the store,
//! its `id`, `parameters_hash` and `signature` never change. The store
//! hands out `Arc<Deal>`, so there is no mutable access after insert.

use crate::domain::errors::AdapterError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Sequence-assigned deal identifier, unique for the process lifetime.
pub type DealId = u64;

/// A 32-byte word, serialized as `0x`-prefixed lowercase hex.
///
/// Used for commitment hashes, signature scalars and outcome tags,
/// everything the on-chain verifier consumes as a fixed-width word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bytes32(pub [u8; 32]);

impl Bytes32 {
    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex form with `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Bytes32 {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(stripped).map_err(|e| AdapterError::Decoding {
            reason: format!("invalid hex: {e}"),
        })?;
        if decoded.len() != 32 {
            return Err(AdapterError::Decoding {
                reason: format!("expected 32 bytes, got {}", decoded.len()),
            });
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes32({})", self.to_hex())
    }
}

impl Serialize for Bytes32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Bytes32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Comparison operator of an outcome predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredicateOp {
    /// Reported value equals the threshold.
    Equals,
    /// Reported value is greater than the threshold.
    Greater,
    /// Reported value is lesser than the threshold.
    Lesser,
}

/// Predicate of an outcome: an operator and a numeric threshold.
///
/// Stored verbatim and never evaluated; outcome selection is
/// first-entry-wins (see [`crate::resolver`]). A future evaluator
/// would compare an externally reported amount against `amount`
/// using `operator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// Comparison operator.
    pub operator: PredicateOp,
    /// Threshold the reported amount is compared against.
    pub amount: u64,
}

/// A predicate/tag pair. The tag is the fixed-width word reported as
/// the oracle answer when this outcome is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Selection predicate (stored, not evaluated).
    pub predicate: Predicate,
    /// Encoded result the on-chain contract accepts.
    pub tag: Bytes32,
}

/// The three scalar components of a recoverable secp256k1 signature,
/// in the encoding the verifying contract expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureParts {
    /// Recovery byte, normalized to {27, 28}.
    pub v: u8,
    /// First 32 bytes of the signature.
    pub r: Bytes32,
    /// Second 32 bytes of the signature.
    pub s: Bytes32,
}

/// A signed, stored deal: the adapter's endorsement of a set of
/// proposed parameters, plus the outcomes it may later report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Store-assigned identifier, never reused within a process.
    pub id: DealId,
    /// The raw parameter hex exactly as submitted by the caller.
    pub parameters_hex: String,
    /// Keccak-256 commitment over the decoded parameter bytes.
    pub parameters_hash: Bytes32,
    /// Flat 65-byte signature as `0x`-hex (r || s || v).
    pub signature: String,
    /// The (v, r, s) decomposition submitted on-chain.
    pub signature_parts: SignatureParts,
    /// Ordered outcome list supplied at proposal time.
    pub outcomes: Vec<Outcome>,
}
