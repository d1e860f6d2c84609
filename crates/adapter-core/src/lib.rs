//! # Adapter Core
//!
//! Deal signing, storage, proposal and resolution for the
//! conditional-payment external adapter.
//!
//! ## Components
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `domain` | `Deal`, `Outcome`, `Bytes32` and the error taxonomy |
//! | `signing` | Keccak-256 hashing and secp256k1 recoverable signing |
//! | `store` | In-memory deal registry with monotonic id allocation |
//! | `proposer` | decode → hash → sign → split → store pipeline |
//! | `resolver` | deal lookup and outcome selection |
//!
//! ## Correctness properties
//!
//! - Hashing is Keccak-256 (original padding), byte-compatible with the
//!   on-chain verifier. NIST SHA3-256 would produce different digests
//!   and silently fail verification.
//! - Signing is RFC 6979 deterministic with low-S normalization, so a
//!   given key and digest always produce the same (v, r, s) triple.
//! - Deal ids are allocated from a strictly monotonic counter inside
//!   the store's critical section; concurrent proposals can never
//!   observe the same id.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod proposer;
pub mod resolver;
pub mod signing;
pub mod store;

// Re-exports
pub use domain::deal::{Bytes32, Deal, DealId, Outcome, Predicate, PredicateOp, SignatureParts};
pub use domain::errors::AdapterError;
pub use proposer::{DealProposer, ProposeDealRequest};
pub use resolver::{DealResolver, Resolution};
pub use signing::{keccak256, recover_address, Hash32, RecoverableSignature, SigningIdentity};
pub use store::{DealDraft, DealStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
