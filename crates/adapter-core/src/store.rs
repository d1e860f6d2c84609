//! # Deal Store
//!
//! In-memory registry of deals, keyed by sequence-assigned id.
//!
//! Id allocation uses a strictly monotonic counter rather than the
//! current map size, so ids can never be reused even if deletion is
//! ever introduced. The counter and the map live under one mutex:
//! allocating an id and inserting the deal is a single critical
//! section, which keeps concurrent proposals from colliding.

use crate::domain::deal::{Bytes32, Deal, DealId, Outcome, SignatureParts};
use crate::domain::errors::AdapterError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// A deal minus its identifier; the store assigns the id at insert.
#[derive(Debug, Clone)]
pub struct DealDraft {
    /// Raw parameter hex as submitted.
    pub parameters_hex: String,
    /// Keccak-256 commitment over the decoded parameters.
    pub parameters_hash: Bytes32,
    /// Flat 65-byte signature as hex.
    pub signature: String,
    /// (v, r, s) decomposition.
    pub signature_parts: SignatureParts,
    /// Ordered outcome list.
    pub outcomes: Vec<Outcome>,
}

#[derive(Default)]
struct StoreInner {
    next_id: DealId,
    deals: HashMap<DealId, Arc<Deal>>,
}

/// Process-lifetime registry of deals. The only shared mutable state
/// in the adapter.
#[derive(Default)]
pub struct DealStore {
    inner: Mutex<StoreInner>,
}

impl DealStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next successful insert will be assigned. Read-only
    /// peek; does not reserve anything.
    pub fn next_id(&self) -> DealId {
        self.inner.lock().next_id
    }

    /// Allocate the next id and store the completed deal, atomically.
    pub fn insert(&self, draft: DealDraft) -> Arc<Deal> {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let deal = Arc::new(Deal {
            id,
            parameters_hex: draft.parameters_hex,
            parameters_hash: draft.parameters_hash,
            signature: draft.signature,
            signature_parts: draft.signature_parts,
            outcomes: draft.outcomes,
        });
        inner.deals.insert(id, Arc::clone(&deal));
        deal
    }

    /// Look up a deal. Unknown ids produce a distinct error, never a
    /// default record.
    pub fn get(&self, id: DealId) -> Result<Arc<Deal>, AdapterError> {
        self.inner
            .lock()
            .deals
            .get(&id)
            .cloned()
            .ok_or(AdapterError::DealNotFound { id })
    }

    /// Number of stored deals.
    pub fn len(&self) -> usize {
        self.inner.lock().deals.len()
    }

    /// Whether the store holds no deals.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
