//! # Deal Resolver
//!
//! Looks up a previously proposed deal and returns the outcome tag to
//! report on-chain. Selection is first-entry-wins: predicates are
//! stored but never evaluated against any external signal. Read-only;
//! resolving the same id twice always yields the same result.

use crate::domain::deal::{Bytes32, DealId};
use crate::domain::errors::AdapterError;
use crate::store::DealStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// The oracle answer for a resolved deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Tag of the selected outcome.
    pub result: Bytes32,
    /// Always `null` on success; populated only in boundary error
    /// responses.
    pub error: Option<String>,
}

/// Orchestrates resolution over the shared deal store.
pub struct DealResolver {
    store: Arc<DealStore>,
}

impl DealResolver {
    /// Create a resolver over a shared store.
    pub fn new(store: Arc<DealStore>) -> Self {
        Self { store }
    }

    /// Resolve a deal id to its outcome tag.
    pub fn resolve(&self, id: DealId) -> Result<Resolution, AdapterError> {
        let deal = self.store.get(id)?;
        let outcome = deal
            .outcomes
            .first()
            .ok_or_else(|| AdapterError::Validation {
                reason: "deal has no outcomes".into(),
            })?;

        info!(id, tag = %outcome.tag, "deal resolved");
        Ok(Resolution {
            result: outcome.tag,
            error: None,
        })
    }
}
