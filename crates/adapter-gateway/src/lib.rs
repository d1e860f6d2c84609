//! # Adapter Gateway
//!
//! HTTP boundary for the conditional-payment adapter. Exposes the two
//! core operations over JSON:
//!
//! - `POST /propose_deal`: sign and store a proposed deal
//! - `POST /resolve_deal`: return the outcome tag for a deal id
//! - `GET /health`: liveness, signer address and deal count
//!
//! All transport plumbing lives here; correctness lives in
//! `adapter-core`. Every documented error condition maps to a distinct
//! HTTP status and a stable `code` string in the response body.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod router;

pub use config::AdapterConfig;
pub use error::ApiError;
pub use router::{build_router, AppState};
