//! Domain types for the adapter core.

pub mod deal;
pub mod errors;
