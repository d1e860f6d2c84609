//! # Adapter Test Suite
//!
//! Unified test crate for the conditional-payment adapter.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── end_to_end.rs   # Canonical deal-parameter scenario through the router
//!     └── properties.rs   # Id uniqueness, determinism, resolution stability
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p adapter-tests
//! cargo test -p adapter-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
