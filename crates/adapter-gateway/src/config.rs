//! Adapter configuration, loaded from the environment at startup.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

/// Default listen port when `ADAPTER_PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Built-in development signing key. Fine for local testing; any real
/// deployment must inject its own key via `ADAPTER_KEY`, and startup
/// warns loudly when this one is in use.
pub const DEV_KEY_HEX: &str =
    "0x388c684f0ba1ef5017716adb5d21a053ea8e90277d0868337519f97bede61418";

/// Process configuration: listen port and signing key material.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// TCP port the HTTP server binds on.
    pub port: u16,
    /// Hex-encoded secp256k1 private key (`0x` prefix optional).
    pub key_hex: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            key_hex: DEV_KEY_HEX.to_string(),
        }
    }
}

impl AdapterConfig {
    /// Load configuration, overriding defaults from `ADAPTER_PORT` and
    /// `ADAPTER_KEY`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("ADAPTER_PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(_) => warn!(value = %port, "ADAPTER_PORT is not a valid port, using default"),
            }
        }
        if let Ok(key) = std::env::var("ADAPTER_KEY") {
            config.key_hex = key;
        }

        config
    }

    /// Socket address to bind (all interfaces).
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }

    /// Whether the built-in development key is in use.
    pub fn uses_dev_key(&self) -> bool {
        self.key_hex == DEV_KEY_HEX
    }
}
