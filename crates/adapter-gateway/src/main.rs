//! Adapter entry point: load config from the environment, construct
//! the signing identity (failing fast on a bad key), and serve until
//! interrupted.

use adapter_core::SigningIdentity;
use adapter_gateway::{build_router, AdapterConfig, AppState};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = AdapterConfig::from_env();
    if config.uses_dev_key() {
        warn!("using the built-in development signing key; set ADAPTER_KEY in production");
    }

    // A bad key is a process misconfiguration: abort before binding.
    let identity = Arc::new(
        SigningIdentity::from_hex(&config.key_hex)
            .context("ADAPTER_KEY does not hold a valid secp256k1 private key")?,
    );
    info!(signer = %identity.address_hex(), "signing identity ready");

    let addr = config.bind_addr();
    let router = build_router(AppState::new(identity));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "adapter listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await
        .context("server error")?;

    info!("adapter stopped");
    Ok(())
}
