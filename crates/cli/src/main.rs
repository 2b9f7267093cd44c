//! Webhook handshake entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Load configuration** from the environment (a `.env` file is honoured).
//! 2. **Wire observability**: a JSON `tracing-subscriber` layer on stdout,
//!    plus OTLP export when `OTEL_EXPORTER_OTLP_ENDPOINT` is set.
//! 3. **Construct infrastructure**: the HTTP requestor and submitter from
//!    the `transport` crate, injected into a [`handshake::Flow`].
//! 4. **Run the flow once**.
//!
//! Only configuration and start-up problems produce a non-zero exit code.
//! The flow's own outcome is logged and never fails the process.

mod config;
mod observability;

use anyhow::Context as _;
use handshake::Flow;
use tracing::info;
use transport::{http_client, HttpQuerySubmitter, HttpWebhookRequestor};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("invalid configuration")?;

    let _otel_guard = observability::init(&config.observability)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        registration_url = %config.registration_url,
        "Starting webhook handshake"
    );

    let client = http_client().context("failed to build HTTP client")?;
    let flow = Flow::new(
        config.identity,
        HttpWebhookRequestor::new(client.clone(), config.registration_url),
        HttpQuerySubmitter::new(client),
    );

    let outcome = flow.run_once().await;
    info!(submitted = outcome.is_submitted(), "Webhook handshake finished");

    Ok(())
}
