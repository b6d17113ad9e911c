//! Basic example showing how a driver wrapper derives its trace options.
//!
//! Run with: cargo run --example basic

use sqltrace_options::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// What an instrumented driver does at construction time.
fn wrap_driver(options: impl IntoIterator<Item = TraceOption>) -> TraceOptions {
    TraceOptions::from_options(options)
}

fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqltrace_options=trace".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Option 1: Defaults, nothing traced
    let options = TraceOptions::default();
    tracing::info!(%options, "Default driver");

    // Option 2: Selected capabilities
    let options = wrap_driver([TraceOption::ping(true), TraceOption::rows_affected(true)]);
    tracing::info!(%options, "Selective driver");

    // Option 3: Everything except root spans (development builds)
    let options = wrap_driver([TraceOption::options(TRACE_ALL), TraceOption::allow_root(false)]);
    tracing::info!(%options, "Development driver");

    // The driver reads flags when deciding what to record
    let record_params = options.query && options.query_params;
    tracing::info!(record_params, "Parameter recording");
    for capability in Capability::ALL {
        tracing::debug!(%capability, enabled = options.get(capability), "Capability");
    }
}
