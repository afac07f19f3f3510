//! Diagnostic tracing for the roster CLI.
//!
//! stdout carries only the roster report (text or `--json`), so it can be
//! piped or diffed. Every `tracing` event from `select`, `apply_each`,
//! `load_csv` and the registry goes to stderr. Level comes from `RUST_LOG`,
//! `warn` when unset, e.g. `RUST_LOG=roster=debug roster --json`.

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber. Call once, at the top of `main`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false).compact())
        .init();
}
