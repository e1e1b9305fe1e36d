//! # Logging Setup
//!
//! Installs the global `tracing` subscriber. Output goes to stdout, either as
//! human-readable lines or as bunyan-style JSON when `LOG_FORMAT=json`.
//! Filtering follows `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]. The
//! startup announcement on [`STARTUP_LOG_TARGET`] is kept at `info` either way.

use std::env;

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::utils::constant::{DEFAULT_LOG_FILTER, LOG_FORMAT_VAR, STARTUP_LOG_TARGET};

/// Log output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Picks the format from the value of `LOG_FORMAT`. Unknown values mean pretty.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Filter directives for the given `RUST_LOG` value, with the startup
/// target appended so it cannot be filtered out.
pub fn filter_directives(rust_log: Option<&str>) -> String {
    let base = rust_log
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER);
    format!("{base},{STARTUP_LOG_TARGET}=info")
}

/// Installs the global subscriber. Must be called once, before the first log.
pub fn init_tracing() {
    let format = LogFormat::from_value(env::var(LOG_FORMAT_VAR).ok().as_deref());
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = EnvFilter::new(filter_directives(rust_log.as_deref()));

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").to_string(),
                std::io::stdout,
            ))
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
