//! Tracing setup for host binaries.
//!
//! The dispatcher only emits `tracing` events; installing a subscriber is
//! left to whoever owns the process. [`init`] is the usual choice for a
//! function runtime: JSON lines on stdout, filtered by `RUST_LOG`.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::consts::DEFAULT_LOG_LEVEL;

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line. What log collectors expect.
    #[default]
    Json,
    /// Single-line human readable.
    Compact,
    /// Multi-line human readable, for local runs.
    Pretty,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub default_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            default_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Install the global subscriber with [`LoggingConfig::default`].
pub fn init() -> Result<()> {
    init_with_config(&LoggingConfig::default())
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_with_config(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    }
    .context("failed to initialize tracing subscriber")
}
