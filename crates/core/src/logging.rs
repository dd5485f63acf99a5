//! Logging bootstrap built on the tracing ecosystem.
//!
//! The stderr filter comes from `MNEMO_LOG` or `RUST_LOG`, falling back
//! to the configured level. Output is pretty on a TTY and compact
//! otherwise; `MNEMO_LOG_FORMAT` (`pretty` | `compact` | `json`)
//! overrides the detection. Interactive prompt text never goes through
//! tracing; it belongs to the console boundary.

use crate::config::Config;
use crate::error::Result;
use std::env;
use std::io;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format for stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty, human-readable output with colors (default for TTY)
    #[default]
    Pretty,
    /// Compact, single-line output
    Compact,
    /// JSON output (one line per event)
    Json,
}

impl LogFormat {
    /// Parse a log format from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

fn build_env_filter(level: &str) -> EnvFilter {
    let filter = env::var("MNEMO_LOG")
        .ok()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| level.to_string());

    EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn detect_format() -> LogFormat {
    if let Ok(fmt_str) = env::var("MNEMO_LOG_FORMAT")
        && let Some(format) = LogFormat::parse_str(&fmt_str)
    {
        return format;
    }

    if atty::is(atty::Stream::Stderr) { LogFormat::Pretty } else { LogFormat::Compact }
}

/// Initialize the global tracing subscriber.
pub fn init_logging(config: &Config) -> Result<()> {
    let registry = Registry::default().with(build_env_filter(&config.logging.level));

    match detect_format() {
        LogFormat::Pretty => {
            registry
                .with(fmt::layer().pretty().with_writer(io::stderr).with_ansi(true))
                .init();
        }
        LogFormat::Compact => {
            registry.with(fmt::layer().compact().with_writer(io::stderr)).init();
        }
        LogFormat::Json => {
            registry.with(fmt::layer().json().with_writer(io::stderr)).init();
        }
    }

    Ok(())
}
