//! Console logging setup.
//!
//! Validates the configured severity name and installs a colorized stderr
//! subscriber for the whole process.

mod formatter;

pub use formatter::ColorFormatter;

use std::fmt;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;

/// Accepted severity names for service configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// The `tracing` filter this severity maps to. Critical collapses into
    /// ERROR since `tracing` has no tier above it.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        };
        f.write_str(name)
    }
}

/// Install the process-wide console subscriber.
///
/// `name` scopes the default filter directive to the service's own events;
/// `level_str` is the configured severity name, validated against the fixed
/// set before any global state is touched.
///
/// Calling this more than once is a no-op after the first successful
/// installation, so repeated setup cannot stack duplicate output handlers.
pub fn init_logging(name: &str, level_str: &str) -> Result<(), ConfigError> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let level = LogLevel::from_str(level_str)?;

    // RUST_LOG takes precedence, with the configured level as the default
    // for this service's own targets
    // Note: crate names use underscores in tracing targets (wren-core → wren_core)
    let target = name.replace('-', "_");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", target, level.level_filter())));

    let console_layer = fmt::layer()
        .event_format(ColorFormatter)
        .with_ansi(true)
        .with_writer(std::io::stderr);

    // The already-installed outcome is fine: first installation wins
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();

    Ok(())
}
