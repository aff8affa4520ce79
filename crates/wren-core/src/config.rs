//! Process configuration.
//!
//! `Settings` is a plain value so components can take it as a parameter in
//! tests; `settings()` exposes the process-wide instance loaded from the
//! environment on first access.

use std::env;
use std::sync::OnceLock;

const DEFAULT_LANGFUSE_HOST: &str = "https://cloud.langfuse.com";

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Runtime settings shared across the service.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Emit elapsed-time log lines from the timing wrappers.
    pub enable_timer: bool,
    /// Severity name fed to the logging setup (validated there, not here).
    pub logging_level: String,
    /// Langfuse trace backend settings.
    pub langfuse_enable: bool,
    pub langfuse_public_key: String,
    pub langfuse_secret_key: String,
    pub langfuse_host: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_timer: false,
            logging_level: "INFO".to_string(),
            langfuse_enable: false,
            langfuse_public_key: String::new(),
            langfuse_secret_key: String::new(),
            langfuse_host: DEFAULT_LANGFUSE_HOST.to_string(),
        }
    }
}

impl Settings {
    /// Build settings from process environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enable_timer: env_flag("ENABLE_TIMER", defaults.enable_timer),
            logging_level: env::var("LOGGING_LEVEL").unwrap_or(defaults.logging_level),
            langfuse_enable: env_flag("LANGFUSE_ENABLE", defaults.langfuse_enable),
            langfuse_public_key: env::var("LANGFUSE_PUBLIC_KEY")
                .unwrap_or(defaults.langfuse_public_key),
            langfuse_secret_key: env::var("LANGFUSE_SECRET_KEY")
                .unwrap_or(defaults.langfuse_secret_key),
            langfuse_host: env::var("LANGFUSE_HOST").unwrap_or(defaults.langfuse_host),
        }
    }
}

/// Process-wide settings, loaded from the environment on first access.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::from_env)
}

/// Truthy env-var check (accepts "1", "true", "on", "yes" - case insensitive).
fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => matches!(
            value.to_ascii_lowercase().as_str(),
            "1" | "true" | "on" | "yes"
        ),
        Err(_) => default,
    }
}
