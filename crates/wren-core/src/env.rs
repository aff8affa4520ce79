//! Development-mode environment file loading.

use std::fmt;
use std::path::Path;

/// Marker file whose presence switches the process into dev mode.
pub const DEV_ENV_FILE: &str = ".env.dev";

/// Which environment the process is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvMode {
    Dev,
    Prod,
}

impl EnvMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvMode::Dev => "dev",
            EnvMode::Prod => "prod",
        }
    }
}

impl fmt::Display for EnvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load `.env.dev` overrides from the working directory when the file
/// exists. Absence of the file is the normal production case.
#[deprecated(note = "use `Settings::from_env` with deployment-managed variables instead")]
pub fn load_env_vars() -> EnvMode {
    load_env_vars_from(Path::new("."))
}

fn load_env_vars_from(dir: &Path) -> EnvMode {
    let marker = dir.join(DEV_ENV_FILE);
    if marker.exists() {
        // Override semantics: the dev file wins over already-set variables
        dotenvy::from_path_override(&marker).ok();
        return EnvMode::Dev;
    }
    EnvMode::Prod
}
