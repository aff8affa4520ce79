use thiserror::Error;

/// Configuration problems surfaced during process setup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid logging level: {0}")]
    InvalidLogLevel(String),
}

/// Failures from the SQL/summary dedup helper.
#[derive(Error, Debug)]
pub enum DedupError {
    #[error("record is missing required string field `{0}`")]
    MissingField(&'static str),
}
