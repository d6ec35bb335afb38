use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration parse error: {source}")]
    ConfigParseError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown theme '{0}' (expected \"light\" or \"dark\")")]
    UnknownTheme(String),
}
