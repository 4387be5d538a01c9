use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("environment variable not found: {0}")]
    EnvVarNotFound(String),
}

/// Failures detected locally, before any connection is attempted.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unsupported extension '.{0}', expected one of .wav, .flac, .mp3")]
    UnsupportedExtension(String),

    #[error("audio source has no file extension: {0}")]
    MissingExtension(String),

    #[error("failed to read audio file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server address: {0}")]
    InvalidAddress(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("service returned {}: {}{}", .code, .message, render_details(.details))]
    Service {
        code: String,
        message: String,
        details: Vec<String>,
    },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

fn render_details(details: &[String]) -> String {
    details.iter().map(|d| format!("\n  {d}")).collect()
}
