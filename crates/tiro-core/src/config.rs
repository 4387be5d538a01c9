use crate::error::ConfigError;
use crate::types::RecognitionOptions;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub client: ConnectionConfig,

    #[serde(default)]
    pub recognition: RecognitionSection,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConnectionConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(default = "default_true")]
    pub use_tls: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            use_tls: default_true(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecognitionSection {
    #[serde(default = "default_sample_rate")]
    pub sample_rate_hertz: u32,

    #[serde(default = "default_nbest")]
    pub nbest: u32,

    #[serde(default = "default_true")]
    pub timestamp_first: bool,

    #[serde(default)]
    pub automatic_punctuation: bool,
}

impl Default for RecognitionSection {
    fn default() -> Self {
        Self {
            sample_rate_hertz: default_sample_rate(),
            nbest: default_nbest(),
            timestamp_first: default_true(),
            automatic_punctuation: false,
        }
    }
}

impl RecognitionSection {
    pub fn to_options(&self) -> RecognitionOptions {
        RecognitionOptions {
            sample_rate_hertz: self.sample_rate_hertz,
            max_alternatives: self.nbest,
            enable_word_time_offsets: self.timestamp_first,
            enable_automatic_punctuation: self.automatic_punctuation,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `index<TAB>text`, one line per alternative.
    #[default]
    Tsv,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_server_url() -> String {
    "speech.tiro.is:443".to_string()
}

fn default_sample_rate() -> u32 {
    16000
}

fn default_nbest() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

/// Interpolate `${VAR}` patterns with environment variable values.
fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid");
    let mut result = input.to_string();

    for cap in re.captures_iter(input) {
        let var_name = &cap[1];
        let val = std::env::var(var_name)
            .map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;
        result = result.replace(&cap[0], &val);
    }

    Ok(result)
}

impl ClientConfig {
    /// Load configuration from a TOML file, with environment variable interpolation.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let interpolated = interpolate_env_vars(s)?;
        let config: ClientConfig = toml::from_str(&interpolated)?;
        Ok(config)
    }
}
