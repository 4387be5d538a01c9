pub mod config;
pub mod error;
pub mod types;

pub use config::{ClientConfig, OutputFormat};
pub use error::{ClientError, ConfigError, InputError};
pub use types::{
    Alternative, AudioEncoding, AudioInput, AudioSource, RecognitionConfig, RecognitionOptions,
    RecognitionRequest, RecognitionResponse, RecognitionResult, WordInfo, ICELANDIC,
};
