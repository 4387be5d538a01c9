use crate::error::InputError;
use std::path::Path;
use std::time::Duration;

/// Language tag sent with every request.
pub const ICELANDIC: &str = "is-IS";

/// Audio codecs the service accepts, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioEncoding {
    /// Uncompressed 16-bit PCM (`.wav`).
    Linear16,
    Flac,
    Mp3,
}

impl AudioEncoding {
    /// Map a bare extension (no leading dot) to its codec. Matching is exact.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "wav" => Some(Self::Linear16),
            "flac" => Some(Self::Flac),
            "mp3" => Some(Self::Mp3),
            _ => None,
        }
    }

    /// Classify a file name by its extension without touching the filesystem.
    pub fn classify(name: &str) -> Result<Self, InputError> {
        let ext = Path::new(name)
            .extension()
            .ok_or_else(|| InputError::MissingExtension(name.to_string()))?
            .to_string_lossy();
        Self::from_extension(&ext).ok_or_else(|| InputError::UnsupportedExtension(ext.into_owned()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear16 => "LINEAR16",
            Self::Flac => "FLAC",
            Self::Mp3 => "MP3",
        }
    }
}

impl std::fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// Raw file bytes, sent inline.
    Content(Vec<u8>),
    /// Remote location the service fetches itself.
    Uri(String),
}

#[derive(Debug, Clone)]
pub struct AudioInput {
    pub source: AudioSource,
    pub encoding: AudioEncoding,
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

impl AudioInput {
    /// Open a command-line audio argument: `http(s)://` URIs are passed
    /// through, anything else is read from disk.
    pub fn open(source: &str) -> Result<Self, InputError> {
        if is_remote(source) {
            Self::from_uri(source)
        } else {
            Self::load(Path::new(source))
        }
    }

    /// Classify `path` and read it fully. Nothing is read when the extension
    /// is not supported.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let encoding = AudioEncoding::classify(&path.to_string_lossy())?;
        let content = std::fs::read(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = ?path, bytes = content.len(), %encoding, "loaded audio file");
        Ok(Self {
            source: AudioSource::Content(content),
            encoding,
        })
    }

    pub fn from_uri(uri: &str) -> Result<Self, InputError> {
        let without_scheme = uri.split_once("://").map_or(uri, |(_, rest)| rest);
        let path = without_scheme
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let name = match path.split_once('/') {
            Some((_, p)) => p,
            None => "",
        };
        let encoding = AudioEncoding::classify(name).map_err(|e| match e {
            InputError::MissingExtension(_) => InputError::MissingExtension(uri.to_string()),
            other => other,
        })?;
        Ok(Self {
            source: AudioSource::Uri(uri.to_string()),
            encoding,
        })
    }
}

/// Caller-chosen knobs for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionOptions {
    pub sample_rate_hertz: u32,
    pub max_alternatives: u32,
    pub enable_word_time_offsets: bool,
    pub enable_automatic_punctuation: bool,
}

impl Default for RecognitionOptions {
    fn default() -> Self {
        Self {
            sample_rate_hertz: 16000,
            max_alternatives: 2,
            enable_word_time_offsets: true,
            enable_automatic_punctuation: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub encoding: AudioEncoding,
    pub language_code: &'static str,
    pub sample_rate_hertz: i32,
    pub max_alternatives: i32,
    pub enable_word_time_offsets: bool,
    pub enable_automatic_punctuation: bool,
}

/// A fully assembled request. Built once and consumed by the RPC call.
#[derive(Debug)]
pub struct RecognitionRequest {
    config: RecognitionConfig,
    audio: AudioSource,
}

fn wire_int(name: &str, value: u32) -> Result<i32, InputError> {
    i32::try_from(value).map_err(|_| InputError::InvalidOption(format!("{name} out of range: {value}")))
}

impl RecognitionRequest {
    pub fn new(input: AudioInput, options: &RecognitionOptions) -> Result<Self, InputError> {
        let config = RecognitionConfig {
            encoding: input.encoding,
            language_code: ICELANDIC,
            sample_rate_hertz: wire_int("sample rate", options.sample_rate_hertz)?,
            max_alternatives: wire_int("max alternatives", options.max_alternatives)?,
            enable_word_time_offsets: options.enable_word_time_offsets,
            enable_automatic_punctuation: options.enable_automatic_punctuation,
        };
        Ok(Self {
            config,
            audio: input.source,
        })
    }

    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }

    pub fn audio(&self) -> &AudioSource {
        &self.audio
    }

    pub fn into_parts(self) -> (RecognitionConfig, AudioSource) {
        (self.config, self.audio)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordInfo {
    pub word: String,
    pub start_time: Duration,
    pub end_time: Duration,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Alternative {
    pub transcript: String,
    pub confidence: Option<f32>,
    pub words: Vec<WordInfo>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionResult {
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecognitionResponse {
    pub results: Vec<RecognitionResult>,
}

impl RecognitionResponse {
    pub fn alternative_count(&self) -> usize {
        self.results.iter().map(|r| r.alternatives.len()).sum()
    }
}
