use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tiro_client::{recognize_once, ChannelSettings, GrpcSpeechClient};
use tiro_core::{AudioInput, ClientConfig, OutputFormat, RecognitionOptions, RecognitionRequest};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Tsv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Tsv => OutputFormat::Tsv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Transcribe an audio file with the Tiro speech service.
#[derive(Parser, Debug)]
#[command(name = "tiro-recognize")]
struct Cli {
    /// Audio file (.wav, .flac or .mp3), or an http(s):// URI the server fetches
    audio_file: String,

    /// Server to connect to [default: speech.tiro.is:443]
    #[arg(short = 'c', long)]
    server_url: Option<String>,

    /// Sample rate of audio_file in Hertz [default: 16000]
    #[arg(short = 'r', long)]
    sample_rate_hertz: Option<u32>,

    /// Disable timestamp output on top result
    #[arg(long)]
    no_timestamp_first: bool,

    /// Return up to N best results [default: 2]
    #[arg(short = 'n', long, value_name = "N")]
    nbest: Option<u32>,

    /// Automatically punctuate the transcript
    #[arg(long)]
    automatic_punctuation: bool,

    /// Connect without TLS
    #[arg(long)]
    insecure: bool,

    /// Output format [default: tsv]
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "tiro_client=trace" [default: warn]
    #[arg(long)]
    log_level: Option<String>,
}

/// Settings after layering CLI flags over the config file over defaults.
#[derive(Debug, PartialEq)]
struct Settings {
    channel: ChannelSettings,
    options: RecognitionOptions,
    format: OutputFormat,
    log_level: String,
}

impl Settings {
    fn resolve(cli: &Cli, config: ClientConfig) -> Self {
        let mut options = config.recognition.to_options();
        if let Some(rate) = cli.sample_rate_hertz {
            options.sample_rate_hertz = rate;
        }
        if let Some(n) = cli.nbest {
            options.max_alternatives = n;
        }
        if cli.no_timestamp_first {
            options.enable_word_time_offsets = false;
        }
        if cli.automatic_punctuation {
            options.enable_automatic_punctuation = true;
        }

        let address = cli.server_url.clone().unwrap_or(config.client.server_url);
        let use_tls = config.client.use_tls && !cli.insecure;

        Self {
            channel: ChannelSettings::new(address, use_tls),
            options,
            format: cli.format.map(OutputFormat::from).unwrap_or(config.output.format),
            log_level: cli.log_level.clone().unwrap_or(config.general.log_level),
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::Registry::default().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false),
    );

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ClientConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {path:?}"))?,
        None => ClientConfig::default(),
    };
    let settings = Settings::resolve(&cli, config);

    init_tracing(&settings.log_level)?;
    tracing::debug!(channel = ?settings.channel, options = ?settings.options, "resolved settings");

    let input = AudioInput::open(&cli.audio_file)
        .with_context(|| format!("cannot use audio source '{}'", cli.audio_file))?;
    let timestamp_first = settings.options.enable_word_time_offsets;
    let request = RecognitionRequest::new(input, &settings.options)
        .context("failed to build recognition request")?;

    let client = GrpcSpeechClient::connect(&settings.channel)
        .await
        .with_context(|| format!("failed to connect to {}", settings.channel.address))?;
    tracing::debug!(uri = client.uri(), "connected");
    let response = recognize_once(client, request)
        .await
        .context("Recognize request failed")?;

    tracing::info!(
        results = response.results.len(),
        alternatives = response.alternative_count(),
        "recognition finished"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    tiro_output::render(settings.format, &response, timestamp_first, &mut out)
        .context("failed to write results")?;
    out.flush().context("failed to write results")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tiro-recognize").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = Settings::resolve(&parse(&["sample.wav"]), ClientConfig::default());
        assert_eq!(settings.channel, ChannelSettings::new("speech.tiro.is:443", true));
        assert_eq!(settings.options, RecognitionOptions::default());
        assert_eq!(settings.format, OutputFormat::Tsv);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_cli_flags_map_to_options() {
        let cli = parse(&[
            "clip.flac",
            "-c",
            "localhost:50051",
            "-r",
            "8000",
            "-n",
            "4",
            "--no-timestamp-first",
            "--automatic-punctuation",
            "--insecure",
            "--format",
            "json",
        ]);
        let settings = Settings::resolve(&cli, ClientConfig::default());
        assert_eq!(settings.channel, ChannelSettings::new("localhost:50051", false));
        assert_eq!(settings.options.sample_rate_hertz, 8000);
        assert_eq!(settings.options.max_alternatives, 4);
        assert!(!settings.options.enable_word_time_offsets);
        assert!(settings.options.enable_automatic_punctuation);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_overrides_config_and_config_overrides_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
[general]
log_level = "info"

[client]
server_url = "asr.example:443"

[recognition]
sample_rate_hertz = 44100
nbest = 7
"#,
        )
        .unwrap();
        let settings = Settings::resolve(&parse(&["a.mp3", "-n", "1"]), config);
        assert_eq!(settings.channel.address, "asr.example:443");
        assert_eq!(settings.options.sample_rate_hertz, 44100);
        assert_eq!(settings.options.max_alternatives, 1);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_audio_file_is_required() {
        let result = Cli::try_parse_from(["tiro-recognize"]);
        assert!(result.is_err());
    }
}
