pub mod json;
pub mod offset;
pub mod tsv;

pub use json::write_json;
pub use offset::format_offset;
pub use tsv::write_tsv;

use std::io::Write;
use tiro_core::{OutputFormat, RecognitionResponse};

/// Write `response` to `out` in the requested format.
pub fn render<W: Write>(
    format: OutputFormat,
    response: &RecognitionResponse,
    timestamp_first: bool,
    out: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Tsv => write_tsv(response, timestamp_first, out),
        OutputFormat::Json => write_json(response, out),
    }
}
