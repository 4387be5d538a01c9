use crate::offset::format_offset;
use std::io::Write;
use tiro_core::{Alternative, RecognitionResponse};

fn timestamped(alternative: &Alternative) -> String {
    alternative
        .words
        .iter()
        .map(|w| format!("{}<{}>", w.word, format_offset(w.end_time)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `index<TAB>text` line per alternative; the index restarts at 1 for
/// every result. With `timestamp_first`, the top alternative of each result
/// prints its words with end offsets instead of the transcript.
pub fn write_tsv<W: Write>(
    response: &RecognitionResponse,
    timestamp_first: bool,
    out: &mut W,
) -> std::io::Result<()> {
    for result in &response.results {
        for (idx, alternative) in result.alternatives.iter().enumerate() {
            if timestamp_first && idx == 0 {
                writeln!(out, "{}\t{}", idx + 1, timestamped(alternative))?;
            } else {
                writeln!(out, "{}\t{}", idx + 1, alternative.transcript)?;
            }
        }
    }
    Ok(())
}
