use serde::Serialize;
use std::io::Write;
use tiro_core::{Alternative, RecognitionResponse, WordInfo};

#[derive(Serialize)]
struct JsonWord<'a> {
    word: &'a str,
    start_time: f64,
    end_time: f64,
}

#[derive(Serialize)]
struct JsonAlternative<'a> {
    transcript: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f32>,
    words: Vec<JsonWord<'a>>,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    alternatives: Vec<JsonAlternative<'a>>,
}

#[derive(Serialize)]
struct JsonResponse<'a> {
    results: Vec<JsonResult<'a>>,
}

impl<'a> From<&'a WordInfo> for JsonWord<'a> {
    fn from(w: &'a WordInfo) -> Self {
        Self {
            word: &w.word,
            start_time: w.start_time.as_secs_f64(),
            end_time: w.end_time.as_secs_f64(),
        }
    }
}

impl<'a> From<&'a Alternative> for JsonAlternative<'a> {
    fn from(alt: &'a Alternative) -> Self {
        Self {
            transcript: &alt.transcript,
            confidence: alt.confidence,
            words: alt.words.iter().map(JsonWord::from).collect(),
        }
    }
}

/// Pretty-printed JSON with times in seconds, followed by a newline.
pub fn write_json<W: Write>(response: &RecognitionResponse, out: &mut W) -> std::io::Result<()> {
    let doc = JsonResponse {
        results: response
            .results
            .iter()
            .map(|r| JsonResult {
                alternatives: r.alternatives.iter().map(JsonAlternative::from).collect(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}
