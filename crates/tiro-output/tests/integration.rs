use std::time::Duration;
use tiro_core::{
    Alternative, OutputFormat, RecognitionResponse, RecognitionResult, WordInfo,
};

fn hello_world_response() -> RecognitionResponse {
    RecognitionResponse {
        results: vec![RecognitionResult {
            alternatives: vec![
                Alternative {
                    transcript: "hello world".to_string(),
                    confidence: None,
                    words: vec![
                        WordInfo {
                            word: "hello".to_string(),
                            start_time: Duration::ZERO,
                            end_time: Duration::from_millis(500),
                        },
                        WordInfo {
                            word: "world".to_string(),
                            start_time: Duration::from_millis(500),
                            end_time: Duration::from_secs(1),
                        },
                    ],
                },
                Alternative {
                    transcript: "hello word".to_string(),
                    confidence: None,
                    words: Vec::new(),
                },
            ],
        }],
    }
}

#[test]
fn test_render_tsv_with_timestamps() {
    let mut out = Vec::new();
    tiro_output::render(OutputFormat::Tsv, &hello_world_response(), true, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1\thello<0:00:00.500000> world<0:00:01>\n2\thello word\n"
    );
}

#[test]
fn test_render_tsv_without_timestamps() {
    let mut out = Vec::new();
    tiro_output::render(OutputFormat::Tsv, &hello_world_response(), false, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\thello world\n2\thello word\n");
}

#[test]
fn test_render_json_ignores_timestamp_toggle() {
    let mut with = Vec::new();
    let mut without = Vec::new();
    tiro_output::render(OutputFormat::Json, &hello_world_response(), true, &mut with).unwrap();
    tiro_output::render(OutputFormat::Json, &hello_world_response(), false, &mut without).unwrap();
    assert_eq!(with, without);
}
