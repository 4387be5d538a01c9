use crate::proto::speech::{
    self, recognition_audio, recognition_config, RecognitionAudio, RecognizeRequest,
    RecognizeResponse,
};
use std::time::Duration;
use tiro_core::{
    Alternative, AudioEncoding, AudioSource, ClientError, RecognitionRequest, RecognitionResponse,
    RecognitionResult, WordInfo,
};

pub fn encoding_to_wire(encoding: AudioEncoding) -> recognition_config::AudioEncoding {
    match encoding {
        AudioEncoding::Linear16 => recognition_config::AudioEncoding::Linear16,
        AudioEncoding::Flac => recognition_config::AudioEncoding::Flac,
        AudioEncoding::Mp3 => recognition_config::AudioEncoding::Mp3,
    }
}

pub fn request_to_wire(request: RecognitionRequest) -> RecognizeRequest {
    let (config, audio) = request.into_parts();

    let audio_source = match audio {
        AudioSource::Content(bytes) => recognition_audio::AudioSource::Content(bytes),
        AudioSource::Uri(uri) => recognition_audio::AudioSource::Uri(uri),
    };

    RecognizeRequest {
        config: Some(speech::RecognitionConfig {
            encoding: encoding_to_wire(config.encoding) as i32,
            sample_rate_hertz: config.sample_rate_hertz,
            language_code: config.language_code.to_string(),
            max_alternatives: config.max_alternatives,
            enable_word_time_offsets: config.enable_word_time_offsets,
            enable_automatic_punctuation: config.enable_automatic_punctuation,
        }),
        audio: Some(RecognitionAudio {
            audio_source: Some(audio_source),
        }),
    }
}

fn offset(word: &str, value: Option<prost_types::Duration>) -> Result<Duration, ClientError> {
    match value {
        None => Ok(Duration::ZERO),
        Some(d) => Duration::try_from(d).map_err(|e| {
            ClientError::InvalidResponse(format!("word '{word}' has an invalid time offset: {e}"))
        }),
    }
}

fn word_from_wire(word: speech::WordInfo) -> Result<WordInfo, ClientError> {
    let start_time = offset(&word.word, word.start_time)?;
    let end_time = offset(&word.word, word.end_time)?;
    Ok(WordInfo {
        word: word.word,
        start_time,
        end_time,
    })
}

fn alternative_from_wire(alt: speech::SpeechRecognitionAlternative) -> Result<Alternative, ClientError> {
    let words = alt
        .words
        .into_iter()
        .map(word_from_wire)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Alternative {
        transcript: alt.transcript,
        // proto3 has no presence for scalars; zero means "not set".
        confidence: (alt.confidence != 0.0).then_some(alt.confidence),
        words,
    })
}

pub fn response_from_wire(response: RecognizeResponse) -> Result<RecognitionResponse, ClientError> {
    let results = response
        .results
        .into_iter()
        .map(|result| {
            let alternatives = result
                .alternatives
                .into_iter()
                .map(alternative_from_wire)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(RecognitionResult { alternatives })
        })
        .collect::<Result<Vec<_>, ClientError>>()?;
    Ok(RecognitionResponse { results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiro_core::{AudioInput, RecognitionOptions};

    fn request(source: AudioSource, encoding: AudioEncoding) -> RecognitionRequest {
        let input = AudioInput { source, encoding };
        RecognitionRequest::new(input, &RecognitionOptions::default()).unwrap()
    }

    fn wire_duration(seconds: i64, nanos: i32) -> Option<prost_types::Duration> {
        Some(prost_types::Duration { seconds, nanos })
    }

    #[test]
    fn test_encoding_wire_values() {
        assert_eq!(encoding_to_wire(AudioEncoding::Linear16) as i32, 1);
        assert_eq!(encoding_to_wire(AudioEncoding::Flac) as i32, 2);
        assert_eq!(encoding_to_wire(AudioEncoding::Mp3) as i32, 8);
    }

    #[test]
    fn test_request_to_wire_content() {
        let wire = request_to_wire(request(AudioSource::Content(vec![7, 8]), AudioEncoding::Flac));
        let config = wire.config.unwrap();
        assert_eq!(config.encoding, recognition_config::AudioEncoding::Flac as i32);
        assert_eq!(config.language_code, "is-IS");
        assert_eq!(config.sample_rate_hertz, 16000);
        assert_eq!(config.max_alternatives, 2);
        assert!(config.enable_word_time_offsets);
        assert!(!config.enable_automatic_punctuation);
        assert_eq!(
            wire.audio.unwrap().audio_source,
            Some(recognition_audio::AudioSource::Content(vec![7, 8]))
        );
    }

    #[test]
    fn test_request_to_wire_uri() {
        let uri = "https://example.com/a.wav".to_string();
        let wire = request_to_wire(request(AudioSource::Uri(uri.clone()), AudioEncoding::Linear16));
        assert_eq!(
            wire.audio.unwrap().audio_source,
            Some(recognition_audio::AudioSource::Uri(uri))
        );
    }

    #[test]
    fn test_response_from_wire_keeps_order_and_offsets() {
        let wire = RecognizeResponse {
            results: vec![speech::SpeechRecognitionResult {
                alternatives: vec![
                    speech::SpeechRecognitionAlternative {
                        transcript: "halló heimur".to_string(),
                        confidence: 0.0,
                        words: vec![
                            speech::WordInfo {
                                start_time: wire_duration(0, 0),
                                end_time: wire_duration(0, 500_000_000),
                                word: "halló".to_string(),
                            },
                            speech::WordInfo {
                                start_time: wire_duration(0, 500_000_000),
                                end_time: wire_duration(1, 0),
                                word: "heimur".to_string(),
                            },
                        ],
                    },
                    speech::SpeechRecognitionAlternative {
                        transcript: "halló heimurinn".to_string(),
                        confidence: 0.25,
                        words: Vec::new(),
                    },
                ],
            }],
        };

        let response = response_from_wire(wire).unwrap();
        let alternatives = &response.results[0].alternatives;
        assert_eq!(alternatives.len(), 2);
        assert_eq!(alternatives[0].words[0].word, "halló");
        assert_eq!(alternatives[0].words[0].end_time, Duration::from_millis(500));
        assert_eq!(alternatives[0].words[1].end_time, Duration::from_secs(1));
        assert_eq!(alternatives[0].confidence, None);
        assert_eq!(alternatives[1].transcript, "halló heimurinn");
        assert_eq!(alternatives[1].confidence, Some(0.25));
    }

    #[test]
    fn test_missing_offsets_default_to_zero() {
        let word = word_from_wire(speech::WordInfo {
            start_time: None,
            end_time: None,
            word: "já".to_string(),
        })
        .unwrap();
        assert_eq!(word.start_time, Duration::ZERO);
        assert_eq!(word.end_time, Duration::ZERO);
    }

    #[test]
    fn test_negative_offset_rejected() {
        let result = word_from_wire(speech::WordInfo {
            start_time: wire_duration(-1, 0),
            end_time: wire_duration(0, 0),
            word: "nei".to_string(),
        });
        match result {
            Err(ClientError::InvalidResponse(msg)) => assert!(msg.contains("nei")),
            other => panic!("expected InvalidResponse, got {other:?}"),
        }
    }
}
