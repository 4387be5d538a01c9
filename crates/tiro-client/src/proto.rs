//! Wire messages for the subset of the Tiro speech API used by this client.
//!
//! Kept by hand in the shape `prost-build` emits, so the crate builds without
//! `protoc`. Tags follow `tiro/speech/v1alpha/speech.proto` and
//! `google/rpc/{status,error_details}.proto`.

pub mod speech {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RecognitionConfig {
        #[prost(enumeration = "recognition_config::AudioEncoding", tag = "1")]
        pub encoding: i32,
        #[prost(int32, tag = "2")]
        pub sample_rate_hertz: i32,
        #[prost(string, tag = "3")]
        pub language_code: ::prost::alloc::string::String,
        #[prost(int32, tag = "4")]
        pub max_alternatives: i32,
        #[prost(bool, tag = "8")]
        pub enable_word_time_offsets: bool,
        #[prost(bool, tag = "11")]
        pub enable_automatic_punctuation: bool,
    }

    pub mod recognition_config {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum AudioEncoding {
            EncodingUnspecified = 0,
            Linear16 = 1,
            Flac = 2,
            Mp3 = 8,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RecognitionAudio {
        #[prost(oneof = "recognition_audio::AudioSource", tags = "1, 2")]
        pub audio_source: ::core::option::Option<recognition_audio::AudioSource>,
    }

    pub mod recognition_audio {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum AudioSource {
            #[prost(bytes, tag = "1")]
            Content(::prost::alloc::vec::Vec<u8>),
            #[prost(string, tag = "2")]
            Uri(::prost::alloc::string::String),
        }
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RecognizeRequest {
        #[prost(message, optional, tag = "1")]
        pub config: ::core::option::Option<RecognitionConfig>,
        #[prost(message, optional, tag = "2")]
        pub audio: ::core::option::Option<RecognitionAudio>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RecognizeResponse {
        #[prost(message, repeated, tag = "2")]
        pub results: ::prost::alloc::vec::Vec<SpeechRecognitionResult>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SpeechRecognitionResult {
        #[prost(message, repeated, tag = "1")]
        pub alternatives: ::prost::alloc::vec::Vec<SpeechRecognitionAlternative>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SpeechRecognitionAlternative {
        #[prost(string, tag = "1")]
        pub transcript: ::prost::alloc::string::String,
        #[prost(float, tag = "2")]
        pub confidence: f32,
        #[prost(message, repeated, tag = "3")]
        pub words: ::prost::alloc::vec::Vec<WordInfo>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct WordInfo {
        #[prost(message, optional, tag = "1")]
        pub start_time: ::core::option::Option<::prost_types::Duration>,
        #[prost(message, optional, tag = "2")]
        pub end_time: ::core::option::Option<::prost_types::Duration>,
        #[prost(string, tag = "3")]
        pub word: ::prost::alloc::string::String,
    }
}

pub mod rpc {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Status {
        #[prost(int32, tag = "1")]
        pub code: i32,
        #[prost(string, tag = "2")]
        pub message: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "3")]
        pub details: ::prost::alloc::vec::Vec<::prost_types::Any>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct BadRequest {
        #[prost(message, repeated, tag = "1")]
        pub field_violations: ::prost::alloc::vec::Vec<bad_request::FieldViolation>,
    }

    pub mod bad_request {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct FieldViolation {
            #[prost(string, tag = "1")]
            pub field: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub description: ::prost::alloc::string::String,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ErrorInfo {
        #[prost(string, tag = "1")]
        pub reason: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub domain: ::prost::alloc::string::String,
    }
}
