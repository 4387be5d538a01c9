pub mod convert;
pub mod grpc_client;
pub mod proto;
pub mod service_trait;
pub mod status;

pub use grpc_client::{ChannelSettings, GrpcSpeechClient};
pub use service_trait::{recognize_once, SpeechService};
