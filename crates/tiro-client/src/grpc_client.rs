use crate::convert::{request_to_wire, response_from_wire};
use crate::proto::speech::{RecognizeRequest, RecognizeResponse};
use crate::service_trait::SpeechService;
use crate::status::{error_chain, status_to_error};
use async_trait::async_trait;
use tiro_core::{ClientError, RecognitionRequest, RecognitionResponse};
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

const RECOGNIZE_PATH: &str = "/tiro.speech.v1alpha.Speech/Recognize";

/// Where and how to open the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSettings {
    /// `host:port`, or a full `http://` / `https://` URI.
    pub address: String,
    pub use_tls: bool,
}

impl ChannelSettings {
    pub fn new(address: impl Into<String>, use_tls: bool) -> Self {
        Self {
            address: address.into(),
            use_tls,
        }
    }

    /// An explicit scheme in the address wins over `use_tls`.
    pub fn endpoint_uri(&self) -> String {
        if self.address.contains("://") {
            self.address.clone()
        } else if self.use_tls {
            format!("https://{}", self.address)
        } else {
            format!("http://{}", self.address)
        }
    }
}

fn transport_error(err: tonic::transport::Error) -> ClientError {
    ClientError::Transport(error_chain(&err))
}

/// A connected `tiro.speech.v1alpha.Speech` client. The underlying channel
/// is closed when this value is dropped.
pub struct GrpcSpeechClient {
    inner: tonic::client::Grpc<Channel>,
    uri: String,
}

impl GrpcSpeechClient {
    pub async fn connect(settings: &ChannelSettings) -> Result<Self, ClientError> {
        let uri = settings.endpoint_uri();
        let mut endpoint = Endpoint::from_shared(uri.clone())
            .map_err(|e| ClientError::InvalidAddress(format!("{uri}: {e}")))?;

        let tls = uri.starts_with("https://");
        if tls {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_native_roots())
                .map_err(transport_error)?;
        }

        tracing::info!(uri = %uri, tls, "connecting to speech service");
        let channel = endpoint.connect().await.map_err(transport_error)?;
        tracing::debug!(uri = %uri, "channel established");

        Ok(Self {
            inner: tonic::client::Grpc::new(channel),
            uri,
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

#[async_trait]
impl SpeechService for GrpcSpeechClient {
    fn name(&self) -> &str {
        "grpc"
    }

    async fn recognize(
        &mut self,
        request: RecognitionRequest,
    ) -> Result<RecognitionResponse, ClientError> {
        let config = request.config();
        tracing::info!(
            encoding = %config.encoding,
            sample_rate_hertz = config.sample_rate_hertz,
            max_alternatives = config.max_alternatives,
            word_time_offsets = config.enable_word_time_offsets,
            punctuation = config.enable_automatic_punctuation,
            "sending Recognize request"
        );
        let wire = request_to_wire(request);

        self.inner.ready().await.map_err(|e| {
            ClientError::Transport(format!("service was not ready: {}", error_chain(&e)))
        })?;

        let codec: ProstCodec<RecognizeRequest, RecognizeResponse> = ProstCodec::default();
        let path = PathAndQuery::from_static(RECOGNIZE_PATH);
        let response = self
            .inner
            .unary(tonic::Request::new(wire), path, codec)
            .await
            .map_err(status_to_error)?
            .into_inner();

        tracing::debug!(results = response.results.len(), "Recognize returned");
        response_from_wire(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uri_tls() {
        let settings = ChannelSettings::new("speech.tiro.is:443", true);
        assert_eq!(settings.endpoint_uri(), "https://speech.tiro.is:443");
    }

    #[test]
    fn test_endpoint_uri_plaintext() {
        let settings = ChannelSettings::new("localhost:50051", false);
        assert_eq!(settings.endpoint_uri(), "http://localhost:50051");
    }

    #[test]
    fn test_endpoint_uri_explicit_scheme_kept() {
        let settings = ChannelSettings::new("http://10.0.0.5:50051", true);
        assert_eq!(settings.endpoint_uri(), "http://10.0.0.5:50051");
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_address() {
        let settings = ChannelSettings::new("not a host:port", false);
        match GrpcSpeechClient::connect(&settings).await {
            Err(ClientError::InvalidAddress(msg)) => assert!(msg.contains("not a host")),
            Err(other) => panic!("expected InvalidAddress, got {other:?}"),
            Ok(_) => panic!("expected InvalidAddress, got a client"),
        }
    }
}
