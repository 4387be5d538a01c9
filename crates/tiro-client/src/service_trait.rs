use async_trait::async_trait;
use tiro_core::{ClientError, RecognitionRequest, RecognitionResponse};

/// Something that can answer a unary `Recognize` call.
///
/// [`GrpcSpeechClient`](crate::GrpcSpeechClient) is the network
/// implementation; tests substitute their own.
#[async_trait]
pub trait SpeechService: Send {
    /// Short name for logs (e.g. `"grpc"`).
    fn name(&self) -> &str;
    /// Issue one recognition call. The request is consumed.
    async fn recognize(
        &mut self,
        request: RecognitionRequest,
    ) -> Result<RecognitionResponse, ClientError>;
}

/// Run exactly one call against `service` and release it afterwards,
/// whether the call succeeded or not.
pub async fn recognize_once<S: SpeechService>(
    mut service: S,
    request: RecognitionRequest,
) -> Result<RecognitionResponse, ClientError> {
    let result = service.recognize(request).await;
    tracing::debug!(service = service.name(), ok = result.is_ok(), "releasing speech service");
    drop(service);
    result
}
