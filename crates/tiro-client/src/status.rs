use crate::proto::rpc;
use prost::Message;
use tiro_core::ClientError;
use tonic::{Code, Status};

const BAD_REQUEST: &str = "google.rpc.BadRequest";
const ERROR_INFO: &str = "google.rpc.ErrorInfo";

/// The server packs details under its own type URL prefix, so only the
/// message name after the last `/` is compared.
fn type_name(type_url: &str) -> &str {
    type_url.rsplit('/').next().unwrap_or(type_url)
}

fn describe_any(any: &prost_types::Any) -> Vec<String> {
    match type_name(&any.type_url) {
        BAD_REQUEST => match rpc::BadRequest::decode(any.value.as_slice()) {
            Ok(bad_request) => bad_request
                .field_violations
                .into_iter()
                .map(|v| format!("{}: {}", v.field, v.description))
                .collect(),
            Err(e) => vec![format!("undecodable {BAD_REQUEST}: {e}")],
        },
        ERROR_INFO => match rpc::ErrorInfo::decode(any.value.as_slice()) {
            Ok(info) => vec![format!("{} ({})", info.reason, info.domain)],
            Err(e) => vec![format!("undecodable {ERROR_INFO}: {e}")],
        },
        _ => vec![format!("unknown error detail type: {}", any.type_url)],
    }
}

/// Decode a serialized `google.rpc.Status` into human readable lines.
pub fn decode_details(details: &[u8]) -> Vec<String> {
    if details.is_empty() {
        return Vec::new();
    }
    match rpc::Status::decode(details) {
        Ok(status) => status.details.iter().flat_map(describe_any).collect(),
        Err(e) => {
            tracing::debug!("ignoring undecodable status details: {e}");
            Vec::new()
        }
    }
}

/// Render an error and its `source()` chain on one line.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// `Unavailable` means the call never reached the service; everything else
/// was answered by it.
pub fn status_to_error(status: Status) -> ClientError {
    if status.code() == Code::Unavailable {
        let mut message = status.message().to_string();
        if let Some(cause) = std::error::Error::source(&status) {
            message.push_str(": ");
            message.push_str(&error_chain(cause));
        }
        return ClientError::Transport(message);
    }
    ClientError::Service {
        code: format!("{:?}", status.code()),
        message: status.message().to_string(),
        details: decode_details(status.details()),
    }
}
