use axum::http::StatusCode;
use postforge_types::protocol::GeminiErrorBody;
use thiserror::Error;

/// A failed upstream call, reduced to the fields the classifier inspects.
///
/// `message` keeps the raw upstream wording; it is logged, never sent to
/// clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UpstreamFailure {
    /// HTTP status of the upstream response, if one was received
    pub http_status: Option<u16>,
    /// Google RPC status string, e.g. `RESOURCE_EXHAUSTED`
    pub status: Option<String>,
    pub message: String,
}

impl UpstreamFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { http_status: None, status: None, message: message.into() }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_http_status(mut self, code: u16) -> Self {
        self.http_status = Some(code);
        self
    }

    /// Build from a non-2xx response. The message is prefixed with
    /// `[<code> <reason>]` so text-only classification still sees the code.
    pub fn from_response(code: u16, body: &str) -> Self {
        let reason = StatusCode::from_u16(code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status");

        let (status, detail) = match serde_json::from_str::<GeminiErrorBody>(body) {
            Ok(parsed) => (parsed.error.status, parsed.error.message),
            Err(_) => (None, body.trim().to_string()),
        };

        Self {
            http_status: Some(code),
            status,
            message: format!("[{} {}] {}", code, reason, detail),
        }
    }

    /// Build from a transport error (no response received).
    pub fn from_transport(err: &reqwest::Error) -> Self {
        let failure = Self::new(format!("Error fetching from upstream: {}", err));
        if err.is_connect() {
            failure.with_status("UNAVAILABLE")
        } else if err.is_timeout() {
            failure.with_status("DEADLINE_EXCEEDED")
        } else {
            failure
        }
    }

    /// True if `code` is the RPC status or appears in the message.
    pub fn signals(&self, code: &str) -> bool {
        self.status.as_deref() == Some(code) || self.message.contains(code)
    }
}
