//! Client-facing errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned to the caller of the generate endpoint.
///
/// The `Display` text is exactly the message sent to the client, so raw
/// upstream details never leak through this type.
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type")]
pub enum ClientError {
    /// Local daily cap reached
    #[error("You've reached your limit of 5 requests per day. Please try again tomorrow.")]
    QuotaExceeded,

    /// Body is not a JSON object of the expected shape
    #[error("Invalid JSON in request.")]
    MalformedRequest,

    /// Prompt missing or whitespace-only
    #[error("Please provide a prompt.")]
    EmptyPrompt,

    /// Prompt longer than the character cap
    #[error("Prompt exceeds maximum length of 40,000 characters.")]
    PromptTooLong,

    /// Upstream signalled 503 / service unavailable
    #[error("The Backend is currently experiencing rate limiting issues, please try again later.")]
    UpstreamOverloaded,

    /// Upstream rejected the request as `INVALID_ARGUMENT`
    #[error("Invalid input. Please try a different prompt.")]
    UpstreamInvalidArgument,

    /// Upstream returned `PERMISSION_DENIED`
    #[error("Content policy violation. Please try a different prompt.")]
    UpstreamPolicyViolation,

    /// Upstream returned `RESOURCE_EXHAUSTED`
    #[error("AI service quota exceeded. Please try again later.")]
    UpstreamQuotaExhausted,

    /// Upstream returned `UNAVAILABLE`
    #[error("AI service is currently unavailable. Please try again later.")]
    UpstreamUnavailable,

    /// Anything the classifier does not recognise
    #[error("Error while generating content. Please try again later.")]
    UpstreamUnknown,
}

impl ClientError {
    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::MalformedRequest
            | Self::EmptyPrompt
            | Self::UpstreamInvalidArgument
            | Self::UpstreamPolicyViolation => 400,
            Self::PromptTooLong => 413,
            Self::QuotaExceeded | Self::UpstreamQuotaExhausted => 429,
            Self::UpstreamUnknown => 500,
            Self::UpstreamOverloaded | Self::UpstreamUnavailable => 503,
        }
    }

    /// Message sent to the client in the `error` field.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Stable snake_case name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::QuotaExceeded => "quota_exceeded",
            Self::MalformedRequest => "malformed_request",
            Self::EmptyPrompt => "empty_prompt",
            Self::PromptTooLong => "prompt_too_long",
            Self::UpstreamOverloaded => "upstream_overloaded",
            Self::UpstreamInvalidArgument => "upstream_invalid_argument",
            Self::UpstreamPolicyViolation => "upstream_policy_violation",
            Self::UpstreamQuotaExhausted => "upstream_quota_exhausted",
            Self::UpstreamUnavailable => "upstream_unavailable",
            Self::UpstreamUnknown => "upstream_unknown",
        }
    }
}
