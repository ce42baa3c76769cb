//! Domain models for PostForge.

pub mod config;
pub mod generation;
pub mod quota;

pub use config::{GeminiConfig, ServerConfig};
pub use generation::{
    GenerateRequestBody, GenerateResponse, GenerationConfig, GenerationMode, GenerationRequest,
    MAX_PROMPT_CHARS,
};
pub use quota::{QuotaSnapshot, QuotaState, DAILY_REQUEST_LIMIT, QUOTA_COOKIE_PREFIX};
