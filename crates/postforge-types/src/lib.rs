//! # PostForge Types
//!
//! Core types, models, and error definitions for PostForge.
//!
//! - **`error`** - Client-facing error taxonomy and configuration errors
//! - **`models`** - Domain models (quota state, generation request, config)
//! - **`protocol`** - Gemini `generateContent` wire types
//!
//! ## Architecture Role
//!
//! ```text
//!         postforge-types (this crate)
//!                 │
//!                 ▼
//!          postforge-core
//!                 │
//!                 ▼
//!         postforge-server
//! ```

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{ClientError, ConfigError};

pub use models::{
    GeminiConfig, GenerateRequestBody, GenerateResponse, GenerationConfig, GenerationMode,
    GenerationRequest, QuotaSnapshot, QuotaState, ServerConfig, DAILY_REQUEST_LIMIT,
    MAX_PROMPT_CHARS, QUOTA_COOKIE_PREFIX,
};
