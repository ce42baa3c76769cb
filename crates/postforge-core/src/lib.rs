//! # PostForge Core
//!
//! Request admission, quota tracking and the generation gateway behind
//! `POST /api/generate`.
//!
//! ```text
//! postforge-core/src/
//! ├── quota/      # cookie-carried daily counter (admission + reissue)
//! ├── gateway/    # validation, persona selection, upstream error mapping
//! ├── upstream/   # GenerationBackend trait + Gemini HTTP client
//! └── proxy/      # axum state, handlers, router, CORS
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod error;
pub mod gateway;
pub mod proxy;
pub mod quota;
pub mod upstream;

pub use error::{AppError, AppResult};
pub use gateway::Gateway;
pub use quota::{Clock, FixedClock, SystemClock};
pub use upstream::{GeminiClient, GenerationBackend, UpstreamFailure};
