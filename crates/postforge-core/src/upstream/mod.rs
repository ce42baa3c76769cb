//! Upstream generation backend.

mod client;
mod failure;

pub use client::{build_http_client, resolve_base_url, GeminiClient};
pub use failure::UpstreamFailure;

use async_trait::async_trait;
use postforge_types::GenerationConfig;

/// Something that turns a prompt plus persona/safety config into text.
///
/// The gateway only sees this trait, so tests can script failures without
/// a network.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, UpstreamFailure>;
}
