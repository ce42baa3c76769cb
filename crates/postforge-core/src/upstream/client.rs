use async_trait::async_trait;
use postforge_types::protocol::{
    GeminiContent, GeminiPart, GeminiRole, GenerateContentRequest, GenerateContentResponse,
};
use postforge_types::{ConfigError, GeminiConfig, GenerationConfig};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::{GenerationBackend, UpstreamFailure};
use crate::error::AppResult;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Build HTTP client with the configured timeout.
pub fn build_http_client(timeout_secs: u64) -> AppResult<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs.max(1)))
        .tcp_nodelay(true)
        .build()?;
    Ok(client)
}

/// Normalise and validate the API base URL.
pub fn resolve_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/').to_string();
    if let Err(e) = url::Url::parse(&url) {
        return Err(ConfigError::InvalidUpstreamUrl { url, message: e.to_string() });
    }
    Ok(url)
}

/// Gemini `generateContent` client authenticated with an API key.
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client around a pre-built `reqwest::Client`.
    pub fn new(http_client: Client, config: &GeminiConfig) -> Result<Self, ConfigError> {
        let base_url = resolve_base_url(&config.base_url)?;
        Ok(Self {
            http_client,
            base_url,
            model: config.model.trim().to_string(),
            api_key: config.api_key.trim().to_string(),
        })
    }

    /// Build the HTTP client from config as well.
    pub fn from_config(config: &GeminiConfig) -> AppResult<Self> {
        let http_client = build_http_client(config.request_timeout_secs)?;
        let client = Self::new(http_client, config)?;
        info!("[Gemini] Upstream {} (model: {})", client.base_url, client.model);
        Ok(client)
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    /// Wire body for one user prompt.
    pub fn build_request(prompt: &str, config: &GenerationConfig) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![GeminiContent {
                role: Some(GeminiRole::User),
                parts: vec![GeminiPart::text(prompt)],
            }],
            system_instruction: Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(config.system_instruction)],
            }),
            safety_settings: config.safety_settings.clone(),
        }
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, UpstreamFailure> {
        let body = Self::build_request(prompt, config);

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamFailure::from_transport(&e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| UpstreamFailure::from_transport(&e))?;

        if !status.is_success() {
            return Err(UpstreamFailure::from_response(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            UpstreamFailure::new(format!("Failed to parse upstream response: {}", e))
                .with_http_status(status.as_u16())
        })?;

        if let Some(usage) = parsed.usage_metadata.as_ref() {
            debug!(
                "[Gemini] Tokens: prompt={} candidates={} total={}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        parsed.text().ok_or_else(|| {
            UpstreamFailure::new(format!("Text not available. {}", parsed.empty_reason()))
                .with_http_status(status.as_u16())
        })
    }
}
