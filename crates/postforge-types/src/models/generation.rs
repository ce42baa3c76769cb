//! Generation request/response models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::protocol::gemini::{HarmBlockThreshold, HarmCategory, SafetySetting};

/// Longest accepted prompt, in characters.
pub const MAX_PROMPT_CHARS: usize = 40_000;

/// Which persona handles the prompt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Write a new post from a prompt
    Generate,
    /// Rework an existing post
    #[default]
    Edit,
}

impl GenerationMode {
    /// Map the wire value. Only `"generate"` selects generation; everything
    /// else, including `"post"`, falls back to editing.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("generate") => GenerationMode::Generate,
            _ => GenerationMode::Edit,
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Generate => write!(f, "generate"),
            GenerationMode::Edit => write!(f, "edit"),
        }
    }
}

/// Raw JSON body of `POST /api/generate`.
///
/// Both fields are optional at this stage so that a missing prompt is
/// reported as an empty prompt rather than malformed JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GenerateRequestBody {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// A request that passed shape and content validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub mode: GenerationMode,
}

/// Mode-specific upstream configuration. Derived per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub safety_settings: Vec<SafetySetting>,
    pub system_instruction: &'static str,
}

impl GenerationConfig {
    /// Same threshold on every configured harm category.
    pub fn uniform_safety(threshold: HarmBlockThreshold) -> Vec<SafetySetting> {
        HarmCategory::ALL
            .iter()
            .map(|&category| SafetySetting { category, threshold })
            .collect()
    }
}

/// Success body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub content: String,
    pub remaining_requests: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults_to_edit() {
        assert_eq!(GenerationMode::from_wire(Some("generate")), GenerationMode::Generate);
        assert_eq!(GenerationMode::from_wire(Some("post")), GenerationMode::Edit);
        assert_eq!(GenerationMode::from_wire(Some("edit")), GenerationMode::Edit);
        assert_eq!(GenerationMode::from_wire(Some("GENERATE")), GenerationMode::Edit);
        assert_eq!(GenerationMode::from_wire(None), GenerationMode::Edit);
    }

    #[test]
    fn test_uniform_safety_covers_all_categories() {
        let settings = GenerationConfig::uniform_safety(HarmBlockThreshold::BlockLowAndAbove);
        assert_eq!(settings.len(), 4);
        assert!(settings.iter().all(|s| s.threshold == HarmBlockThreshold::BlockLowAndAbove));
    }

    #[test]
    fn test_response_body_shape() {
        let body = GenerateResponse { content: "post".to_string(), remaining_requests: 4 };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"content": "post", "remainingRequests": 4}));
    }
}
