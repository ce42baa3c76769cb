//! Upstream protocol types.

pub mod gemini;

pub use gemini::{
    GeminiContent, GeminiErrorBody, GeminiErrorDetail, GeminiPart, GeminiRole,
    GenerateContentRequest, GenerateContentResponse, HarmBlockThreshold, HarmCategory,
    SafetySetting,
};
