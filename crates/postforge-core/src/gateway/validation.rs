use postforge_types::{
    ClientError, GenerateRequestBody, GenerationMode, GenerationRequest, MAX_PROMPT_CHARS,
};

/// Shape validation: the body must be a JSON object whose `prompt` and
/// `mode` are strings when present.
pub fn parse_body(bytes: &[u8]) -> Result<GenerateRequestBody, ClientError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|_| ClientError::MalformedRequest)?;
    if !value.is_object() {
        return Err(ClientError::MalformedRequest);
    }
    serde_json::from_value(value).map_err(|_| ClientError::MalformedRequest)
}

/// Content validation. The prompt is kept as sent; only emptiness is
/// judged on the trimmed text.
pub fn validate(body: GenerateRequestBody) -> Result<GenerationRequest, ClientError> {
    let prompt = body.prompt.unwrap_or_default();
    if prompt.trim().is_empty() {
        return Err(ClientError::EmptyPrompt);
    }
    if prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err(ClientError::PromptTooLong);
    }
    Ok(GenerationRequest { prompt, mode: GenerationMode::from_wire(body.mode.as_deref()) })
}

/// Steps 1 and 2 together.
pub fn parse_request(bytes: &[u8]) -> Result<GenerationRequest, ClientError> {
    validate(parse_body(bytes)?)
}
