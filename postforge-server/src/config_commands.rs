use anyhow::Result;
use colored::Colorize;
use postforge_types::{ServerConfig, DAILY_REQUEST_LIMIT, MAX_PROMPT_CHARS};

pub fn show_config(config: &ServerConfig, json: bool) -> Result<()> {
    if json {
        let mut value = serde_json::to_value(config)?;
        value["gemini"]["api_key"] = serde_json::Value::String(config.gemini.masked_api_key());
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Server:".cyan().bold());
    println!("  Bind: {}", config.bind_address());
    if config.allowed_origins.is_empty() {
        println!("  CORS: same-origin only");
    } else {
        println!("  CORS: {}", config.allowed_origins.join(", "));
    }
    println!("  Static dir: {}", config.static_dir.as_deref().unwrap_or("-"));

    println!("{}", "Gemini:".cyan().bold());
    println!("  Base URL: {}", config.gemini.base_url);
    println!("  Model: {}", config.gemini.model);
    let key = config.gemini.masked_api_key();
    if config.gemini.has_api_key() {
        println!("  API Key: {}", key);
    } else {
        println!("  API Key: {}", key.yellow());
    }
    println!("  Timeout: {}s", config.gemini.request_timeout_secs);

    println!("{}", "Limits:".cyan().bold());
    println!("  Requests per client per day: {}", DAILY_REQUEST_LIMIT);
    println!("  Max prompt length: {} chars", MAX_PROMPT_CHARS);
    Ok(())
}
