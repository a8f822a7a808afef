use crate::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gpt-4o";

/// The instruction sent as the system turn of every conversation. Kept as
/// configuration text rather than logic so the tool is not tied to one use case.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a problem solver and only return the correct answer, without any other text.";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub system_prompt: String
}

impl Config {

    /// Read configuration from the process environment. The caller is expected
    /// to have loaded `.env` already (see main).
    pub fn from_env() -> Result<Self, ConfigError> {

        let api_key = validate_api_key(std::env::var("OPENAI_API_KEY").ok())?;

        let model = std::env::var("CLIP_SOLVER_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let system_prompt = std::env::var("CLIP_SOLVER_SYSTEM_PROMPT")
            .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string());

        Ok(Config { api_key, model, system_prompt })

    }

}

fn validate_api_key(value: Option<String>) -> Result<String, ConfigError> {

    match value {
        None => Err(ConfigError::MissingApiKey),
        Some(key) if key.is_empty() => Err(ConfigError::EmptyApiKey),
        Some(key) => Ok(key)
    }

}
