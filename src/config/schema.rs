// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! [`ConfigFile`] mirrors what may appear on disk, with every field optional.
//! [`GacConfig`] is the fully resolved form the rest of the crate consumes.

use serde::{Deserialize, Serialize};

/// Default provider name.
pub const DEFAULT_PROVIDER: &str = "openai";

/// Default chat-completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default natural language of generated messages.
pub const DEFAULT_LANGUAGE: &str = "English";

/// The resolved configuration for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GacConfig {
    /// Language model settings.
    pub llm: LlmConfig,
}

/// Resolved language model settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LlmConfig {
    /// Provider name. Informational; only the chat-completion format is spoken.
    pub provider: String,

    /// Bearer token for the endpoint. May be empty until the client checks it.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Full URL of the chat-completion endpoint.
    pub endpoint: String,

    /// Model identifier sent with each request.
    pub model: String,

    /// Natural language the model is asked to answer in.
    pub language: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// On-disk configuration layout (`.gac_config.json`, `~/.gac/config.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// The `llm` section.
    pub llm: LlmSection,
}

/// The `llm` section of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GacConfig::default();
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert!(config.llm.endpoint.starts_with("https://"));
        assert!(config.llm.api_key.is_empty());
    }

    #[test]
    fn test_config_file_partial() {
        let file: ConfigFile = serde_json::from_str(r#"{"llm": {"model": "gpt-4o"}}"#).unwrap();
        assert_eq!(file.llm.model.as_deref(), Some("gpt-4o"));
        assert!(file.llm.endpoint.is_none());
    }

    #[test]
    fn test_resolved_config_hides_api_key() {
        let mut config = GacConfig::default();
        config.llm.api_key = "sk-secret".to_string();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(json.contains("gpt-3.5-turbo"));
    }
}
