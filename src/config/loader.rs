// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ConfigError, GacError, Result};
use std::path::{Path, PathBuf};

use super::schema::{ConfigFile, GacConfig};

/// Project-level configuration file, looked up in the current directory.
pub const PROJECT_CONFIG_FILE: &str = ".gac_config.json";

/// Environment variable consulted when no file provides an API key.
pub const API_KEY_ENV: &str = "GAC_API_KEY";

/// Location of the global per-user configuration file.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".gac").join("config.json"))
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<GacConfig> {
    let project = read_optional(Path::new(PROJECT_CONFIG_FILE))?;
    let global = match global_config_path() {
        Some(path) => read_optional(&path)?,
        None => None,
    };

    if project.is_none() && global.is_none() {
        tracing::debug!("No configuration file found, using defaults");
    }

    Ok(resolve(project, global, std::env::var(API_KEY_ENV).ok()))
}

/// Load configuration from a specific path.
///
/// Only this file is consulted; the environment still supplies a missing key.
pub fn load_config_from(path: &Path) -> Result<GacConfig> {
    let file = read_optional(path)?.ok_or_else(|| {
        GacError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        })
    })?;

    Ok(resolve(Some(file), None, std::env::var(API_KEY_ENV).ok()))
}

/// Parse a configuration file from a JSON string.
pub fn parse_config(path: &Path, content: &str) -> Result<ConfigFile> {
    serde_json::from_str(content).map_err(|e| {
        GacError::Config(ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })
}

fn read_optional(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| {
        GacError::Config(ConfigError::ParseError {
            path: path.to_path_buf(),
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(path, &content).map(Some)
}

/// Resolve the effective configuration.
///
/// Each field takes the project value, else the global value, else the
/// built-in default. The API key additionally falls back to `env_api_key`
/// before defaulting to empty. Blank strings count as unset.
pub fn resolve(
    project: Option<ConfigFile>,
    global: Option<ConfigFile>,
    env_api_key: Option<String>,
) -> GacConfig {
    let project = project.map(|f| f.llm).unwrap_or_default();
    let global = global.map(|f| f.llm).unwrap_or_default();
    let mut config = GacConfig::default();

    if let Some(provider) = pick(&project.provider, &global.provider) {
        config.llm.provider = provider;
    }
    if let Some(endpoint) = pick(&project.endpoint, &global.endpoint) {
        config.llm.endpoint = endpoint;
    }
    if let Some(model) = pick(&project.model, &global.model) {
        config.llm.model = model;
    }
    if let Some(language) = pick(&project.language, &global.language) {
        config.llm.language = language;
    }

    config.llm.api_key = pick(&project.api_key, &global.api_key)
        .or_else(|| non_blank(&env_api_key))
        .unwrap_or_default();

    config
}

fn pick(project: &Option<String>, global: &Option<String>) -> Option<String> {
    non_blank(project).or_else(|| non_blank(global))
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
    use tempfile::TempDir;

    fn file(json: &str) -> ConfigFile {
        parse_config(Path::new("test.json"), json).unwrap()
    }

    #[test]
    fn test_defaults_without_files() {
        let config = resolve(None, None, None);
        assert_eq!(config, GacConfig::default());
    }

    #[test]
    fn test_project_overrides_global() {
        let project = file(r#"{"llm": {"model": "project-model"}}"#);
        let global = file(r#"{"llm": {"model": "global-model", "endpoint": "https://llm.example/v1"}}"#);

        let config = resolve(Some(project), Some(global), None);

        assert_eq!(config.llm.model, "project-model");
        assert_eq!(config.llm.endpoint, "https://llm.example/v1");
    }

    #[test]
    fn test_file_key_beats_environment() {
        let project = file(r#"{"llm": {"api_key": "from-file"}}"#);
        let config = resolve(Some(project), None, Some("from-env".to_string()));
        assert_eq!(config.llm.api_key, "from-file");
    }

    #[test]
    fn test_environment_key_fallback() {
        let global = file(r#"{"llm": {"api_key": "   "}}"#);
        let config = resolve(None, Some(global), Some("from-env".to_string()));
        assert_eq!(config.llm.api_key, "from-env");
    }

    #[test]
    fn test_missing_fields_keep_defaults() {
        let project = file(r#"{"llm": {"provider": "openai", "api_key": "k"}}"#);
        let config = resolve(Some(project), None, None);
        assert_eq!(config.llm.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.llm.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_parse_error() {
        let result = parse_config(Path::new("broken.json"), "{not json");
        assert!(matches!(
            result,
            Err(GacError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_load_config_from_missing_path() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("nope.json"));
        assert!(matches!(
            result,
            Err(GacError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gac.json");
        std::fs::write(
            &path,
            r#"{"llm": {"endpoint": "http://localhost:8080/v1/chat/completions", "model": "local"}}"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.llm.model, "local");
        assert_eq!(
            config.llm.endpoint,
            "http://localhost:8080/v1/chat/completions"
        );
    }
}
