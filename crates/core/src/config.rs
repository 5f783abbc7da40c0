use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1";
pub const DEFAULT_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const DEFAULT_PROMPT_FILE: &str = "prompt.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Raw TOML configuration structure
/// This matches the promptsite.toml file structure exactly; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    prompt: Option<String>,
    output: Option<String>,
    #[serde(default)]
    generation: RawGeneration,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGeneration {
    endpoint: Option<String>,
    model: Option<String>,
    temperature: Option<f64>,
    timeout_secs: Option<u64>,
    concurrency: Option<usize>,
    api_key_env: Option<String>,
}

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub prompt_file: PathBuf,
    pub output_dir: PathBuf,
    pub generation: GenerationSettings,
}

/// How to reach the generation service
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    /// Per-call request timeout
    pub timeout: Duration,
    /// Maximum generation calls in flight at once
    pub concurrency: usize,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            prompt_file: PathBuf::from(DEFAULT_PROMPT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            generation: GenerationSettings::default(),
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: 1,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl GenerationSettings {
    /// Read the API key from the configured environment variable
    pub fn resolve_api_key(&self) -> Result<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key through an arbitrary lookup (useful for testing)
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(&self.api_key_env) {
            Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(Error::Configuration(format!(
                "{} not set",
                self.api_key_env
            ))),
        }
    }

    /// Check the settings can produce a working client
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(Error::Configuration(format!(
                "generation.endpoint must be an http(s) URL: '{}'",
                self.endpoint
            )));
        }

        if self.model.trim().is_empty() {
            return Err(Error::Configuration(
                "generation.model must not be empty".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::Configuration(format!(
                "generation.temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        if self.timeout.is_zero() {
            return Err(Error::Configuration(
                "generation.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.concurrency == 0 {
            return Err(Error::Configuration(
                "generation.concurrency must be at least 1".to_string(),
            ));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(Error::Configuration(
                "generation.api_key_env must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Parse promptsite.toml from a file path
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Configuration(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_site_toml_str(&content)
}

/// Parse promptsite.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let defaults = GenerationSettings::default();

    let generation = GenerationSettings {
        endpoint: raw.generation.endpoint.unwrap_or(defaults.endpoint),
        model: raw.generation.model.unwrap_or(defaults.model),
        temperature: raw.generation.temperature.unwrap_or(defaults.temperature),
        timeout: raw
            .generation
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout),
        concurrency: raw.generation.concurrency.unwrap_or(defaults.concurrency),
        api_key_env: raw.generation.api_key_env.unwrap_or(defaults.api_key_env),
    };
    generation.validate()?;

    let prompt_file = match raw.prompt {
        Some(p) => non_empty_path(&p, "prompt")?,
        None => PathBuf::from(DEFAULT_PROMPT_FILE),
    };
    let output_dir = match raw.output {
        Some(p) => non_empty_path(&p, "output")?,
        None => PathBuf::from(DEFAULT_OUTPUT_DIR),
    };

    Ok(SiteConfig {
        prompt_file,
        output_dir,
        generation,
    })
}

fn non_empty_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    if path_str.trim().is_empty() {
        return Err(Error::Configuration(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }
    Ok(PathBuf::from(path_str))
}
