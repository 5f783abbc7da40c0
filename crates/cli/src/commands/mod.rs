pub mod generate;
pub mod plan;
pub mod preview;
pub mod validate;

use crate::SourceArgs;
use anyhow::{Context, Result};
use promptsite_core::{SiteConfig, parse_site_toml};
use std::path::Path;

/// Configuration file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "promptsite.toml";

/// Load configuration.
///
/// An explicit path must exist. Without one, `./promptsite.toml` is used if
/// present, otherwise built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<SiteConfig> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            parse_site_toml(path).with_context(|| format!("Failed to load {}", path.display()))
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                parse_site_toml(path).context("Failed to load promptsite.toml")
            } else {
                Ok(SiteConfig::default())
            }
        }
    }
}

/// Load configuration and apply command-line overrides
pub fn resolve_config(source: &SourceArgs) -> Result<SiteConfig> {
    let mut config = load_config(source.config.as_deref())?;

    if let Some(prompt) = &source.prompt {
        config.prompt_file = prompt.clone();
    }
    if let Some(model) = &source.model {
        config.generation.model = model.clone();
    }

    config
        .generation
        .validate()
        .context("Invalid generation settings")?;
    Ok(config)
}
