use crate::SourceArgs;
use anyhow::Result;
use promptsite_core::SiteConfig;
use promptsite_validator::{ValidationReport, validate_prompt};
use std::fs;

/// Preflight check: configuration, prompt file and credential
pub async fn run(source: SourceArgs) -> Result<()> {
    let config = super::resolve_config(&source)?;
    println!("✓ Configuration valid");
    println!("  Model:    {}", config.generation.model);
    println!("  Endpoint: {}", config.generation.endpoint);
    println!("  Output:   {}", config.output_dir.display());

    let report = preflight(&config, |name| std::env::var(name).ok());

    for line in &report.info {
        println!("✓ {}", line);
    }
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    for error in &report.errors {
        println!("✗ {}", error);
    }

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }
    Ok(())
}

fn preflight<F>(config: &SiteConfig, lookup: F) -> ValidationReport
where
    F: Fn(&str) -> Option<String>,
{
    let mut report = ValidationReport::default();

    match fs::read_to_string(&config.prompt_file) {
        Ok(text) => report.merge(validate_prompt(&text)),
        Err(e) => report.errors.push(format!(
            "Cannot read prompt file {}: {}",
            config.prompt_file.display(),
            e
        )),
    }

    match config.generation.resolve_api_key_with(lookup) {
        Ok(_) => report
            .info
            .push(format!("{} is set", config.generation.api_key_env)),
        Err(e) => report.errors.push(e.to_string()),
    }

    if config.output_dir.is_file() {
        report.errors.push(format!(
            "Output path {} is a file",
            config.output_dir.display()
        ));
    } else if config.output_dir.exists() {
        report.warnings.push(format!(
            "Output directory {} exists; files will be overwritten",
            config.output_dir.display()
        ));
    }

    report
}
