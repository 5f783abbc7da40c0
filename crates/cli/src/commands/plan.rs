use crate::SourceArgs;
use anyhow::{Context, Result};
use promptsite_core::Prompt;
use promptsite_generator::{GenerationClient, plan_structure};
use promptsite_validator::validate_structure;

use super::generate::build_client;

/// Ask for the site structure only, without generating any page
pub async fn run(source: SourceArgs) -> Result<()> {
    let config = super::resolve_config(&source)?;
    let client = build_client(&config.generation, |name| std::env::var(name).ok())?;
    let prompt = Prompt::from_file(&config.prompt_file)?;

    println!("🗺  Planning site structure...");
    println!("   Prompt: {}", config.prompt_file.display());
    println!("   Model:  {}", client.model());
    println!();

    let structure = plan_structure(&client, &prompt)
        .await
        .context("Failed to plan site structure")?;

    println!("Pages:");
    for (i, page) in structure.pages.iter().enumerate() {
        println!("  {:02}  {}", i + 1, page);
    }
    println!();

    let report = validate_structure(&structure);
    for warning in &report.warnings {
        println!("⚠ {}", warning);
    }
    for line in &report.info {
        println!("✓ {}", line);
    }

    Ok(())
}
