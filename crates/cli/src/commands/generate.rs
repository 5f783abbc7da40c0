use crate::SourceArgs;
use anyhow::{Context, Result};
use futures::{StreamExt, TryStreamExt, stream};
use promptsite_core::{Error, GenerationSettings, Prompt, SharedComponents, SiteSummary};
use promptsite_generator::{
    ChatCompletionClient, GenerationClient, SharedAsset, assemble_page, generate_page,
    plan_structure,
};
use promptsite_validator::{ValidationReport, validate_structure};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Generate the whole site described by the prompt file
pub async fn run(
    source: SourceArgs,
    output: Option<PathBuf>,
    concurrency: Option<usize>,
) -> Result<()> {
    let mut config = super::resolve_config(&source)?;
    if let Some(output) = output {
        config.output_dir = output;
    }
    if let Some(concurrency) = concurrency {
        config.generation.concurrency = concurrency;
        config
            .generation
            .validate()
            .context("Invalid generation settings")?;
    }

    // Credential first: nothing touches the network or the prompt without it
    let client = build_client(&config.generation, |name| std::env::var(name).ok())?;
    let prompt = Prompt::from_file(&config.prompt_file)?;

    println!("🌐 Generating site...");
    println!("   Prompt: {}", config.prompt_file.display());
    println!("   Output: {}", config.output_dir.display());
    println!("   Model:  {}", client.model());
    println!();

    let summary = generate_site(
        &client,
        &prompt,
        &config.output_dir,
        config.generation.concurrency,
    )
    .await
    .context("Site generation failed")?;

    println!();
    println!("✅ Site generation complete.");
    println!(
        "   {} page(s) written to {}",
        summary.pages_written.len(),
        summary.output_dir.display()
    );
    println!();
    println!("To preview locally:");
    println!(
        "   promptsite preview --output {}",
        summary.output_dir.display()
    );

    Ok(())
}

/// Build the remote client, failing before any request if the key is absent
pub fn build_client<F>(
    settings: &GenerationSettings,
    lookup: F,
) -> promptsite_core::Result<ChatCompletionClient>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = settings.resolve_api_key_with(lookup)?;
    ChatCompletionClient::new(settings, api_key)
}

/// Run the pipeline: structure, shared assets, then every page.
///
/// At most `concurrency` generation calls are in flight. Files are written and
/// reported in identifier order, whatever order the calls finish in; a failure
/// stops the run and leaves whatever was already written in place.
pub async fn generate_site<C>(
    client: &C,
    prompt: &Prompt,
    output: &Path,
    concurrency: usize,
) -> promptsite_core::Result<SiteSummary>
where
    C: GenerationClient + ?Sized,
{
    let limit = concurrency.max(1);

    fs::create_dir_all(output).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;

    println!("🔹 Generating site structure...");
    let structure = plan_structure(client, prompt).await?;
    println!("   ✓ {} page(s) planned", structure.len());
    report_findings(&validate_structure(&structure));

    println!("🔹 Generating header, footer & CSS...");
    let shared = stream::iter(SharedAsset::ALL)
        .map(move |asset| async move {
            let text = asset.generate(client, prompt).await?;
            Ok::<_, Error>((asset, text))
        })
        .buffered(limit)
        .try_fold(
            SharedComponents::default(),
            move |mut shared, (asset, text)| async move {
                write_output(&output.join(asset.file_name()), &text)?;
                println!("   ✔ {}", asset.file_name());
                match asset {
                    SharedAsset::Header => shared.header = text,
                    SharedAsset::Footer => shared.footer = text,
                    SharedAsset::Stylesheet => {}
                }
                Ok::<_, Error>(shared)
            },
        )
        .await?;

    println!("🔹 Generating pages...");
    let header = shared.header.as_str();
    let footer = shared.footer.as_str();
    let pages_written = stream::iter(structure.pages.iter())
        .map(move |page| async move {
            let body = generate_page(client, page, prompt).await?;
            Ok::<_, Error>((page, body))
        })
        .buffered(limit)
        .try_fold(Vec::<String>::new(), move |mut written, (page, body)| async move {
            let html = assemble_page(&body, header, footer);
            write_output(&output.join(page), &html)?;
            println!("   ✔ {}", page);
            written.push(page.clone());
            Ok::<_, Error>(written)
        })
        .await?;

    info!(pages = pages_written.len(), output = %output.display(), "site generated");

    Ok(SiteSummary {
        output_dir: output.to_path_buf(),
        pages_written,
    })
}

fn report_findings(report: &ValidationReport) {
    for warning in &report.warnings {
        warn!("{}", warning);
        println!("   ⚠ {}", warning);
    }
}

/// Write one output file, creating parent directories for nested page names
fn write_output(path: &Path, contents: &str) -> promptsite_core::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
