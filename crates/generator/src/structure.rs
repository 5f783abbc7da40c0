use crate::client::GenerationClient;
use crate::prompts;
use promptsite_core::{Prompt, Result, SiteStructure};
use tracing::{info, instrument};

/// Ask the generation service for the site map.
///
/// The raw response must be a JSON object with a `pages` array; anything else
/// is a `StructureParse` error and no page generation should follow.
#[instrument(skip_all, fields(model = client.model()))]
pub async fn plan_structure<C>(client: &C, prompt: &Prompt) -> Result<SiteStructure>
where
    C: GenerationClient + ?Sized,
{
    let instruction = prompts::structure(prompt);
    let raw = client.complete(instruction.system, &instruction.user).await?;
    let structure = SiteStructure::parse(&raw)?;
    info!(pages = structure.len(), "site structure planned");
    Ok(structure)
}
