use crate::client::GenerationClient;
use crate::prompts;
use promptsite_core::{Prompt, Result};
use tracing::{info, instrument};

/// Generate the body markup for one page.
///
/// The page only sees its own identifier and the prompt, never the rest of
/// the site structure or other pages' output.
#[instrument(skip(client, prompt))]
pub async fn generate_page<C>(client: &C, page_name: &str, prompt: &Prompt) -> Result<String>
where
    C: GenerationClient + ?Sized,
{
    let instruction = prompts::page(page_name, prompt);
    let body = client.complete(instruction.system, &instruction.user).await?;
    info!(chars = body.len(), "page body generated");
    Ok(body)
}
