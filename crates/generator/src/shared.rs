use crate::client::GenerationClient;
use crate::prompts::{self, Instruction};
use promptsite_core::{FOOTER_FILE, HEADER_FILE, Prompt, Result, STYLESHEET_FILE};
use tracing::{info, instrument};

/// Site-wide artifacts generated once per run and shared by every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharedAsset {
    Header,
    Footer,
    Stylesheet,
}

impl SharedAsset {
    /// Generation order for a run
    pub const ALL: [SharedAsset; 3] = [
        SharedAsset::Header,
        SharedAsset::Footer,
        SharedAsset::Stylesheet,
    ];

    /// File the asset is written to inside the output directory
    pub fn file_name(self) -> &'static str {
        match self {
            SharedAsset::Header => HEADER_FILE,
            SharedAsset::Footer => FOOTER_FILE,
            SharedAsset::Stylesheet => STYLESHEET_FILE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SharedAsset::Header => "header",
            SharedAsset::Footer => "footer",
            SharedAsset::Stylesheet => "stylesheet",
        }
    }

    fn instruction(self, prompt: &Prompt) -> Instruction {
        match self {
            SharedAsset::Header => prompts::header(prompt),
            SharedAsset::Footer => prompts::footer(prompt),
            SharedAsset::Stylesheet => prompts::stylesheet(prompt),
        }
    }

    /// Generate this asset's text. The result is used verbatim.
    #[instrument(skip_all, fields(asset = self.label()))]
    pub async fn generate<C>(self, client: &C, prompt: &Prompt) -> Result<String>
    where
        C: GenerationClient + ?Sized,
    {
        let instruction = self.instruction(prompt);
        let text = client.complete(instruction.system, &instruction.user).await?;
        info!(chars = text.len(), "shared asset generated");
        Ok(text)
    }
}
