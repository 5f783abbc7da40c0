// Prompt-driven site generation: remote completion client, per-artifact
// generators and the page assembler.

pub mod assemble;
pub mod client;
pub mod page;
pub mod prompts;
pub mod shared;
pub mod structure;

#[cfg(test)]
mod test_support;

pub use assemble::assemble_page;
pub use client::{ChatCompletionClient, GenerationClient};
pub use page::generate_page;
pub use shared::SharedAsset;
pub use structure::plan_structure;
