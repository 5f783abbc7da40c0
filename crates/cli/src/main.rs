mod commands;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promptsite")]
#[command(version, about = "Generate a static website from a single prompt", long_about = None)]
struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the whole site: structure, header, footer, stylesheet and pages
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory for generated files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum generation requests in flight
        #[arg(short = 'j', long)]
        concurrency: Option<usize>,
    },

    /// Ask for the site structure only and print the planned pages
    Plan {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Check configuration, prompt file and credential without generating
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Serve a generated site locally
    Preview {
        /// Directory containing the generated site
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (default: ./promptsite.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where the prompt and generation settings come from
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Configuration file (default: ./promptsite.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prompt file describing the site
    #[arg(short, long)]
    prompt: Option<PathBuf>,

    /// Model identifier sent with every request
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Command::Generate {
            source,
            output,
            concurrency,
        } => commands::generate::run(source, output, concurrency).await,
        Command::Plan { source } => commands::plan::run(source).await,
        Command::Validate { source } => commands::validate::run(source).await,
        Command::Preview {
            output,
            config,
            port,
        } => commands::preview::run(output, config, port).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "promptsite", &mut io::stdout());
            Ok(())
        }
    }
}
