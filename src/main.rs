//! CLI entry point for the spec-driven workflow runner.

use anyhow::Result;
use clap::{Parser, Subcommand};

use specflow::io::assistant::AiderAssistant;
use specflow::io::config::load_config;
use specflow::{logging, workflow};

const USAGE: &str = "Usage: specflow <endpoint <spec-file-name> | template <description>>";

#[derive(Parser)]
#[command(
    name = "specflow",
    version,
    about = "Spec-driven workflow runner delegating code changes to aider"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new endpoint from `specs/<spec-file-name>`.
    Endpoint {
        /// Name of the spec file under `specs/`.
        spec_file_name: String,
    },
    /// Run the template workflow from `specs/spec-template.md`.
    Template {
        /// Description substituted for `<description>` in the template.
        description: String,
    },
}

fn main() {
    // Bare invocation prints usage without touching the filesystem.
    if std::env::args().len() < 2 {
        println!("{USAGE}");
        std::process::exit(1);
    }

    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = std::env::current_dir()?;
    let config = load_config(&root)?;
    let assistant = AiderAssistant;

    match cli.command {
        Command::Endpoint { spec_file_name } => {
            workflow::run_endpoint(&root, &spec_file_name, &config, &assistant)
        }
        Command::Template { description } => {
            workflow::run_template(&root, &description, &config, &assistant)
        }
    }
}
