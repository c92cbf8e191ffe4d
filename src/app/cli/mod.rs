//! CLI Adapter.

use clap::Parser;

use crate::app::api::{self, GenerateOptions, GenerationReport};
use crate::app::logging::init_logging;

#[derive(Parser)]
#[command(name = "koolbuilder")]
#[command(version)]
#[command(
    about = "Generate Kubernetes controller boilerplate from a declarative configuration",
    long_about = None
)]
struct Cli {
    /// Configuration file of the controller (local path or http(s) URL)
    #[arg(short = 'f', long = "filename", value_name = "CONFIG")]
    filename: String,
    /// Do not run `go mod tidy` after generation
    #[arg(long)]
    skip_tidy: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = GenerateOptions { config: cli.filename, skip_tidy: cli.skip_tidy };
    match api::generate(&options) {
        Ok(report) => print_report(&report),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_report(report: &GenerationReport) {
    for artifact in &report.artifacts {
        println!("  {:<10} {}", artifact.action.to_string(), artifact.path.display());
    }
    for warning in &report.warnings {
        println!("⚠️  {}", warning);
    }
    if !report.tidied {
        println!("Skipped go mod tidy");
    }
    println!("✅ Generated {} in {}", report.name, report.base.display());
}
