//! Granule CLI — validate and repair MPM scene configurations.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "granule")]
#[command(version, about = "Granule — MPM scene configuration validator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scene config and report repairs.
    Validate {
        /// Path to the scene config (JSON).
        #[arg(short, long)]
        config: String,

        /// Fail when bodies are out of domain instead of auto-fitting
        /// the bounds.
        #[arg(long)]
        strict: bool,

        /// Write the repaired config to this path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print a default scene config as JSON.
    Defaults,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            config,
            strict,
            output,
        } => commands::validate(&config, strict, output.as_deref()),
        Commands::Defaults => commands::defaults(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
