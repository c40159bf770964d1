//! scalviz CLI: benchmark scalability charts and composites.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "scalviz")]
#[command(version, about = "scalviz - scalability and efficiency charts for parallel benchmarks")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every chart, composite and the comparison chart (default).
    Generate {
        /// Report config (TOML). Built-in benchmark tables when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured output directory.
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Skip the cross-configuration comparison chart.
        #[arg(long)]
        no_comparison: bool,

        /// List the files that would be written without rendering.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print derived metrics as CSV.
    Table {
        /// Report config (TOML). Built-in benchmark tables when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output CSV file path (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse and validate a report config.
    Validate {
        /// Path to config file.
        path: PathBuf,
    },

    /// Print the built-in report config as TOML.
    DumpConfig,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::generate(None, None, false, false),
        Some(Commands::Generate {
            config,
            output_dir,
            no_comparison,
            dry_run,
        }) => commands::generate(config.as_deref(), output_dir, no_comparison, dry_run),
        Some(Commands::Table { config, output }) => {
            commands::table(config.as_deref(), output.as_deref())
        }
        Some(Commands::Validate { path }) => commands::validate(&path),
        Some(Commands::DumpConfig) => commands::dump_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
