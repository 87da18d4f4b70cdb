use std::path::PathBuf;

use arena::{Scenario, run_bout};
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

#[derive(Debug, Parser)]
#[command(author, version, about = "Runs the spiral hunter against a simulated sumo ring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Simulate one bout and print what happened.
    Run {
        #[arg(long)]
        scenario: Option<PathBuf>,
        #[arg(long)]
        duration_ms: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the default scenario as TOML.
    Defaults,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arena=info,sumo_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scenario,
            duration_ms,
            seed,
            json,
        } => {
            let mut scenario = match scenario {
                Some(path) => Scenario::load(&path)?,
                None => Scenario::default(),
            };
            if let Some(duration_ms) = duration_ms {
                scenario.bout.duration_ms = duration_ms;
            }
            if let Some(seed) = seed {
                scenario.bout.seed = seed;
            }

            let report = run_bout(&scenario)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
        }
        Commands::Defaults => {
            print!("{}", Scenario::default().to_toml()?);
        }
    }

    Ok(())
}
