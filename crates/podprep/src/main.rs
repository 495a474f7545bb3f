//! podprep — runs the pod-list processor chain once over a cluster state
//! file and prints what survives.
//!
//! # Usage
//!
//! ```text
//! podprep process --input state.json --config podprep.toml
//! podprep show-config --config podprep.toml
//! ```
//!
//! The state file holds `{"nodes": [...], "pods": [...]}`. Output is JSON
//! on stdout; logs go to stderr.

mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "podprep", about = "Pod-list preprocessing for cluster autoscaling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the default processor chain over a cluster state file.
    Process {
        /// JSON file with the cluster's nodes and unschedulable pods.
        #[arg(long)]
        input: PathBuf,

        /// TOML options file. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override `expendable_pods_priority_cutoff`.
        #[arg(long, allow_negative_numbers = true)]
        priority_cutoff: Option<i32>,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective options as TOML.
    ShowConfig {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,podprep=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Process {
            input,
            config,
            priority_cutoff,
            pretty,
        } => {
            let mut options = run::load_options(config.as_deref())?;
            if let Some(cutoff) = priority_cutoff {
                options.expendable_pods_priority_cutoff = cutoff;
            }
            let state = run::read_state(&input)?;
            let report = run::process(state, &options)?;
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
            Ok(())
        }
        Command::ShowConfig { config } => {
            let options = run::load_options(config.as_deref())?;
            print!("{}", options.to_toml_string()?);
            Ok(())
        }
    }
}
