use std::path::{Path, PathBuf};

use boundary::{BoundaryOptions, ErrorBoundary, FallbackPanel, Fault, PageBoundary};
use clap::{Args, Parser, Subcommand};
use effects::{ConfigError, EffectConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod replay;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid effect configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("step {index} at {at} ms is earlier than the previous step at {previous} ms")]
    OutOfOrder { index: usize, at: u64, previous: u64 },
}

#[derive(Parser, Debug)]
#[command(name = "bakehouse", about = "Replay click-effect timelines and preview fault panels")]
struct Cli {
    /// Effect configuration JSON; defaults apply when omitted.
    #[arg(long, global = true, env = "BAKEHOUSE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a JSON script of timed effect operations and print a snapshot per step.
    Replay {
        script: PathBuf,
    },
    /// Print the fallback panel a boundary shows for a synthetic fault.
    Fallback(FallbackArgs),
    /// Print the effective effect configuration.
    Config,
}

#[derive(Args, Debug)]
struct FallbackArgs {
    /// Render the page variant titled after this page.
    #[arg(long)]
    page: Option<String>,

    /// Include the fault message and component stack (app variant only).
    #[arg(long, default_value_t = false)]
    details: bool,

    #[arg(long, default_value = "synthetic render fault")]
    message: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Replay { script } => {
            let raw = read_file(&script)?;
            let steps = replay::parse_script(&raw)?;
            for report in replay::run(config, &steps)? {
                println!("{}", serde_json::to_string(&report)?);
            }
            Ok(())
        }
        Command::Fallback(args) => print_json(&fallback_panel(&args)),
        Command::Config => print_json(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<EffectConfig, CliError> {
    let Some(path) = path else {
        return Ok(EffectConfig::default());
    };
    let config = EffectConfig::from_json(&read_file(path)?)?;
    tracing::debug!(path = %path.display(), ?config, "loaded effect configuration");
    Ok(config)
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io { path: path.to_owned(), source })
}

fn fallback_panel(args: &FallbackArgs) -> FallbackPanel {
    let fault = Fault::new(args.message.clone()).within("Preview");
    match &args.page {
        Some(name) => {
            if args.details {
                tracing::warn!("page boundaries never show details; ignoring --details");
            }
            PageBoundary::new(name.clone()).render(|| Err(fault.within("PageErrorBoundary")))
        }
        None => {
            let options = BoundaryOptions::default().show_details(args.details);
            ErrorBoundary::with_options("app", options).render(|| Err(fault.within("AppErrorBoundary")))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
