#![forbid(unsafe_code)]

mod cmd;
mod config;
mod output;
mod store_source;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use output::OutputMode;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "patchline: a knowledge evolution timeline explorer",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (shorthand for --format json).
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Timeline data file (overrides PATCHLINE_DATA and user config).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Show the timeline header",
        after_help = "EXAMPLES:\n    # Subject, mission, and latest confidence\n    pl summary\n\n    # Machine-readable output\n    pl summary --format json"
    )]
    Summary(cmd::summary::SummaryArgs),

    #[command(
        about = "List every patch with date and confidence",
        after_help = "EXAMPLES:\n    # The full strip\n    pl timeline\n\n    # Pipe-friendly rows\n    pl timeline --format text"
    )]
    Timeline(cmd::timeline::TimelineArgs),

    #[command(
        about = "Trace the confidence arc across patches",
        after_help = "EXAMPLES:\n    # Deltas and momentum per step\n    pl trajectory"
    )]
    Trajectory(cmd::trajectory::TrajectoryArgs),

    #[command(
        about = "Show one patch in full",
        after_help = "EXAMPLES:\n    # First patch\n    pl show\n\n    # A specific patch\n    pl show patch-2024-q3"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        about = "List the claims behind a patch",
        after_help = "EXAMPLES:\n    # Claims of the first patch\n    pl claims\n\n    # Claims of a specific patch\n    pl claims patch-2025-q1"
    )]
    Claims(cmd::claims::ClaimsArgs),

    #[command(
        about = "List concept clusters for a patch",
        after_help = "EXAMPLES:\n    # Clusters of the first patch\n    pl clusters\n\n    # Include point-cloud scene arrays\n    pl clusters patch-2024-q3 --scene --format json"
    )]
    Clusters(cmd::clusters::ClustersArgs),

    #[command(
        about = "Trace narrative threads across the timeline",
        after_help = "EXAMPLES:\n    # Mark the stage pinned to a patch\n    pl threads patch-2024-q3"
    )]
    Threads(cmd::threads::ThreadsArgs),

    #[command(
        about = "Show the follow-up question board",
        after_help = "EXAMPLES:\n    # Questions grouped by horizon\n    pl backlog"
    )]
    Backlog(cmd::backlog::BacklogArgs),

    #[command(
        about = "Check a timeline data file",
        after_help = "EXAMPLES:\n    # Validate a file before pointing the CLI at it\n    pl validate --data ./timeline.json"
    )]
    Validate(cmd::validate::ValidateArgs),

    #[command(about = "Generate shell completions")]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PATCHLINE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "patchline=debug,info"
        } else {
            "patchline=info,warn"
        })
    });

    let format = env::var("PATCHLINE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        info!("verbose mode enabled");
    }

    let user_config = config::load_user_config()?;

    // The user config's output setting sits between the FORMAT env var and
    // the TTY default; it only kicks in when nothing explicit was asked for.
    let format_flag = cli.format.or_else(|| {
        if cli.json || env::var("FORMAT").is_ok() {
            None
        } else {
            user_config
                .output
                .as_deref()
                .and_then(|value| OutputMode::from_str(value, true).ok())
        }
    });
    let output = output::resolve_output_mode(format_flag, cli.json);

    let source = store_source::resolve_source(cli.data.as_deref(), &user_config);

    match cli.command {
        Commands::Summary(ref args) => {
            cmd::summary::run_summary(args, output, &store_source::load_store(&source)?)?;
        }
        Commands::Timeline(ref args) => {
            cmd::timeline::run_timeline(args, output, &store_source::load_store(&source)?)?;
        }
        Commands::Trajectory(ref args) => {
            cmd::trajectory::run_trajectory(args, output, &store_source::load_store(&source)?)?;
        }
        Commands::Show(ref args) => {
            cmd::show::run_show(args, output, &store_source::load_store(&source)?)?;
        }
        Commands::Claims(ref args) => {
            cmd::claims::run_claims(args, output, &store_source::load_store(&source)?)?;
        }
        Commands::Clusters(ref args) => {
            cmd::clusters::run_clusters(args, output, &store_source::load_store(&source)?)?;
        }
        Commands::Threads(ref args) => {
            cmd::threads::run_threads(args, output, &store_source::load_store(&source)?)?;
        }
        Commands::Backlog(ref args) => {
            cmd::backlog::run_backlog(args, output, &store_source::load_store(&source)?)?;
        }
        Commands::Validate(ref args) => {
            return cmd::validate::run_validate(args, output, &source);
        }
        Commands::Completions(ref args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args, &mut command);
        }
    }

    Ok(ExitCode::SUCCESS)
}
