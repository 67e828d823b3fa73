//! Reply filter CLI
//!
//! Run without arguments for the interactive form, or use `reply analyze`
//! for a one-shot classification.

mod cmd;
mod context;
mod interactive;
mod menu;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use reply_analyzer::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd::analyze::{run_analyze, AnalyzeArgs};
use crate::context::AppContext;

#[derive(Parser)]
#[command(name = "reply")]
#[command(about = "Decide whether a piece of text deserves a reply")]
struct Cli {
    /// Override the OpenAI-compatible endpoint
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Model to classify with
    #[arg(long, global = true)]
    model: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress headers and status lines
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive form (default)
    Interactive,

    /// Analyze a single text and print the verdict
    Analyze(AnalyzeArgs),

    /// List the selectable models
    Models,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::from_env();
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(model) = cli.model {
        config = config.with_default_model(model);
    }

    let ctx = AppContext::new(config, cli.quiet);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            if !ctx.quiet {
                print_banner();
            }
            let mut session = ctx.session(ctx.initial_settings());
            interactive::run_interactive(&ctx, &mut session).await
        }
        Commands::Analyze(args) => run_analyze(&ctx, args).await,
        Commands::Models => {
            cmd::models::list_models(&ctx);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,reply_analyzer=debug,openai_client=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn print_banner() {
    println!(
        "{}",
        "╔════════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        "║            Reply Analyzer              ║".bright_cyan()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════╝".bright_cyan()
    );
}
