//! Arcana CLI: the main entry point.
//!
//! Commands:
//! - `reading`  : assemble the system and user blocks for a drawn spread
//! - `spreads`  : list the spread layouts
//! - `retrieve` : query the knowledge corpus directly
//! - `onboard`  : write the default configuration
//! - `config`   : validate, show, or locate the configuration
//! - `doctor`   : diagnose configuration and corpus health

use arcana_core::Style;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana: budgeted prompt assembly for narrative readings",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a reading prompt from drawn cards
    Reading {
        /// Spread layout key (see `arcana spreads`)
        #[arg(short, long)]
        spread: String,

        /// JSON file with the drawn cards, or `-` for stdin
        #[arg(short, long)]
        cards: PathBuf,

        /// The querent's question
        #[arg(short, long, default_value = "")]
        question: String,

        /// Reflection for a position, as `Position=text` (repeatable)
        #[arg(short, long = "reflect", value_name = "POSITION=TEXT")]
        reflections: Vec<String>,

        /// Backend target whose budgets apply
        #[arg(short, long, env = "ARCANA_TARGET")]
        target: Option<String>,

        /// Rendering style: verbose or compact
        #[arg(long)]
        style: Option<Style>,

        /// Also print the reasoning result and assembly report as JSON
        #[arg(long)]
        explain: bool,
    },

    /// List available spread layouts
    Spreads,

    /// Retrieve knowledge passages for topic keys
    Retrieve {
        /// Comma-separated topic keys, e.g. `card:the-sun,reversed`
        #[arg(short, long, value_delimiter = ',', required = true)]
        keys: Vec<String>,

        /// Question used to rank passages
        #[arg(short, long, default_value = "")]
        question: String,

        /// Override the configured passage limit
        #[arg(long)]
        max: Option<usize>,
    },

    /// Initialize configuration
    Onboard,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Diagnose configuration and corpus health
    Doctor,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate the configuration file
    Validate,
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so prompt output on stdout stays clean
    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    match cli.command {
        Commands::Reading {
            spread,
            cards,
            question,
            reflections,
            target,
            style,
            explain,
        } => commands::reading::run(commands::reading::ReadingArgs {
            spread,
            cards,
            question,
            reflections,
            target,
            style,
            explain,
        })?,
        Commands::Spreads => commands::spreads::run()?,
        Commands::Retrieve { keys, question, max } => {
            commands::retrieve::run(&keys, &question, max)?
        }
        Commands::Onboard => commands::onboard::run()?,
        Commands::Config { action } => match action {
            ConfigAction::Validate => commands::config_cmd::validate()?,
            ConfigAction::Show => commands::config_cmd::show()?,
            ConfigAction::Path => commands::config_cmd::path()?,
        },
        Commands::Doctor => commands::doctor::run()?,
    }

    Ok(())
}
