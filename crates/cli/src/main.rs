//! GEDUC CLI - Content fetching and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Load every collection once and print a summary
//! geduc fetch
//!
//! # Dump the full store state as JSON
//! geduc fetch --json
//!
//! # Print three generated team members
//! geduc sample -c team-members -n 3
//!
//! # Run the staleness sweep every 60 seconds until Ctrl-C
//! geduc sweep --interval 60
//!
//! # Inspect or change persisted preferences
//! geduc prefs show
//! geduc prefs set-theme dark
//! ```
//!
//! # Commands
//!
//! - `fetch` - Load all collections through the cache store
//! - `sample` - Generate fixture entities without touching the store
//! - `sweep` - Periodic staleness sweep (initial load + refresh loop)
//! - `prefs` - Persisted user preferences

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "geduc")]
#[command(author, version, about = "GEDUC content platform tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every collection once and print a per-collection summary
    Fetch {
        /// Print the full store state as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Generate sample fixture entities
    Sample {
        /// Collection to sample (team-members, initiatives, testimonials,
        /// faq-items, featured-media, partners)
        #[arg(short, long)]
        collection: String,

        /// Number of entities to generate
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the periodic staleness sweep until interrupted
    Sweep {
        /// Seconds between sweeps
        #[arg(short, long, default_value_t = 60)]
        interval: u64,
    },
    /// Inspect or change persisted preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print the stored preferences
    Show,
    /// Set the UI theme (light, dark, system)
    SetTheme { mode: String },
    /// Grant or revoke cookie consent
    Consent {
        #[arg(value_parser = ["grant", "revoke"])]
        decision: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "geduc_cli=info,geduc_content=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Fetch { json } => commands::fetch::run(json).await?,
        Commands::Sample {
            collection,
            count,
            seed,
        } => commands::sample::run(&collection, count, seed)?,
        Commands::Sweep { interval } => commands::sweep::run(interval).await?,
        Commands::Prefs { action } => match action {
            PrefsAction::Show => commands::prefs::show()?,
            PrefsAction::SetTheme { mode } => commands::prefs::set_theme(&mode)?,
            PrefsAction::Consent { decision } => {
                commands::prefs::set_consent(decision == "grant")?;
            }
        },
    }
    Ok(())
}
