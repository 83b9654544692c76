use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use showcase_core::{AppConfig, SiteContent};

mod commands;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(author, version, about = "A cinematic portfolio showcase for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Content document (TOML); overrides `general.content_path`
    #[arg(short = 'c', long, global = true)]
    content: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the portfolio in the terminal
    Run,
    /// Print the project (or design) catalog
    List {
        /// List designs instead of projects
        #[arg(short = 'd', long)]
        designs: bool,
        /// Only show one category (e.g. "3d", "Web App")
        #[arg(long)]
        category: Option<String>,
    },
    /// Write the default configuration file
    Init {
        /// Replace an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Load and validate a content document
    Check {
        /// Path to the TOML document
        path: PathBuf,
    },
    /// Validate and deliver a contact message through the configured endpoint
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

/// Filter from RUST_LOG, falling back to the configured level
fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.general.log_level))
}

/// Log to stderr for one-shot commands
fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Log to a file while the TUI owns the terminal
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration (validated on load)
    let config = Arc::new(AppConfig::load()?);

    match &cli.command {
        Some(Commands::Run) | None => init_file_logging(&config)?,
        _ => init_stderr_logging(&config),
    }

    let content_path = cli.content.clone().or_else(|| config.content_path());

    match cli.command {
        Some(Commands::Run) | None => {
            let content = SiteContent::load_or_bundled(content_path.as_deref())?;
            commands::run::run(config, content).await
        }
        Some(Commands::List { designs, category }) => {
            let content = SiteContent::load_or_bundled(content_path.as_deref())?;
            commands::list::run(&content, designs, category.as_deref())
        }
        Some(Commands::Init { force }) => commands::init::run(&AppConfig::config_path(), force),
        Some(Commands::Check { path }) => commands::check::run(&path),
        Some(Commands::Send {
            name,
            email,
            subject,
            message,
        }) => commands::send::run(&config, &name, &email, &subject, &message).await,
    }
}
