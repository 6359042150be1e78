use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagepulse_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pagepulse")]
#[command(author, version, about = "Scroll-triggered counters and page effects in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page description (TOML) to use instead of the configured one
    #[arg(short = 'p', long = "page", global = true)]
    page: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the page in the TUI
    Run,
    /// Scroll to an offset without a terminal and print counter frames
    Simulate {
        /// Scroll offset in page pixels
        #[arg(short = 's', long, default_value_t = 0.0)]
        scroll_to: f64,
        /// Frame interval in milliseconds
        #[arg(short = 'f', long, default_value_t = 250)]
        frame_ms: u64,
        /// Stop after this many milliseconds even if counters are still running
        #[arg(long, default_value_t = 10_000)]
        max_ms: u64,
    },
    /// Send the contact form once
    Submit {
        #[arg(short = 'n', long)]
        name: String,
        #[arg(short = 'e', long)]
        email: String,
        #[arg(short = 'P', long)]
        phone: String,
    },
    /// Sign up for the newsletter
    Subscribe {
        email: String,
    },
    /// Check an email address the way the contact form does
    Validate {
        email: String,
    },
    /// Show the effective configuration
    Config {
        /// Write the configuration file if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    if let Some(page) = cli.page {
        config.general.page_path = Some(page);
    }

    // The TUI owns the terminal, so it only logs when RUST_LOG asks for it
    let default_level = match cli.command {
        Some(Commands::Run) | None => "off".to_string(),
        _ => config.general.log_level.clone(),
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or(default_level),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::debug!(
        path = %AppConfig::config_path().display(),
        page = ?config.general.page_path,
        "Configuration loaded"
    );
    let config = Arc::new(config);

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Simulate {
            scroll_to,
            frame_ms,
            max_ms,
        }) => commands::simulate::run(&config, scroll_to, frame_ms, max_ms),
        Some(Commands::Submit { name, email, phone }) => {
            commands::submit::run(&config, &name, &email, &phone).await
        }
        Some(Commands::Subscribe { email }) => commands::subscribe::run(&config, &email).await,
        Some(Commands::Validate { email }) => commands::validate::run(&email),
        Some(Commands::Config { init }) => commands::config::run(&config, init),
    }
}
