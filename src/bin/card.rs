//! Command-line renderer for stat cards.
//!
//! Runs the same validate, fetch and render pipeline as the HTTP endpoint
//! without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Print a card to stdout
//! cargo run --bin card -- render alice
//!
//! # Write a card to a file using a self-hosted Wakapi
//! cargo run --bin card -- render alice --output alice.svg --upstream http://localhost:3000
//!
//! # Check whether a username would be accepted
//! cargo run --bin card -- check "some user"
//! ```

use wakapi_card::application::services::CardService;
use wakapi_card::domain::username::Username;
use wakapi_card::infrastructure::upstream::{DEFAULT_BASE_URL, WakapiClient};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI tool for rendering Wakapi stat cards.
#[derive(Parser)]
#[command(name = "card")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch statistics and render the stat card
    Render {
        /// Wakapi username
        username: String,

        /// Write the SVG to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Statistics API base URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        upstream: String,
    },

    /// Validate a username without contacting the API
    Check {
        /// Username to validate
        username: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the SVG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            username,
            output,
            upstream,
        } => render(&username, output, &upstream).await?,
        Commands::Check { username } => check(&username),
    }

    Ok(())
}

/// Renders the card and writes it to `output` or stdout.
///
/// Upstream failures are reported as errors rather than written as an error
/// card.
async fn render(username: &str, output: Option<PathBuf>, upstream: &str) -> Result<()> {
    let username = match Username::parse(Some(username)) {
        Ok(username) => username,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e.card_message().red());
            std::process::exit(2);
        }
    };

    let client = WakapiClient::new(upstream).context("Failed to create upstream client")?;
    let service = CardService::new(Arc::new(client));

    let svg = match service.render_card(&username).await {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!(
                "{} {} {}",
                "✗".red().bold(),
                format!("Failed to render card for {username}:").red(),
                e.card_message()
            );
            std::process::exit(1);
        }
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Card for {} written to {}",
                "✓".green().bold(),
                username.to_string().cyan(),
                path.display().to_string().bright_white()
            );
        }
        None => println!("{svg}"),
    }

    Ok(())
}

/// Prints whether the username passes validation.
fn check(username: &str) {
    match Username::parse(Some(username)) {
        Ok(username) => println!(
            "{} {} is a valid username",
            "✓".green().bold(),
            username.to_string().cyan()
        ),
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e.card_message().red());
            std::process::exit(2);
        }
    }
}
