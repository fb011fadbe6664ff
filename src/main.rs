//! book-pricer - sold-price lookup for books by ISBN

use anyhow::Result;
use book_pricer::commands::{InteractiveCommand, LinksCommand, SearchCommand};
use book_pricer::config::{Config, OutputFormat};
use book_pricer::links::LinkService;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "book-pricer",
    version,
    about = "Sold-price lookup for books by ISBN",
    long_about = "Looks up recently sold eBay listings for an ISBN and prints search links for BookFinder, ISBNS.net and Alibris."
)]
struct Cli {
    /// Request timeout in seconds (BOOK_PRICER_TIMEOUT is read by the config layer)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "BOOK_PRICER_PROXY")]
    proxy: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search sold eBay listings for an ISBN
    #[command(alias = "s")]
    Search {
        /// ISBN (hyphens, spaces and punctuation are ignored)
        isbn: String,
    },

    /// Print manual search links for an ISBN without searching
    #[command(alias = "l")]
    Links {
        /// ISBN (hyphens, spaces and punctuation are ignored)
        isbn: String,

        /// Print only this service's URL
        #[arg(long)]
        only: Option<LinkService>,
    },

    /// Read ISBNs from stdin, one per line; each line replaces the previous search
    #[command(alias = "i")]
    Interactive,

    /// List the services manual links are built for
    Services,
}

/// Loads config with layered overrides: file, then environment, then flags.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(proxy) = &cli.proxy {
        config.proxy = Some(proxy.clone());
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&cli)?;

    match cli.command {
        Commands::Search { isbn } => {
            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&isbn).await?;
            println!("{}", output);
        }

        Commands::Links { isbn, only } => {
            let cmd = LinksCommand::new(config);
            println!("{}", cmd.execute(&isbn, only)?);
        }

        Commands::Interactive => {
            let stats = InteractiveCommand::new(config).execute().await?;
            eprintln!(
                "{} searches, {} completed, {} stale messages dropped",
                stats.submitted, stats.completed, stats.stale
            );
        }

        Commands::Services => {
            println!("Manual link services:\n");
            println!("{:<12} {:<16} {:<20}", "Code", "Name", "Host");
            println!("{:-<12} {:-<16} {:-<20}", "", "", "");

            for service in LinkService::all() {
                println!("{:<12} {:<16} {:<20}", service.to_string(), service.name(), service.domain());
            }
        }
    }

    Ok(())
}
