//! Search command implementation.

use crate::config::Config;
use crate::ebay::{EbayClient, SoldListingSource};
use crate::format::Formatter;
use crate::search::run_search;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

/// Runs a single sold-price search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output. Status lines go to stderr.
    pub async fn execute(&self, raw_isbn: &str) -> Result<String> {
        let client = EbayClient::new(&self.config).await.context("Failed to create HTTP client")?;

        self.execute_with_client(&client, raw_isbn, &mut std::io::stderr()).await
    }

    /// Executes the search with a provided client and status log (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl SoldListingSource,
        raw_isbn: &str,
        log: &mut impl Write,
    ) -> Result<String> {
        let outcome = run_search(client, raw_isbn, |event| {
            // A broken status pipe should not abort the search.
            let _ = writeln!(log, "{}", event);
        })
        .await?;

        info!("Found {} sold listings for {}", outcome.listings.len(), outcome.isbn);

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_outcome(&outcome))
    }
}
