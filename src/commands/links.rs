//! Links command: manual search links without touching the network.

use crate::config::Config;
use crate::format::Formatter;
use crate::isbn::Isbn;
use crate::links::{build_links, LinkService};
use anyhow::Result;

pub struct LinksCommand {
    config: Config,
}

impl LinksCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns all links, or the bare URL of one service when `only` is set.
    pub fn execute(&self, raw_isbn: &str, only: Option<LinkService>) -> Result<String> {
        let isbn = Isbn::parse(raw_isbn)?;
        let links = build_links(&isbn);

        if let Some(service) = only {
            return Ok(links.get(service).to_string());
        }

        Ok(Formatter::new(self.config.format).format_links(&links))
    }
}
