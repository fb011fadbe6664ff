//! Output formatting for search outcomes and links (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::ebay::ListingRecord;
use crate::links::SearchLinks;
use crate::search::SearchOutcome;

/// Shown in place of the listings table when nothing sold.
pub const NO_RESULTS_MESSAGE: &str = "No results found on eBay.";

/// Formats outcomes and links for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a complete search outcome: sold listings, then manual links.
    pub fn format_outcome(&self, outcome: &SearchOutcome) -> String {
        match self.format {
            OutputFormat::Json => self.json_outcome(outcome),
            OutputFormat::Table => self.table_outcome(outcome),
            OutputFormat::Markdown => self.markdown_outcome(outcome),
            OutputFormat::Csv => self.csv_listings(&outcome.listings),
        }
    }

    /// Formats manual links on their own.
    pub fn format_links(&self, links: &SearchLinks) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(links).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Table => self.table_links(links),
            OutputFormat::Markdown => self.markdown_links(links),
            OutputFormat::Csv => self.csv_links(links),
        }
    }

    // JSON formatting

    fn json_outcome(&self, outcome: &SearchOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting

    fn table_outcome(&self, outcome: &SearchOutcome) -> String {
        let mut lines = Vec::new();

        lines.push(format!("eBay.com sold listings for ISBN {}", outcome.isbn));
        lines.push(String::new());

        if outcome.listings.is_empty() {
            lines.push(NO_RESULTS_MESSAGE.to_string());
        } else {
            lines.push(self.table_listings(&outcome.listings));
        }

        lines.push(String::new());
        lines.push(self.table_links(&outcome.links));

        lines.join("\n")
    }

    fn table_listings(&self, listings: &[ListingRecord]) -> String {
        let date_width = 18;
        let price_width = 12;
        let shipping_width = 20;
        let title_width = 60;

        let mut lines = Vec::new();

        lines.push(format!(
            "{:<date_width$}  {:<price_width$}  {:<shipping_width$}  {}",
            "Date", "Price", "Shipping", "Title"
        ));
        lines.push(format!(
            "{:-<date_width$}  {:-<price_width$}  {:-<shipping_width$}  {:-<title_width$}",
            "", "", "", ""
        ));

        for listing in listings {
            lines.push(format!(
                "{:<date_width$}  {:<price_width$}  {:<shipping_width$}  {}",
                truncate(&listing.sold_date, date_width),
                truncate(&listing.price, price_width),
                truncate(&listing.shipping_cost, shipping_width),
                truncate(&listing.title, title_width)
            ));
        }

        lines.push(String::new());
        let undated = listings.iter().filter(|l| l.has_unknown_date()).count();
        let unshipped = listings.iter().filter(|l| !l.has_shipping_info()).count();

        let mut total = format!("Total: {} sold listings", listings.len());
        if undated > 0 || unshipped > 0 {
            total.push_str(&format!(" ({} without sold date, {} without shipping info)", undated, unshipped));
        }
        lines.push(total);

        lines.join("\n")
    }

    fn table_links(&self, links: &SearchLinks) -> String {
        let mut lines = vec!["Manual Links".to_string()];
        for (service, url) in links.iter() {
            lines.push(format!("  {}: {}", service.label(), url));
        }
        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_outcome(&self, outcome: &SearchOutcome) -> String {
        let mut lines = Vec::new();

        lines.push(format!("## eBay.com sold listings for ISBN {}", outcome.isbn));
        lines.push(String::new());

        if outcome.listings.is_empty() {
            lines.push(format!("*{}*", NO_RESULTS_MESSAGE));
        } else {
            lines.push("| Date | Price | Shipping | Title |".to_string());
            lines.push("|------|-------|----------|-------|".to_string());

            for listing in &outcome.listings {
                lines.push(format!(
                    "| {} | {} | {} | {} |",
                    Self::markdown_cell(&listing.sold_date),
                    Self::markdown_cell(&listing.price),
                    Self::markdown_cell(&listing.shipping_cost),
                    Self::markdown_cell(&listing.title)
                ));
            }

            lines.push(String::new());
            lines.push(format!("*{} sold listings found*", outcome.listings.len()));
        }

        lines.push(String::new());
        lines.push(self.markdown_links(&outcome.links));

        lines.join("\n")
    }

    fn markdown_links(&self, links: &SearchLinks) -> String {
        let mut lines = vec!["## Manual Links".to_string(), String::new()];
        for (service, url) in links.iter() {
            lines.push(format!("- [{}]({})", service.label(), url));
        }
        lines.join("\n")
    }

    fn markdown_cell(s: &str) -> String {
        s.replace('|', "\\|").replace('\n', " ")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "sold_date,title,price,shipping".to_string()
    }

    fn csv_listings(&self, listings: &[ListingRecord]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for listing in listings {
            lines.push(format!(
                "{},{},{},{}",
                Self::csv_escape(&listing.sold_date),
                Self::csv_escape(&listing.title),
                Self::csv_escape(&listing.price),
                Self::csv_escape(&listing.shipping_cost)
            ));
        }

        lines.join("\n")
    }

    fn csv_links(&self, links: &SearchLinks) -> String {
        let mut lines = vec!["service,url".to_string()];
        for (service, url) in links.iter() {
            lines.push(format!("{},{}", service, Self::csv_escape(url)));
        }
        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Shortens `s` to at most `width` characters, marking the cut with "...".
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
