//! HTML extraction for eBay completed-listings search pages.

use crate::ebay::models::{
    is_placeholder_title, ListingRecord, SoldListings, NO_SHIPPING_INFO, UNKNOWN_DATE,
};
use crate::ebay::selectors;
use crate::error::PricerError;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace, warn};

/// Extracts sold listings from a results page, in document order.
pub fn extract_listings(html: &str) -> Vec<ListingRecord> {
    parse_sold_listings(html).into_listings()
}

/// Parses a results page, keeping track of what was skipped and why.
///
/// A page without the result-count heading is treated as an empty or
/// error page. Cards without a price are skipped with a warning rather
/// than failing the whole page.
pub fn parse_sold_listings(html: &str) -> SoldListings {
    let document = Html::parse_document(html);
    let mut sold = SoldListings::new();

    if document.select(&selectors::RESULT_COUNT).next().is_none() {
        debug!("No result count heading, treating page as empty");
        return sold;
    }
    sold.has_result_count = true;

    for element in document.select(&selectors::LISTING) {
        match parse_listing(element) {
            Ok(Some(record)) => {
                trace!("Parsed listing: {} - {}", record.price, record.title);
                sold.listings.push(record);
            }
            Ok(None) => {
                trace!("Skipping placeholder listing");
                sold.skipped_placeholders += 1;
            }
            Err(e) => {
                warn!("Failed to parse listing: {}", e);
                sold.skipped_malformed += 1;
            }
        }
    }

    debug!(
        "Parsed {} listings ({} placeholders, {} malformed skipped)",
        sold.count(),
        sold.skipped_placeholders,
        sold.skipped_malformed
    );

    sold
}

/// Parses one listing card. `Ok(None)` means a placeholder card.
fn parse_listing(element: ElementRef) -> Result<Option<ListingRecord>, PricerError> {
    let title = first_text(element, &selectors::TITLE).unwrap_or_default();

    if is_placeholder_title(&title) {
        return Ok(None);
    }

    let sold_date =
        first_text(element, &selectors::SOLD_DATE).unwrap_or_else(|| UNKNOWN_DATE.to_string());

    let price = first_text(element, &selectors::PRICE).ok_or_else(|| {
        PricerError::MalformedListing(format!("no price element for '{}'", title))
    })?;

    let shipping_cost = first_text(element, &selectors::SHIPPING)
        .unwrap_or_else(|| NO_SHIPPING_INFO.to_string());

    Ok(Some(ListingRecord { sold_date, title, price, shipping_cost }))
}

/// Trimmed text of the first descendant matching `selector`.
fn first_text(element: ElementRef, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(|e| e.text().collect::<String>().trim().to_string())
}
