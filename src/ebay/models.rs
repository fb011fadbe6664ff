//! Data models for sold listings.

use serde::{Deserialize, Serialize};

/// Shown when a listing has no sold-date marker.
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Shown when a listing has no shipping marker.
pub const NO_SHIPPING_INFO: &str = "No shipping info";

/// Title eBay uses for promotional filler cards.
pub const PLACEHOLDER_TITLE: &str = "Shop on eBay";

/// A single sold listing. All fields are display strings, unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub sold_date: String,
    pub title: String,
    /// Sale price including the currency symbol
    pub price: String,
    pub shipping_cost: String,
}

impl ListingRecord {
    pub fn new(
        sold_date: impl Into<String>,
        title: impl Into<String>,
        price: impl Into<String>,
        shipping_cost: impl Into<String>,
    ) -> Self {
        Self {
            sold_date: sold_date.into(),
            title: title.into(),
            price: price.into(),
            shipping_cost: shipping_cost.into(),
        }
    }

    /// Returns true if the listing had no sold-date marker.
    pub fn has_unknown_date(&self) -> bool {
        self.sold_date == UNKNOWN_DATE
    }

    /// Returns true if the listing had no shipping marker.
    pub fn has_shipping_info(&self) -> bool {
        self.shipping_cost != NO_SHIPPING_INFO
    }
}

/// Returns true if `title` is eBay's promotional placeholder.
pub fn is_placeholder_title(title: &str) -> bool {
    title.trim().eq_ignore_ascii_case(PLACEHOLDER_TITLE)
}

/// Everything extracted from one results page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoldListings {
    /// Listings in document order
    pub listings: Vec<ListingRecord>,
    /// Whether the page carried the result-count heading
    pub has_result_count: bool,
    /// Placeholder cards that were filtered out
    pub skipped_placeholders: usize,
    /// Cards dropped because they lacked a price
    pub skipped_malformed: usize,
}

impl SoldListings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of listings.
    pub fn count(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn into_listings(self) -> Vec<ListingRecord> {
        self.listings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_title_matching() {
        assert!(is_placeholder_title("Shop on eBay"));
        assert!(is_placeholder_title("  shop on ebay \n"));
        assert!(is_placeholder_title("SHOP ON EBAY"));
        assert!(!is_placeholder_title("Shop on eBay: Rust Book"));
        assert!(!is_placeholder_title(""));
    }

    #[test]
    fn test_listing_sentinels() {
        let record = ListingRecord::new(UNKNOWN_DATE, "Rust", "$10.00", NO_SHIPPING_INFO);
        assert!(record.has_unknown_date());
        assert!(!record.has_shipping_info());

        let record = ListingRecord::new("Sold Oct 3", "Rust", "$10.00", "Free shipping");
        assert!(!record.has_unknown_date());
        assert!(record.has_shipping_info());
    }

    #[test]
    fn test_sold_listings_default() {
        let sold = SoldListings::new();
        assert!(sold.is_empty());
        assert_eq!(sold.count(), 0);
        assert!(!sold.has_result_count);
        assert_eq!(sold.skipped_placeholders, 0);
        assert_eq!(sold.skipped_malformed, 0);
    }

    #[test]
    fn test_listing_serialization() {
        let record = ListingRecord::new("Sold Oct 3, 2026", "Effective Java", "$25.00", "Free");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"sold_date\":\"Sold Oct 3, 2026\""));
        assert!(json.contains("\"shipping_cost\":\"Free\""));

        let parsed: ListingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
