//! eBay sold-listings client, extraction and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{sold_listings_url, EbayClient, SoldListingSource, EBAY_BASE_URL};
pub use models::{ListingRecord, SoldListings, NO_SHIPPING_INFO, PLACEHOLDER_TITLE, UNKNOWN_DATE};
pub use parser::{extract_listings, parse_sold_listings};
