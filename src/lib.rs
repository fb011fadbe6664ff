//! book-pricer - sold-price lookup for books by ISBN
//!
//! Fetches eBay's completed-listings page for an ISBN, extracts the sold
//! listings, and builds manual search links for other book marketplaces.

pub mod commands;
pub mod config;
pub mod ebay;
pub mod error;
pub mod events;
pub mod format;
pub mod isbn;
pub mod links;
pub mod search;
pub mod worker;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use ebay::{extract_listings, ListingRecord};
pub use error::PricerError;
pub use events::SearchEvent;
pub use isbn::{sanitize, Isbn};
pub use links::{build_links, SearchLinks};
pub use search::{run_search, SearchOutcome};
