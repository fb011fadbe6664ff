//! CSS selectors for eBay completed-listings pages.
//!
//! Update this file when eBay changes the search results markup, and add
//! a fixture under `tests/fixtures/` for the new layout.

use scraper::Selector;
use std::sync::LazyLock;

/// Results heading ("1,234 results for ..."). Missing on error and empty pages.
pub static RESULT_COUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1.srp-controls__count-heading").unwrap());

/// Info block of a single listing card.
pub static LISTING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.s-item__info.clearfix").unwrap());

/// Listing title.
pub static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.s-item__title").unwrap());

/// "Sold  Oct 3, 2026" marker.
pub static SOLD_DATE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.POSITIVE").unwrap());

/// Final sale price, currency symbol included.
pub static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.s-item__price").unwrap());

/// Shipping cost text ("+$4.99 shipping", "Free shipping").
pub static SHIPPING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.s-item__shipping").unwrap());
