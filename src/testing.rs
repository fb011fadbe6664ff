//! Test doubles shared by unit tests.

use crate::ebay::{sold_listings_url, SoldListingSource, EBAY_BASE_URL};
use crate::error::PricerError;
use crate::isbn::Isbn;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum MockReply {
    Html(String),
    Timeout(u64),
    Status(u16),
}

/// Canned marketplace keyed by sanitized ISBN. Unknown ISBNs get an empty page.
#[derive(Default)]
pub struct MockSource {
    replies: HashMap<String, (MockReply, Duration)>,
    calls: Arc<AtomicU32>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, isbn: &str, reply: MockReply) -> Self {
        self.delayed_reply(isbn, reply, Duration::ZERO)
    }

    pub fn delayed_reply(mut self, isbn: &str, reply: MockReply, delay: Duration) -> Self {
        self.replies.insert(isbn.to_string(), (reply, delay));
        self
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SoldListingSource for MockSource {
    async fn fetch_sold(&self, isbn: &Isbn) -> Result<String, PricerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let Some((reply, delay)) = self.replies.get(isbn.as_str()) else {
            return Ok("<html></html>".to_string());
        };

        if !delay.is_zero() {
            tokio::time::sleep(*delay).await;
        }

        match reply {
            MockReply::Html(html) => Ok(html.clone()),
            MockReply::Timeout(secs) => Err(PricerError::Timeout(*secs)),
            MockReply::Status(code) => Err(PricerError::Status(*code)),
        }
    }

    fn search_url(&self, isbn: &Isbn) -> String {
        sold_listings_url(EBAY_BASE_URL, isbn)
    }
}

/// Listing card as `(title, sold date, price, shipping)`.
pub type CardFields<'a> = (&'a str, Option<&'a str>, Option<&'a str>, Option<&'a str>);

/// Builds a results page with the count heading and one card per entry.
pub fn results_page(cards: &[CardFields]) -> String {
    let mut html = format!(
        r#"<html><body><h1 class="srp-controls__count-heading"><span>{}</span> results</h1><ul>"#,
        cards.len()
    );

    for (title, date, price, shipping) in cards {
        html.push_str(r#"<li class="s-item"><div class="s-item__info clearfix">"#);
        html.push_str(&format!(r#"<div class="s-item__title"><span>{}</span></div>"#, title));
        if let Some(date) = date {
            html.push_str(&format!(r#"<span class="POSITIVE">{}</span>"#, date));
        }
        if let Some(price) = price {
            html.push_str(&format!(r#"<span class="s-item__price">{}</span>"#, price));
        }
        if let Some(shipping) = shipping {
            html.push_str(&format!(r#"<span class="s-item__shipping">{}</span>"#, shipping));
        }
        html.push_str("</div></li>");
    }

    html.push_str("</ul></body></html>");
    html
}
