//! One search, start to finish: sanitize, fetch, extract, build links.

use crate::ebay::{parse_sold_listings, ListingRecord, SoldListingSource};
use crate::error::PricerError;
use crate::events::SearchEvent;
use crate::isbn::Isbn;
use crate::links::{build_links, SearchLinks};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything a presentation layer needs to show for one ISBN.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub isbn: Isbn,
    /// Marketplace URL that was requested
    pub search_url: String,
    pub listings: Vec<ListingRecord>,
    pub links: SearchLinks,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Runs a single search, reporting progress through `emit`.
///
/// Only an unusable ISBN is returned as an error, and it is rejected before
/// any request is made. Timeouts and every other fetch failure are reported
/// as events and produce an outcome with no listings.
pub async fn run_search<S, F>(
    source: &S,
    raw_isbn: &str,
    mut emit: F,
) -> Result<SearchOutcome, PricerError>
where
    S: SoldListingSource + ?Sized,
    F: FnMut(SearchEvent),
{
    let mut report = |event: SearchEvent| {
        if event.is_failure() {
            warn!("{}", event);
        } else {
            info!("{}", event);
        }
        emit(event);
    };

    let isbn = match Isbn::parse(raw_isbn) {
        Ok(isbn) => isbn,
        Err(e) => {
            report(SearchEvent::InvalidIsbn { input: raw_isbn.to_string() });
            return Err(e);
        }
    };

    report(SearchEvent::Started { isbn: isbn.to_string() });

    let search_url = source.search_url(&isbn);
    report(SearchEvent::Requesting { url: search_url.clone() });

    let listings = match source.fetch_sold(&isbn).await {
        Ok(html) => {
            let sold = parse_sold_listings(&html);
            debug!(
                "Result count heading present: {}, malformed listings skipped: {}",
                sold.has_result_count, sold.skipped_malformed
            );

            if sold.is_empty() {
                report(SearchEvent::NoResults);
            } else {
                report(SearchEvent::Retrieved { count: sold.count() });
            }
            sold.into_listings()
        }
        Err(PricerError::Timeout(secs)) => {
            report(SearchEvent::TimedOut { secs });
            Vec::new()
        }
        Err(e) => {
            report(SearchEvent::FetchFailed { reason: e.to_string() });
            Vec::new()
        }
    };

    Ok(SearchOutcome { links: build_links(&isbn), isbn, search_url, listings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{results_page, MockReply, MockSource};

    async fn run(source: &MockSource, raw: &str) -> (Result<SearchOutcome, PricerError>, Vec<SearchEvent>) {
        let mut events = Vec::new();
        let result = run_search(source, raw, |event| events.push(event)).await;
        (result, events)
    }

    #[tokio::test]
    async fn test_invalid_isbn_makes_no_request() {
        let source = MockSource::new();

        for raw in ["", "  ", "---", "(.)"] {
            let (result, events) = run(&source, raw).await;
            assert!(matches!(result, Err(PricerError::InvalidIsbn(_))));
            assert_eq!(events, vec![SearchEvent::InvalidIsbn { input: raw.to_string() }]);
        }

        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_search_events_and_outcome() {
        let source = MockSource::new().reply(
            "9780134685991",
            MockReply::Html(results_page(&[
                ("Effective Java", Some("Sold Oct 1, 2026"), Some("$30.00"), Some("Free shipping")),
                ("Shop on eBay", None, Some("$1.00"), None),
                ("Effective Java 3rd", None, Some("$28.00"), None),
            ])),
        );

        let (result, events) = run(&source, "978-0-13-468599-1").await;
        let outcome = result.unwrap();

        assert_eq!(outcome.isbn.as_str(), "9780134685991");
        assert!(outcome.search_url.contains("_nkw=9780134685991"));
        assert_eq!(outcome.listings.len(), 2);
        assert_eq!(outcome.listings[1].sold_date, "Unknown Date");
        assert!(outcome.links.alibris.contains("9780134685991"));

        assert_eq!(
            events,
            vec![
                SearchEvent::Started { isbn: "9780134685991".into() },
                SearchEvent::Requesting { url: outcome.search_url.clone() },
                SearchEvent::Retrieved { count: 2 },
            ]
        );
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_page_without_results() {
        let source =
            MockSource::new().reply("123", MockReply::Html("<html><body></body></html>".into()));

        let (result, events) = run(&source, "123").await;
        let outcome = result.unwrap();
        assert!(outcome.is_empty());
        assert_eq!(events.last(), Some(&SearchEvent::NoResults));
    }

    #[tokio::test]
    async fn test_timeout_becomes_zero_results() {
        let source = MockSource::new().reply("123", MockReply::Timeout(30));

        let (result, events) = run(&source, "123").await;
        let outcome = result.unwrap();
        assert!(outcome.is_empty());
        assert_eq!(events.last(), Some(&SearchEvent::TimedOut { secs: 30 }));
        assert!(!events.contains(&SearchEvent::NoResults));
        assert!(outcome.links.bookfinder.contains("keywords=123"));
    }

    #[tokio::test]
    async fn test_other_fetch_failures_become_zero_results() {
        let source = MockSource::new().reply("123", MockReply::Status(503));

        let (result, events) = run(&source, "123").await;
        assert!(result.unwrap().is_empty());
        match events.last() {
            Some(SearchEvent::FetchFailed { reason }) => assert!(reason.contains("503")),
            other => panic!("unexpected last event: {:?}", other),
        }
    }
}
