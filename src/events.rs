//! Status events reported while a search runs.
//!
//! Each event renders as one log line for the status panel (stderr in the
//! CLI). Wording is for humans; match on the variants, not the text.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SearchEvent {
    /// Input had nothing left after sanitizing; no request was made.
    InvalidIsbn { input: String },
    Started { isbn: String },
    Requesting { url: String },
    NoResults,
    TimedOut { secs: u64 },
    FetchFailed { reason: String },
    Retrieved { count: usize },
}

impl SearchEvent {
    /// Returns true for events that mean the fetch itself did not succeed.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            SearchEvent::InvalidIsbn { .. }
                | SearchEvent::TimedOut { .. }
                | SearchEvent::FetchFailed { .. }
        )
    }
}

impl fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEvent::InvalidIsbn { input } => write!(f, "Invalid ISBN entered: '{}'", input),
            SearchEvent::Started { isbn } => write!(f, "Searching prices for ISBN: {}", isbn),
            SearchEvent::Requesting { url } => write!(f, "Searching eBay with URL: {}", url),
            SearchEvent::NoResults => write!(f, "No results found on eBay."),
            SearchEvent::TimedOut { secs } => write!(f, "eBay search timed out after {}s.", secs),
            SearchEvent::FetchFailed { reason } => write!(f, "eBay search failed: {}", reason),
            SearchEvent::Retrieved { count } => {
                write!(f, "Results retrieved from eBay.com ({} sold listings).", count)
            }
        }
    }
}
