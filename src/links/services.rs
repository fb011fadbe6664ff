//! External book-search services offered as manual links.

use crate::isbn::Isbn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Book marketplaces we link to but never fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkService {
    BookFinder,
    Isbns,
    Alibris,
}

impl LinkService {
    /// Human-readable service name.
    pub fn name(&self) -> &'static str {
        match self {
            LinkService::BookFinder => "BookFinder.com",
            LinkService::Isbns => "ISBNS.net",
            LinkService::Alibris => "Alibris",
        }
    }

    pub fn domain(&self) -> &'static str {
        match self {
            LinkService::BookFinder => "www.bookfinder.com",
            LinkService::Isbns => "www.isbns.net",
            LinkService::Alibris => "www.alibris.com",
        }
    }

    /// Link caption shown next to the URL.
    pub fn label(&self) -> String {
        format!("Open {} Search", self.name())
    }

    /// Builds the search URL for this service.
    ///
    /// Query parameters pin USD pricing, English results and used copies
    /// where the service supports it.
    pub fn url_for(&self, isbn: &Isbn) -> String {
        match self {
            LinkService::BookFinder => format!(
                "https://{}/search/?keywords={}&currency=USD&destination=us&mode=advanced\
                 &il=en&classic=2&ps=tp&lang=en&st=sh&ac=qr&submit=",
                self.domain(),
                isbn
            ),
            LinkService::Isbns => format!(
                "https://{}/isbn/{}/?posted=1&used=True&rentals=False&digital=False&variants=False",
                self.domain(),
                isbn
            ),
            LinkService::Alibris => format!(
                "https://{}/booksearch?mtype=B&keyword={}&hs.x=0&hs.y=0",
                self.domain(),
                isbn
            ),
        }
    }

    /// Returns all services in display order.
    pub fn all() -> &'static [LinkService] {
        &[LinkService::BookFinder, LinkService::Isbns, LinkService::Alibris]
    }
}

impl fmt::Display for LinkService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            LinkService::BookFinder => "bookfinder",
            LinkService::Isbns => "isbns",
            LinkService::Alibris => "alibris",
        };
        write!(f, "{}", code)
    }
}

impl FromStr for LinkService {
    type Err = LinkServiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bookfinder" | "bookfinder.com" => Ok(LinkService::BookFinder),
            "isbns" | "isbns.net" => Ok(LinkService::Isbns),
            "alibris" => Ok(LinkService::Alibris),
            _ => Err(LinkServiceParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LinkServiceParseError(String);

impl fmt::Display for LinkServiceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown service '{}'. Valid services: bookfinder, isbns, alibris", self.0)
    }
}

impl std::error::Error for LinkServiceParseError {}
