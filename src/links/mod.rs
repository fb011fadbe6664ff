//! Manual search links for other book marketplaces.

pub mod services;

pub use services::LinkService;

use crate::isbn::Isbn;
use serde::Serialize;

/// One URL per external service, built from the sanitized ISBN only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLinks {
    pub bookfinder: String,
    pub isbns: String,
    pub alibris: String,
}

impl SearchLinks {
    /// Returns the URL for a single service.
    pub fn get(&self, service: LinkService) -> &str {
        match service {
            LinkService::BookFinder => &self.bookfinder,
            LinkService::Isbns => &self.isbns,
            LinkService::Alibris => &self.alibris,
        }
    }

    /// Iterates `(service, url)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (LinkService, &str)> + '_ {
        LinkService::all().iter().map(move |service| (*service, self.get(*service)))
    }
}

/// Builds the three manual search links. Pure string formatting.
pub fn build_links(isbn: &Isbn) -> SearchLinks {
    SearchLinks {
        bookfinder: LinkService::BookFinder.url_for(isbn),
        isbns: LinkService::Isbns.url_for(isbn),
        alibris: LinkService::Alibris.url_for(isbn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_links_contains_sanitized_isbn() {
        let isbn = Isbn::parse("978-0-13-468599-1").unwrap();
        let links = build_links(&isbn);

        let urls: Vec<_> = links.iter().map(|(_, url)| url).collect();
        assert_eq!(urls.len(), 3);
        for url in urls {
            assert!(url.contains("9780134685991"), "{}", url);
            assert!(!url.contains("978-0"), "{}", url);
        }
    }

    #[test]
    fn test_build_links_never_leaks_raw_characters() {
        for raw in ["0 8044 2957 X", "isbn:<978>\"13\"", "978/0/13#frag", "9 7 8%20"] {
            let isbn = Isbn::parse(raw).unwrap();
            let links = build_links(&isbn);
            for (service, url) in links.iter() {
                assert!(url.contains(isbn.as_str()), "{} missing isbn", service);
                assert!(!url.contains(' '), "{}: {}", service, url);
                assert!(!url.contains('<') && !url.contains('"'), "{}: {}", service, url);
                assert!(!url.contains('#') && !url.contains('%'), "{}: {}", service, url);
            }
        }
    }

    #[test]
    fn test_links_are_distinct_services() {
        let isbn = Isbn::parse("080442957X").unwrap();
        let links = build_links(&isbn);

        assert!(links.bookfinder.starts_with("https://www.bookfinder.com/"));
        assert!(links.isbns.starts_with("https://www.isbns.net/"));
        assert!(links.alibris.starts_with("https://www.alibris.com/"));
        assert_eq!(links.get(LinkService::Alibris), links.alibris);
    }

    #[test]
    fn test_links_serialize_by_service() {
        let isbn = Isbn::parse("1234").unwrap();
        let json = serde_json::to_value(build_links(&isbn)).unwrap();
        assert!(json["bookfinder"].as_str().unwrap().contains("keywords=1234"));
        assert!(json["isbns"].as_str().unwrap().contains("/isbn/1234/"));
        assert!(json["alibris"].as_str().unwrap().contains("keyword=1234"));
    }
}
