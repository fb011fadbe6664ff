//! ISBN input sanitizing.
//!
//! The marketplace and link services are only ever given the sanitized form,
//! so nothing outside `[A-Za-z0-9_]` can reach a URL.

use crate::error::PricerError;
use regex_lite::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

/// Removes every character outside `[A-Za-z0-9_]`.
pub fn sanitize(raw: &str) -> String {
    NON_WORD.replace_all(raw, "").into_owned()
}

/// A sanitized, non-empty ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    /// Sanitizes raw user input, rejecting it when nothing is left.
    pub fn parse(raw: &str) -> Result<Self, PricerError> {
        let cleaned = sanitize(raw);
        if cleaned.is_empty() {
            return Err(PricerError::InvalidIsbn(raw.to_string()));
        }
        Ok(Self(cleaned))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Isbn {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_hyphens() {
        assert_eq!(sanitize("978-0-13-468599-1"), "9780134685991");
    }

    #[test]
    fn test_sanitize_keeps_check_letter_and_underscore() {
        assert_eq!(sanitize("0-8044-2957-X"), "080442957X");
        assert_eq!(sanitize("abc_123"), "abc_123");
    }

    #[test]
    fn test_sanitize_strips_whitespace_and_punctuation() {
        assert_eq!(sanitize("  978 0134 685991\t"), "9780134685991");
        assert_eq!(sanitize("isbn: 978.0.13/468599#1?&="), "isbn9780134685991");
    }

    #[test]
    fn test_sanitize_strips_non_ascii() {
        assert_eq!(sanitize("978–0–13"), "978013");
        assert_eq!(sanitize("é978"), "978");
    }

    #[test]
    fn test_parse_rejects_punctuation_only() {
        for raw in ["", "   ", "---", " - . / ", "\t\n", "!@#$%^&*()"] {
            let err = Isbn::parse(raw).unwrap_err();
            assert!(matches!(err, PricerError::InvalidIsbn(_)), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_parse_valid() {
        let isbn = Isbn::parse(" 978-0-13-468599-1 ").unwrap();
        assert_eq!(isbn.as_str(), "9780134685991");
        assert_eq!(isbn.to_string(), "9780134685991");
    }

    #[test]
    fn test_from_str() {
        let isbn: Isbn = "0-8044-2957-X".parse().unwrap();
        assert_eq!(isbn.as_ref(), "080442957X");
        assert!("...".parse::<Isbn>().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let isbn = Isbn::parse("978-1").unwrap();
        assert_eq!(serde_json::to_string(&isbn).unwrap(), "\"9781\"");
    }
}
