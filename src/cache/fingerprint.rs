//! Source fingerprints
//!
//! A fingerprint is the first six hex characters of the MD5 digest of a
//! function's source text. Collisions are possible and accepted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of hex characters kept from the digest
pub const FINGERPRINT_LEN: usize = 6;

/// Truncated digest of a unit of logic's source text
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint the UTF-8 bytes of `source`
    pub fn of_source(source: &str) -> Self {
        let digest = format!("{:x}", md5::compute(source.as_bytes()));
        Self(digest[..FINGERPRINT_LEN].to_string())
    }

    /// Parse a fingerprint as it appears in a cache filename
    ///
    /// Accepts exactly six ASCII hex digits; uppercase digits are normalised.
    pub fn parse(text: &str) -> Option<Self> {
        if text.len() == FINGERPRINT_LEN && text.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(text.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_md5_prefix() {
        // md5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(Fingerprint::of_source("").as_str(), "d41d8c");
        // md5("hello") = 5d41402abc4b2a76b9719d911017c592
        assert_eq!(Fingerprint::of_source("hello").as_str(), "5d4140");
    }

    #[test]
    fn test_fingerprint_changes_with_source() {
        let a = Fingerprint::of_source("fn load() { 1 }");
        let b = Fingerprint::of_source("fn load() { 2 }");
        assert_ne!(a, b);
        assert_eq!(a, Fingerprint::of_source("fn load() { 1 }"));
    }

    #[test]
    fn test_parse_accepts_six_hex_digits() {
        assert_eq!(Fingerprint::parse("a1b2c3").unwrap().as_str(), "a1b2c3");
        assert_eq!(Fingerprint::parse("ABCDEF").unwrap().as_str(), "abcdef");
    }

    #[test]
    fn test_parse_rejects_wrong_width_or_digits() {
        assert!(Fingerprint::parse("1").is_none());
        assert!(Fingerprint::parse("abcde").is_none());
        assert!(Fingerprint::parse("abcdef0").is_none());
        assert!(Fingerprint::parse("abcdeg").is_none());
        assert!(Fingerprint::parse("").is_none());
    }
}
