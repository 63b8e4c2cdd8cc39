//! Cache filename convention: `<function_name>_<fingerprint>.pkl`

use super::fingerprint::{Fingerprint, FINGERPRINT_LEN};
use crate::error::{CacheError, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Extension of every cache file
pub const CACHE_EXT: &str = "pkl";

/// Logical name of a cache entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryName {
    pub function_name: String,
    pub fingerprint: Fingerprint,
}

impl EntryName {
    pub fn new(function_name: impl Into<String>, fingerprint: Fingerprint) -> Self {
        Self {
            function_name: function_name.into(),
            fingerprint,
        }
    }

    /// Check that `function_name` yields a single file inside the cache directory
    ///
    /// Empty names, path separators and `.`/`..` would place the file where
    /// pruning and clearing never look.
    pub fn check_function_name(function_name: &str) -> Result<()> {
        let reason = if function_name.is_empty() {
            "name is empty"
        } else if function_name.contains(['/', '\\']) {
            "name contains a path separator"
        } else if function_name == "." || function_name == ".." {
            "name is a relative path component"
        } else if function_name.contains('\0') {
            "name contains a NUL byte"
        } else {
            return Ok(());
        };
        Err(CacheError::InvalidName {
            name: function_name.to_string(),
            reason,
        })
    }

    /// Physical filename of this entry
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}.{}",
            self.function_name, self.fingerprint, CACHE_EXT
        )
    }

    /// Match `file_name` against the entries of exactly `function_name`
    ///
    /// Returns the fingerprint when the name is `function_name`, an
    /// underscore, six hex digits and `.pkl`. Names that merely share the
    /// prefix (`foobar_1.pkl`, `foo_bar_abcdef.pkl` for `foo`) do not match.
    pub fn matches(file_name: &str, function_name: &str) -> Option<Fingerprint> {
        let rest = file_name.strip_prefix(function_name)?.strip_prefix('_')?;
        let digits = rest.strip_suffix(CACHE_EXT)?.strip_suffix('.')?;
        Fingerprint::parse(digits)
    }

    /// Recognise any file that follows the naming convention
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(CACHE_EXT)?.strip_suffix('.')?;
        // The fingerprint is fixed-width, so split from the right
        let split = stem.len().checked_sub(FINGERPRINT_LEN + 1)?;
        if split == 0 || !stem.is_char_boundary(split) {
            return None;
        }
        let (function_name, tail) = stem.split_at(split);
        let fingerprint = Fingerprint::parse(tail.strip_prefix('_')?)?;
        Some(Self::new(function_name, fingerprint))
    }
}

/// A convention-named file found in the cache directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CachedEntry {
    pub function_name: String,
    pub fingerprint: Fingerprint,
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}
