//! Configuration types for frame-cache

use std::path::{Path, PathBuf};

/// Default cache directory, relative to the working directory at call time
pub const DEFAULT_CACHE_DIR: &str = ".pd_cache";

/// Configuration options for the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Directory holding the cache files (default: `.pd_cache`)
    pub cache_dir: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
        }
    }
}

impl CacheConfig {
    /// Configuration rooted at an explicit directory
    pub fn with_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cache_dir() {
        let config = CacheConfig::default();
        assert_eq!(config.cache_dir(), Path::new(".pd_cache"));
    }

    #[test]
    fn test_with_dir_overrides_default() {
        let config = CacheConfig::with_dir("/tmp/frames");
        assert_eq!(config.cache_dir(), Path::new("/tmp/frames"));
        assert_ne!(config, CacheConfig::default());
    }
}
