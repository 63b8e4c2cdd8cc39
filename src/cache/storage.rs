//! Cache storage implementation

use super::entry::{CachedEntry, EntryName};
use super::wrapper::{Cached, SourceFn};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Outcome of a bulk clear
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Paths of the removed cache files
    Cleared(Vec<PathBuf>),
    /// The directory held no cache files
    NothingToClear,
}

impl ClearOutcome {
    /// Number of removed files
    pub fn count(&self) -> usize {
        match self {
            ClearOutcome::Cleared(paths) => paths.len(),
            ClearOutcome::NothingToClear => 0,
        }
    }
}

/// Directory of cached function results
#[derive(Debug, Clone)]
pub struct FrameCache {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl FrameCache {
    /// Open the cache, creating its directory if needed
    ///
    /// Only the last path component is created. An existing directory is
    /// fine; any other failure is returned.
    ///
    /// # Arguments
    /// * `config` - Configuration naming the cache directory
    ///
    /// # Returns
    /// A FrameCache instance, or an error if the cache directory cannot be created
    pub fn new(config: &CacheConfig) -> Result<Self> {
        let cache_dir = config.cache_dir.clone();

        match fs::create_dir(&cache_dir) {
            Ok(()) => info!(dir = %cache_dir.display(), "created cache directory"),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(CacheError::CreateDir {
                    path: cache_dir,
                    source: e,
                })
            }
        }

        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Wrap a unit of logic so its result is cached in this directory
    pub fn wrap<F>(&self, unit: SourceFn<F>) -> Cached<F> {
        Cached::new(self.clone(), unit)
    }

    /// Path of the file holding `name`
    pub fn entry_path(&self, name: &EntryName) -> PathBuf {
        self.cache_dir.join(name.file_name())
    }

    /// Decode a cached value
    pub(crate) fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let file = File::open(path).map_err(|e| CacheError::io(path, e))?;
        let mut reader = BufReader::new(file);
        bincode::serde::decode_from_std_read(&mut reader, bincode::config::standard()).map_err(
            |e| CacheError::Deserialize {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        )
    }

    /// Encode a value into a cache file, replacing any previous content
    ///
    /// A file whose encoding fails is removed so the next call recomputes.
    pub(crate) fn store<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let file = File::create(path).map_err(|e| CacheError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        let encoded =
            bincode::serde::encode_into_std_write(value, &mut writer, bincode::config::standard());
        if let Err(e) = encoded {
            drop(writer);
            if let Err(remove) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %remove, "failed to remove partial cache file");
            }
            return Err(CacheError::Serialize {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
        writer.flush().map_err(|e| CacheError::io(path, e))?;
        Ok(())
    }

    /// Remove every entry belonging to `function_name`
    ///
    /// Returns the removed paths. Files that only share the prefix are kept.
    pub fn prune(&self, function_name: &str) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for file_name in self.file_names()? {
            if let Some(fingerprint) = EntryName::matches(&file_name, function_name) {
                let path = self.cache_dir.join(&file_name);
                fs::remove_file(&path).map_err(|e| CacheError::io(&path, e))?;
                info!(
                    function = function_name,
                    %fingerprint,
                    path = %path.display(),
                    "removed stale cache entry"
                );
                removed.push(path);
            }
        }
        Ok(removed)
    }

    /// Remove every convention-named file in the directory
    pub fn clear(&self) -> Result<ClearOutcome> {
        let mut removed = Vec::new();
        for file_name in self.file_names()? {
            if EntryName::parse(&file_name).is_none() {
                debug!(file = %file_name, "skipping file outside the naming convention");
                continue;
            }
            let path = self.cache_dir.join(&file_name);
            fs::remove_file(&path).map_err(|e| CacheError::io(&path, e))?;
            removed.push(path);
        }

        if removed.is_empty() {
            info!(dir = %self.cache_dir.display(), "no cached frames to clear");
            Ok(ClearOutcome::NothingToClear)
        } else {
            info!(
                dir = %self.cache_dir.display(),
                count = removed.len(),
                "cleared cached frames"
            );
            Ok(ClearOutcome::Cleared(removed))
        }
    }

    /// Convention-named files in the directory, sorted by filename
    pub fn entries(&self) -> Result<Vec<CachedEntry>> {
        let mut entries = Vec::new();
        for file_name in self.file_names()? {
            let Some(name) = EntryName::parse(&file_name) else {
                continue;
            };
            let path = self.cache_dir.join(&file_name);
            let size = fs::metadata(&path)
                .map_err(|e| CacheError::io(&path, e))?
                .len();
            entries.push(CachedEntry {
                function_name: name.function_name,
                fingerprint: name.fingerprint,
                path,
                size,
            });
        }
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    /// Names of the regular files in the cache directory
    fn file_names(&self) -> Result<Vec<String>> {
        let dir = fs::read_dir(&self.cache_dir).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CacheError::DirectoryMissing {
                    path: self.cache_dir.clone(),
                }
            } else {
                CacheError::io(&self.cache_dir, e)
            }
        })?;

        let mut names = Vec::new();
        for entry in dir {
            let entry = entry.map_err(|e| CacheError::io(&self.cache_dir, e))?;
            let is_file = entry
                .file_type()
                .map_err(|e| CacheError::io(entry.path(), e))?
                .is_file();
            if !is_file {
                continue;
            }
            // Non-UTF-8 names can never follow the convention
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}

/// Clear the cache directory without creating it
pub fn clear_cache(config: &CacheConfig) -> Result<ClearOutcome> {
    existing(config).clear()
}

/// List cached entries without creating the directory
pub fn list_entries(config: &CacheConfig) -> Result<Vec<CachedEntry>> {
    existing(config).entries()
}

fn existing(config: &CacheConfig) -> FrameCache {
    FrameCache {
        cache_dir: config.cache_dir.clone(),
    }
}
