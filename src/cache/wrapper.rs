//! Source-fingerprinted function wrapper

use super::entry::EntryName;
use super::fingerprint::Fingerprint;
use super::storage::FrameCache;
use crate::error::{CacheError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// A callable together with the text that identifies its logic
///
/// The text is normally the function's own source, captured at compile time
/// by [`source_fn!`](crate::source_fn). Any change to it invalidates the
/// cached result.
pub struct SourceFn<F> {
    name: String,
    source: String,
    func: F,
}

impl<F> SourceFn<F> {
    pub fn new(name: impl Into<String>, source: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            func,
        }
    }

    /// Identify the logic by an explicit version tag instead of source text
    ///
    /// Bump the tag whenever the function body changes.
    pub fn versioned(name: impl Into<String>, tag: impl Into<String>, func: F) -> Self {
        Self::new(name, tag, func)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Calling convention for wrapped functions: arguments travel as a tuple
pub trait Invoke<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg),*> Invoke<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> Out {
                (self)($($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(A);
impl_invoke!(A, B);
impl_invoke!(A, B, C);
impl_invoke!(A, B, C, D);
impl_invoke!(A, B, C, D, E);
impl_invoke!(A, B, C, D, E, G);

/// A function whose result is persisted under its source fingerprint
///
/// Arguments are not part of the key: every call of the same source maps to
/// the same file.
pub struct Cached<F> {
    store: FrameCache,
    unit: SourceFn<F>,
    fingerprint: Fingerprint,
}

impl<F> Cached<F> {
    pub(crate) fn new(store: FrameCache, unit: SourceFn<F>) -> Self {
        let fingerprint = Fingerprint::of_source(&unit.source);
        debug!(function = %unit.name, %fingerprint, "fingerprinted source");
        Self {
            store,
            unit,
            fingerprint,
        }
    }

    pub fn name(&self) -> &str {
        &self.unit.name
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// File this function's result lives in
    pub fn entry_path(&self) -> PathBuf {
        self.store
            .entry_path(&EntryName::new(self.unit.name.clone(), self.fingerprint.clone()))
    }

    /// Whether a result for the current source is on disk
    pub fn is_cached(&self) -> bool {
        self.entry_path().exists()
    }

    /// Return the cached result, or compute and persist it
    ///
    /// On a miss, entries left by earlier versions of the function are
    /// removed before it runs.
    ///
    /// # Arguments
    /// * `args` - Arguments for the wrapped function as a tuple (`()` for none)
    ///
    /// # Returns
    /// The stored or freshly computed result, or an error if the name is not
    /// a valid entry name or the cache file cannot be read or written
    pub fn call<Args>(&self, args: Args) -> Result<F::Output>
    where
        F: Invoke<Args>,
        F::Output: Serialize + DeserializeOwned,
    {
        self.resolve(|| Ok(self.unit.func.invoke(args)))
    }

    /// Like [`call`](Self::call) for functions that can fail
    ///
    /// An `Err` is returned as [`CacheError::Function`] and nothing is written.
    pub fn try_call<Args, T, E>(&self, args: Args) -> Result<T>
    where
        F: Invoke<Args, Output = std::result::Result<T, E>>,
        T: Serialize + DeserializeOwned,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        self.resolve(|| {
            self.unit
                .func
                .invoke(args)
                .map_err(|e| CacheError::Function {
                    name: self.unit.name.clone(),
                    source: e.into(),
                })
        })
    }

    fn resolve<T>(&self, compute: impl FnOnce() -> Result<T>) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        EntryName::check_function_name(&self.unit.name)?;
        let path = self.entry_path();

        if path.exists() {
            let value = self.store.load(&path)?;
            info!(function = %self.unit.name, path = %path.display(), "read cached result");
            return Ok(value);
        }

        self.store.prune(&self.unit.name)?;
        let value = compute()?;
        self.store.store(&path, &value)?;
        info!(function = %self.unit.name, path = %path.display(), "wrote cached result");
        Ok(value)
    }
}
