//! On-disk caching of function results
//!
//! A wrapped function's result is stored as `<name>_<fingerprint>.pkl`, where
//! the fingerprint is derived from the function's source text. A call with
//! an unchanged source reads the file back; a changed source removes the
//! stale file for that name and writes a fresh one.

mod entry;
mod fingerprint;
mod storage;
mod wrapper;

pub use entry::{CachedEntry, EntryName, CACHE_EXT};
pub use fingerprint::{Fingerprint, FINGERPRINT_LEN};
pub use storage::{clear_cache, list_entries, ClearOutcome, FrameCache};
pub use wrapper::{Cached, Invoke, SourceFn};
