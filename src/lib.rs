//! frame-cache - disk cache for functions that return tabular data
//!
//! Results are keyed by a fingerprint of the function's source text, so an
//! edit to the function body invalidates its cached result automatically.
//!
//! ```no_run
//! use frame_cache::{source_fn, CacheConfig, Frame, FrameCache};
//!
//! # fn main() -> frame_cache::Result<()> {
//! let cache = FrameCache::new(&CacheConfig::default())?;
//! let sales = cache.wrap(source_fn! {
//!     fn sales() -> Frame {
//!         Frame::from_values(vec![5, 54])
//!     }
//! });
//!
//! let frame = sales.call(())?; // computed and written
//! let again = sales.call(())?; // read back from .pd_cache/
//! assert_eq!(frame, again);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod frame;

pub use cache::{
    clear_cache, list_entries, Cached, CachedEntry, ClearOutcome, EntryName, Fingerprint,
    FrameCache, Invoke, SourceFn,
};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use frame::{Column, ColumnData, DType, Frame};

/// Define a function and capture its source text for fingerprinting
///
/// Expands to the function item followed by a [`SourceFn`] holding its name,
/// the stringified item (attributes included) and the function itself.
#[macro_export]
macro_rules! source_fn {
    ($(#[$meta:meta])* $vis:vis fn $name:ident $($rest:tt)*) => {{
        $(#[$meta])*
        $vis fn $name $($rest)*

        $crate::SourceFn::new(
            stringify!($name),
            stringify!($(#[$meta])* $vis fn $name $($rest)*),
            $name,
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_fn_captures_name_and_body() {
        let unit = source_fn! {
            fn answer() -> i64 { 42 }
        };
        assert_eq!(unit.name(), "answer");
        assert!(unit.source().contains("42"));
        assert!(unit.source().starts_with("fn answer"));
    }

    #[test]
    fn test_source_fn_includes_attributes() {
        let plain = source_fn! {
            fn answer() -> i64 { 42 }
        };
        let annotated = source_fn! {
            #[inline]
            fn answer() -> i64 { 42 }
        };
        assert_ne!(plain.source(), annotated.source());
        assert!(annotated.source().contains("inline"));
    }
}
