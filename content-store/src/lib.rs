//! Content collections persisted as flat JSON files.
//!
//! One file per collection, each holding an array of arbitrary JSON objects.
//! Reads go through [`CachedStore`], which keeps each collection in memory
//! for a fixed freshness window before touching disk again. Writes replace
//! the whole file; there is no locking, so concurrent writers to the same
//! collection race and the last write wins.

pub mod cache;
pub mod clock;
pub mod error;
pub mod store;

pub use cache::CachedStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::StoreError;
pub use store::{Collection, JsonStore, Record};
