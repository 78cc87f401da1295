//! # chained-map
//!
//! A generic **separate-chaining** hash map with a **fixed-size** bucket
//! table, built from scratch. The table length is chosen at construction
//! (default 11, a prime) and never changes: there is no load-factor
//! tracking and no rehashing, so bucket placement is stable for the life
//! of the map.
//!
//! The map supports the full associative contract: insert with
//! overwrite-on-duplicate-key, lookup, removal, iteration, bulk extend,
//! detached snapshot views, and content-based equality. Keys only need
//! `Hash + Eq`.
//!
//! ## Example
//! ```rust
//! use chained_map::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! map.insert("one", 1);
//! map.insert("two", 2);
//! assert_eq!(map.get(&"one"), Some(&1));
//! assert_eq!(map.insert("one", 10), Some(1));
//! assert_eq!(map.len(), 2);
//! ```

pub mod error;
pub mod map;

pub use error::{MapError, Result};
pub use map::{ChainedHashMap, ChainedHashMapBuilder, DEFAULT_TABLE_SIZE};
