//! Fuzzy champion-name resolution and a persisted read-through cache for
//! champion detail records.
//!
//! The [`Cache`] holds four pieces of state, all tagged with the patch they
//! were populated under:
//!
//! - a name dictionary (display name → identifier), used to resolve and
//!   autocomplete what users type,
//! - numeric-key aliases (`"103"` → `"Ahri"`),
//! - detail records keyed by identifier, added lazily as they are fetched,
//! - the patch tag itself.
//!
//! # Resolving user input
//!
//! ```
//! use champcache::Cache;
//! use champcache::model::champion::Champion;
//!
//! let cache: Cache<Champion> = Cache::new("cache.json", 3);
//! cache.set_dictionary(
//!     [("Wukong", "MonkeyKing"), ("Ahri", "Ahri"), ("Braum", "Braum")]
//!         .into_iter()
//!         .map(|(name, id)| (name.to_string(), id.to_string()))
//!         .collect(),
//! );
//!
//! assert_eq!(cache.resolve_name("wu kong")?, "MonkeyKing");
//! assert_eq!(cache.resolve_name("brom")?, "Braum");
//! assert_eq!(cache.autocomplete("a", 10), ["Ahri"]);
//! # Ok::<(), champcache::Error>(())
//! ```
//!
//! # Keeping the cache current
//!
//! [`sync()`] compares the cache's patch against a [`Catalog`] and
//! invalidates and repopulates on change. [`Cache::load`] and [`Cache::save`]
//! persist the whole state as JSON; a missing or corrupt file just means a
//! cold start.
//!
//! # Error handling
//!
//! Fallible operations return [`Error`], which implements
//! [`miette::Diagnostic`] for rich reporting from the CLI.

pub mod cache;
pub mod complete;
pub mod config;
pub mod error;
pub mod model;
pub mod rank;
pub mod resolve;
pub mod suggest;
pub mod sync;

pub use cache::{Cache, LoadOutcome};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{Detail, KeyAliasMap, NameDictionary};
pub use sync::{Catalog, FileCatalog, SyncOutcome, sync};
