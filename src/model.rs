// ==============================================================================
// Data Model: Dictionaries, Detail Records, and the Persisted Snapshot
// ==============================================================================

use std::collections::BTreeMap;

pub mod catalog;
pub mod champion;
pub mod snapshot;

/// Display name → canonical identifier, e.g. `"Wukong" → "MonkeyKing"`.
///
/// Ordered so that iteration, and therefore every saved snapshot, is
/// deterministic.
pub type NameDictionary = BTreeMap<String, String>;

/// Numeric key (as a string, e.g. `"62"`) → canonical identifier.
pub type KeyAliasMap = BTreeMap<String, String>;

/// A record that can be cached by its own identifier.
pub trait Detail {
    /// The canonical identifier this record is stored under.
    fn id(&self) -> &str;
}
