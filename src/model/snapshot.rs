//! The unit of persistence: everything the cache holds, tagged with the patch
//! it was populated under.
//!
//! On disk this is a JSON object:
//!
//! ```json
//! {
//!   "patch": "14.1.1",
//!   "champions": { "Ahri": { "id": "Ahri", ... } },
//!   "champion_map": { "Ahri": "Ahri", "Wukong": "MonkeyKing" },
//!   "champion_key_map": { "103": "Ahri", "62": "MonkeyKing" }
//! }
//! ```
//!
//! Missing keys read back as empty, so a snapshot written before the key map
//! existed still loads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{KeyAliasMap, NameDictionary};

/// An owned snapshot, as read back from disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub struct Snapshot<R> {
    #[serde(default)]
    pub patch: String,
    #[serde(default)]
    pub champions: BTreeMap<String, R>,
    #[serde(default)]
    pub champion_map: NameDictionary,
    #[serde(default)]
    pub champion_key_map: KeyAliasMap,
}

impl<R: for<'de> Deserialize<'de>> Snapshot<R> {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// A borrowed view of the cache's state, serialized under its read lock
/// without cloning any map.
#[derive(Debug, Serialize)]
pub(crate) struct SnapshotRef<'a, R> {
    pub patch: &'a str,
    pub champions: &'a BTreeMap<String, R>,
    pub champion_map: &'a NameDictionary,
    pub champion_key_map: &'a KeyAliasMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::champion::Champion;

    #[test]
    fn missing_sections_default_to_empty() {
        let snapshot: Snapshot<Champion> =
            Snapshot::from_json(r#"{"patch": "14.1.1"}"#).expect("valid snapshot");
        assert_eq!(snapshot.patch, "14.1.1");
        assert!(snapshot.champions.is_empty());
        assert!(snapshot.champion_map.is_empty());
        assert!(snapshot.champion_key_map.is_empty());
    }

    #[test]
    fn borrowed_view_reads_back_as_owned() {
        let mut champions = BTreeMap::new();
        champions.insert(
            "Ahri".to_string(),
            Champion {
                id: "Ahri".into(),
                name: "Ahri".into(),
                ..Champion::default()
            },
        );
        let names: NameDictionary = [("Ahri".to_string(), "Ahri".to_string())].into();
        let keys: KeyAliasMap = [("103".to_string(), "Ahri".to_string())].into();

        let text = serde_json::to_string(&SnapshotRef {
            patch: "14.1.1",
            champions: &champions,
            champion_map: &names,
            champion_key_map: &keys,
        })
        .expect("serializable");

        let back: Snapshot<Champion> = Snapshot::from_json(&text).expect("round trip");
        assert_eq!(back.patch, "14.1.1");
        assert_eq!(back.champions, champions);
        assert_eq!(back.champion_map, names);
        assert_eq!(back.champion_key_map, keys);
    }

    /// A record type with no `Default` impl.
    #[derive(Debug, PartialEq, Deserialize)]
    struct Note {
        id: String,
    }

    #[test]
    fn records_need_not_implement_default() {
        let snapshot: Snapshot<Note> =
            Snapshot::from_json(r#"{"champions": {"a": {"id": "a"}}}"#).expect("valid snapshot");
        assert_eq!(snapshot.champions["a"], Note { id: "a".into() });
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(Snapshot::<Champion>::from_json("not-json").is_err());
        assert!(Snapshot::<Champion>::from_json(r#"{"patch": 7}"#).is_err());
    }
}
