//! The remote champion list: one summary per champion, enough to build the
//! name dictionary and the numeric-key aliases.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{KeyAliasMap, NameDictionary};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionList {
    #[serde(rename = "type")]
    pub kind: String,
    pub format: String,
    /// Patch the list was published for.
    pub version: String,
    pub data: BTreeMap<String, ChampionSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionSummary {
    pub id: String,
    pub key: String,
    pub name: String,
}

impl ChampionList {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Display name → identifier for every listed champion.
    pub fn name_dictionary(&self) -> NameDictionary {
        self.data
            .values()
            .map(|c| (c.name.clone(), c.id.clone()))
            .collect()
    }

    /// Numeric key → identifier, skipping champions without a key.
    pub fn key_aliases(&self) -> KeyAliasMap {
        self.data
            .values()
            .filter(|c| !c.key.is_empty())
            .map(|c| (c.key.clone(), c.id.clone()))
            .collect()
    }
}
