// ==============================================================================
// Shared Test Helpers
// ==============================================================================
//
// Common fixtures used across the integration test files.
//
// Each test file that imports this module compiles its own copy, so not every
// function is used in every binary. Suppress the resulting dead_code warnings.
#![allow(dead_code)]
// Import this module in each test file with:
//
//     mod common;
//     use common::{champion, dictionary, sample_dictionary};

use std::fs;
use std::path::{Path, PathBuf};

use champcache::NameDictionary;
use champcache::model::champion::Champion;

/// The five-champion dictionary used throughout the autocomplete examples.
pub fn sample_dictionary() -> NameDictionary {
    dictionary(&[
        ("Ashe", "Ashe"),
        ("Azir", "Azir"),
        ("Anivia", "Anivia"),
        ("Ahri", "Ahri"),
        ("Braum", "Braum"),
    ])
}

pub fn dictionary(entries: &[(&str, &str)]) -> NameDictionary {
    entries
        .iter()
        .map(|(name, id)| (name.to_string(), id.to_string()))
        .collect()
}

/// A detail record with just enough fields set to tell records apart.
pub fn champion(id: &str, key: &str, name: &str, title: &str) -> Champion {
    Champion {
        id: id.to_string(),
        key: key.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        ..Champion::default()
    }
}

/// A champion-list document for `FileCatalog`, as served for `version`.
pub fn champion_list_json(version: &str) -> String {
    serde_json::json!({
        "type": "champion",
        "format": "standAloneComplex",
        "version": version,
        "data": {
            "Ahri": {"id": "Ahri", "key": "103", "name": "Ahri"},
            "Ashe": {"id": "Ashe", "key": "22", "name": "Ashe"},
            "Braum": {"id": "Braum", "key": "201", "name": "Braum"},
            "MonkeyKing": {"id": "MonkeyKing", "key": "62", "name": "Wukong"}
        }
    })
    .to_string()
}

/// A detail document holding a single fully-populated champion.
pub fn ahri_document_json() -> String {
    serde_json::json!({
        "type": "champion",
        "version": "14.2.1",
        "data": {
            "Ahri": {
                "id": "Ahri",
                "key": "103",
                "name": "Ahri",
                "title": "the Nine-Tailed Fox",
                "partype": "Mana",
                "stats": {"hp": 590, "movespeed": 330, "attackrange": 550},
                "passive": {"name": "Essence Theft", "description": "..."},
                "spells": [{"id": "AhriQ", "name": "Orb of Deception", "cooldown": [7, 7, 7, 7, 7]}]
            }
        }
    })
    .to_string()
}

/// Write `contents` to `name` inside `dir`, returning the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
    path
}
