// ==============================================================================
// Patch Synchronization
// ==============================================================================
//
// The cache is only valid for the patch it was populated under. On startup
// (and whenever the caller wants to re-check) the loader asks the catalog for
// the latest patch and:
//
//   - patch changed     -> invalidate, record the new patch, install a fresh
//                          dictionary and key aliases, save
//   - same patch, but no dictionary (e.g. cold start)
//                       -> install the dictionary and key aliases, save
//   - otherwise         -> nothing to do
//
// A failed save is logged, not returned: the in-memory cache is already
// correct and the next save will retry.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cache::Cache;
use crate::error::{Error, Result};
use crate::model::catalog::ChampionList;

/// A source of truth for the current patch and its champion list.
pub trait Catalog {
    /// The newest patch the catalog knows about.
    fn latest_patch(&self) -> Result<String>;

    /// The champion list published for `patch`.
    fn champion_list(&self, patch: &str) -> Result<ChampionList>;
}

/// What [`sync`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The patch changed; the cache was invalidated and repopulated.
    Refreshed { from: String, to: String },
    /// The patch was current but the dictionary was empty, so it was filled.
    Filled,
    /// Nothing needed doing.
    UpToDate,
}

/// Bring `cache` in line with the catalog's latest patch.
pub fn sync<R: Serialize>(cache: &Cache<R>, catalog: &impl Catalog) -> Result<SyncOutcome> {
    let latest = catalog.latest_patch()?;
    tracing::info!(patch = %latest, "latest patch");

    let current = cache.patch();
    let outcome = if current != latest {
        tracing::info!(from = %current, to = %latest, "patch changed, invalidating cache");
        // Fetch before touching the cache so a catalog failure leaves it as is.
        let list = catalog.champion_list(&latest)?;
        cache.invalidate();
        cache.set_patch(latest.as_str());
        install(cache, &list);
        SyncOutcome::Refreshed {
            from: current,
            to: latest,
        }
    } else if cache.dictionary().is_empty() {
        tracing::info!("champion map is empty, fetching it");
        let list = catalog.champion_list(&latest)?;
        install(cache, &list);
        SyncOutcome::Filled
    } else {
        tracing::info!("patch is up to date");
        return Ok(SyncOutcome::UpToDate);
    };

    if let Err(e) = cache.save() {
        tracing::error!(error = %e, "could not save cache");
    }
    Ok(outcome)
}

fn install<R>(cache: &Cache<R>, list: &ChampionList) {
    cache.set_dictionary(list.name_dictionary());
    cache.set_key_aliases(list.key_aliases());
}

/// A catalog backed by a champion-list JSON file on disk.
///
/// The file's `version` is the latest (and only) patch it can serve.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
    list: ChampionList,
}

impl FileCatalog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let catalog_error = |message: String| Error::Catalog {
            path: path.to_path_buf(),
            message,
        };
        let text = fs::read_to_string(path).map_err(|e| catalog_error(e.to_string()))?;
        let list = ChampionList::from_json(&text)
            .map_err(|e| catalog_error(format!("invalid champion list: {e}")))?;
        if list.version.is_empty() {
            return Err(catalog_error("champion list has no version".to_string()));
        }
        Ok(FileCatalog {
            path: path.to_path_buf(),
            list,
        })
    }
}

impl Catalog for FileCatalog {
    fn latest_patch(&self) -> Result<String> {
        Ok(self.list.version.clone())
    }

    fn champion_list(&self, patch: &str) -> Result<ChampionList> {
        if patch != self.list.version {
            return Err(Error::Catalog {
                path: self.path.clone(),
                message: format!(
                    "no champion list for patch {patch} (file has {})",
                    self.list.version
                ),
            });
        }
        Ok(self.list.clone())
    }
}
