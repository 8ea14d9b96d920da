// ==============================================================================
// Cache Store: Dictionaries, Detail Records, and Persistence
// ==============================================================================
//
// One `RwLock` guards the whole state. Readers (`dictionary`, `detail`,
// `resolve_name`, `autocomplete`, `save`) share it; writers (`set_*`,
// `put_detail`, `clear_details`, `invalidate`, a successful `load`) take it
// exclusively.
//
// The name dictionary and key aliases are held behind `Arc`s and replaced
// wholesale, never edited in place. A reader clones the `Arc` under the read
// lock and then matches against that immutable view with the lock released,
// so every lookup sees either the old dictionary or the new one, never a mix.
//
// File I/O happens outside the lock: `load` reads and parses before taking
// the write lock, and `save` serializes under the read lock but writes after
// releasing it. Saves may therefore overlap; each writes its own temporary
// file and the last rename wins.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::complete;
use crate::error::{Error, Result};
use crate::model::champion::Champion;
use crate::model::snapshot::{Snapshot, SnapshotRef};
use crate::model::{Detail, KeyAliasMap, NameDictionary};
use crate::resolve;

/// What [`Cache::load`] found on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The snapshot was read and replaced the in-memory state.
    Restored,
    /// No file at the path; in-memory state untouched.
    Missing,
    /// The file could not be read or parsed; in-memory state untouched.
    Unreadable,
}

/// A concurrency-safe champion cache.
///
/// Construct one per process and hand out references (or an `Arc`); there is
/// no global instance.
pub struct Cache<R = Champion> {
    path: PathBuf,
    threshold: usize,
    state: RwLock<State<R>>,
}

struct State<R> {
    patch: String,
    names: Arc<NameDictionary>,
    keys: Arc<KeyAliasMap>,
    details: BTreeMap<String, R>,
}

impl<R> State<R> {
    fn empty() -> Self {
        State {
            patch: String::new(),
            names: Arc::default(),
            keys: Arc::default(),
            details: BTreeMap::new(),
        }
    }
}

impl<R> std::fmt::Debug for Cache<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Cache")
            .field("path", &self.path)
            .field("threshold", &self.threshold)
            .field("patch", &state.patch)
            .field("names", &state.names.len())
            .field("keys", &state.keys.len())
            .field("details", &state.details.len())
            .finish()
    }
}

impl<R> Cache<R> {
    /// Create an empty cache that persists to `path` and admits matches whose
    /// weighted distance is at most `threshold`.
    pub fn new(path: impl Into<PathBuf>, threshold: usize) -> Self {
        Cache {
            path: path.into(),
            threshold,
            state: RwLock::new(State::empty()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The patch the current contents were populated under; empty when the
    /// cache has never been populated.
    pub fn patch(&self) -> String {
        self.state.read().patch.clone()
    }

    pub fn set_patch(&self, patch: impl Into<String>) {
        self.state.write().patch = patch.into();
    }

    // --------------------------------------------------------------------------
    // Dictionaries
    // --------------------------------------------------------------------------

    /// Atomically replace the name dictionary.
    pub fn set_dictionary(&self, names: NameDictionary) {
        let len = names.len();
        self.state.write().names = Arc::new(names);
        tracing::debug!(entries = len, "replaced name dictionary");
    }

    /// An immutable view of the current name dictionary. Later
    /// [`set_dictionary`](Self::set_dictionary) calls do not affect it.
    pub fn dictionary(&self) -> Arc<NameDictionary> {
        Arc::clone(&self.state.read().names)
    }

    /// Atomically replace the numeric-key aliases.
    pub fn set_key_aliases(&self, keys: KeyAliasMap) {
        self.state.write().keys = Arc::new(keys);
    }

    pub fn key_aliases(&self) -> Arc<KeyAliasMap> {
        Arc::clone(&self.state.read().keys)
    }

    /// Look up the identifier for a numeric key such as `"103"`.
    pub fn resolve_key(&self, key: &str) -> Option<String> {
        self.state.read().keys.get(key).cloned()
    }

    // --------------------------------------------------------------------------
    // Matching
    // --------------------------------------------------------------------------

    /// Resolve free-text input to the identifier of the best-matching name.
    pub fn resolve_name(&self, input: &str) -> Result<String> {
        let names = self.dictionary();
        resolve::resolve(input, &names, self.threshold)
            .map(str::to_owned)
            .ok_or_else(|| Error::NotFound {
                input: input.to_owned(),
            })
    }

    /// Resolve `input`, or fall back to treating the trimmed input itself as
    /// an identifier when nothing matches.
    pub fn resolve_or_literal(&self, input: &str) -> String {
        self.resolve_name(input).unwrap_or_else(|_| {
            tracing::debug!(input, "no fuzzy match, using input as identifier");
            input.trim().to_owned()
        })
    }

    /// Suggest up to `limit` display names for partial input (`0` means no
    /// limit).
    pub fn autocomplete(&self, input: &str, limit: usize) -> Vec<String> {
        let names = self.dictionary();
        complete::suggest(input, &names, limit, self.threshold)
    }

    // --------------------------------------------------------------------------
    // Detail records
    // --------------------------------------------------------------------------

    pub fn detail_count(&self) -> usize {
        self.state.read().details.len()
    }

    /// Drop every detail record, keeping the dictionaries and patch.
    pub fn clear_details(&self) {
        self.state.write().details.clear();
    }

    /// Empty the name dictionary and the detail records.
    ///
    /// Key aliases and the patch tag are left alone; callers that know the
    /// new patch set it with [`set_patch`](Self::set_patch).
    pub fn invalidate(&self) {
        let mut state = self.state.write();
        state.names = Arc::default();
        state.details.clear();
    }

    /// `true` when neither names nor detail records are cached.
    pub fn is_empty(&self) -> bool {
        let state = self.state.read();
        state.names.is_empty() && state.details.is_empty()
    }
}

impl<R: Clone> Cache<R> {
    /// A copy of the record cached under `id`, if any.
    pub fn detail(&self, id: &str) -> Option<R> {
        self.state.read().details.get(id).cloned()
    }
}

impl<R: Detail> Cache<R> {
    /// Insert or overwrite a record under its own identifier.
    pub fn put_detail(&self, record: R) {
        let id = record.id().to_owned();
        self.state.write().details.insert(id, record);
    }
}

// ------------------------------------------------------------------------------
// Persistence
// ------------------------------------------------------------------------------

impl<R: DeserializeOwned> Cache<R> {
    /// [`load_from`](Self::load_from) the configured path.
    pub fn load(&self) -> LoadOutcome {
        self.load_from(&self.path)
    }

    /// Replace the in-memory state with the snapshot stored at `path`.
    ///
    /// A missing, unreadable, or malformed file is not an error: the cache is
    /// a pure optimization, so it is logged and the current state is kept.
    pub fn load_from(&self, path: &Path) -> LoadOutcome {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no cache file, starting cold");
                return LoadOutcome::Missing;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable cache file");
                return LoadOutcome::Unreadable;
            }
        };

        let snapshot: Snapshot<R> = match Snapshot::from_json(&text) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed cache file");
                return LoadOutcome::Unreadable;
            }
        };

        let mut state = self.state.write();
        state.patch = snapshot.patch;
        state.names = Arc::new(snapshot.champion_map);
        state.keys = Arc::new(snapshot.champion_key_map);
        state.details = snapshot.champions;
        tracing::debug!(
            path = %path.display(),
            patch = %state.patch,
            names = state.names.len(),
            details = state.details.len(),
            "restored cache"
        );
        LoadOutcome::Restored
    }
}

impl<R: Serialize> Cache<R> {
    /// [`save_to`](Self::save_to) the configured path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.path)
    }

    /// Write the current state to `path`.
    ///
    /// The snapshot goes to a uniquely named temporary file in the same
    /// directory and is renamed into place, so a failed write never leaves a
    /// truncated cache behind and concurrent saves never share a temporary.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let bytes = {
            let state = self.state.read();
            serde_json::to_vec_pretty(&SnapshotRef {
                patch: &state.patch,
                champions: &state.details,
                champion_map: &state.names,
                champion_key_map: &state.keys,
            })
            .map_err(|source| Error::Encode { source })?
        };

        let unavailable = |source: io::Error| Error::PersistenceUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(unavailable)?;
        tmp.write_all(&bytes).map_err(unavailable)?;
        if let Err(e) = tmp.persist(path) {
            if let Err(cleanup) = e.file.close() {
                tracing::debug!(error = %cleanup, "could not remove temporary cache file");
            }
            return Err(unavailable(e.error));
        }

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved cache");
        Ok(())
    }
}
