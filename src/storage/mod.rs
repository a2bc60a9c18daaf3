//! Durable key/value storage and filter persistence.
//!
//! Persistence is best-effort. Writes report failures to the caller, which
//! logs them; reads never fail outward and fall back to "nothing saved".

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use directories::ProjectDirs;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ExplorerError, Result};
use crate::filter::FilterState;
use crate::types::{ContentAreaMode, FILTER_STORAGE_KEY, Facet, RangeBound, RangeField};

/// String-keyed durable storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory for the application, e.g.
    /// `~/.local/share/itembank` on Linux.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "itembank").map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ExplorerError::storage(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| ExplorerError::storage(key, e))?;

        // Readers never observe a partially written file.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| ExplorerError::storage(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| ExplorerError::storage(key, e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ExplorerError::storage(key, e)),
        }
    }
}

/// Process-local storage, used when persistence is disabled and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Stored layout under [`FILTER_STORAGE_KEY`].
#[derive(Serialize)]
struct StoredFilters<'a> {
    item_type: &'a [String],
    level: &'a [String],
    content_area: &'a [String],
    target_area: &'a [String],
    nuta_skill_level: &'a [String],
    source: &'a [String],
    meanp_min: &'a str,
    meanp_max: &'a str,
    metric_min: &'a str,
    metric_max: &'a str,
}

const RANGE_FIELDS: [(&str, RangeField, RangeBound); 4] = [
    ("meanp_min", RangeField::Meanp, RangeBound::Min),
    ("meanp_max", RangeField::Meanp, RangeBound::Max),
    ("metric_min", RangeField::Metric, RangeBound::Min),
    ("metric_max", RangeField::Metric, RangeBound::Max),
];

/// Saves and restores [`FilterState`] under a versioned key.
#[derive(Clone)]
pub struct FilterStore {
    backend: Arc<dyn KeyValueStore>,
    key: &'static str,
}

impl FilterStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            key: FILTER_STORAGE_KEY,
        }
    }

    /// A store that forgets everything when the process exits.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn save(&self, filters: &FilterState) -> Result<()> {
        let stored = StoredFilters {
            item_type: filters.selected(Facet::ItemType).as_slice(),
            level: filters.selected(Facet::Level).as_slice(),
            content_area: filters.selected(Facet::ContentArea).as_slice(),
            target_area: filters.selected(Facet::TargetArea).as_slice(),
            nuta_skill_level: filters.selected(Facet::NutaSkillLevel).as_slice(),
            source: filters.selected(Facet::Source).as_slice(),
            meanp_min: filters.range(RangeField::Meanp, RangeBound::Min),
            meanp_max: filters.range(RangeField::Meanp, RangeBound::Max),
            metric_min: filters.range(RangeField::Metric, RangeBound::Min),
            metric_max: filters.range(RangeField::Metric, RangeBound::Max),
        };
        let json = serde_json::to_string(&stored).map_err(|e| ExplorerError::storage(self.key, e))?;
        self.backend.set(self.key, &json)?;
        debug!(key = self.key, "saved filters");
        Ok(())
    }

    /// Load previously saved filters.
    ///
    /// Missing or malformed fields fall back to empty. Returns `None` when
    /// nothing is stored or the stored value cannot be read at all.
    pub fn restore(&self, mode: ContentAreaMode) -> Option<FilterState> {
        let raw = match self.backend.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("could not read saved filters: {e}");
                return None;
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = self.key, "ignoring unreadable saved filters: {e}");
                return None;
            }
        };

        let Some(object) = value.as_object() else {
            warn!(key = self.key, "ignoring saved filters: not a JSON object");
            return None;
        };

        let mut filters = FilterState::new(mode);
        for facet in Facet::ALL {
            let keys: Vec<String> = object
                .get(facet.param())
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();
            filters.replace(facet, &keys);
        }

        for (name, field, bound) in RANGE_FIELDS {
            let text = match object.get(name) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            };
            filters.set_range(field, bound, &text);
        }

        Some(filters)
    }

    pub fn clear(&self) -> Result<()> {
        self.backend.remove(self.key)
    }
}

impl std::fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStore").field("key", &self.key).finish()
    }
}
