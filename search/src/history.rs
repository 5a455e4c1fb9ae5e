use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;
use tracing::warn;

pub const HISTORY_CAP: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub query: String,
    pub recorded_at: u64,
    pub results_count: usize,
}

/// Recent accepted queries, most-recent-first, unique by exact query
/// text. Backed by one JSON file rewritten wholesale on every mutation;
/// the in-memory view is the source of truth between writes. Storage
/// trouble is logged and degraded, never surfaced: a reader that cannot
/// parse the slot starts from an empty history.
#[derive(Debug)]
pub struct SearchHistory {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl SearchHistory {
    /// Read the durable slot once at startup. Missing or malformed data
    /// degrades to an empty history.
    pub fn load(path: PathBuf) -> Self {
        let entries = match fs::read(&path) {
            Ok(data) => match serde_json::from_slice(&data) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), %err, "discarding malformed search history");
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read search history");
                Vec::new()
            }
        };
        Self { path, entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Record an accepted query. An existing entry with the same exact
    /// query moves to the front instead of duplicating; the list is
    /// truncated to the most recent [`HISTORY_CAP`].
    pub fn add(&mut self, query: &str, results_count: usize) {
        self.entries.retain(|entry| entry.query != query);
        self.entries.insert(
            0,
            HistoryEntry {
                query: query.to_string(),
                recorded_at: now_secs(),
                results_count,
            },
        );
        self.entries.truncate(HISTORY_CAP);
        self.persist();
    }

    /// Remove the entry with this exact query. Idempotent.
    pub fn remove(&mut self, query: &str) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.query != query);
        if self.entries.len() != before {
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(err) = fs::create_dir_all(parent)
        {
            warn!(path = %self.path.display(), %err, "failed to create history dir");
            return;
        }
        let data = match serde_json::to_vec_pretty(&self.entries) {
            Ok(data) => data,
            Err(err) => {
                warn!(%err, "failed to serialize search history");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, data) {
            warn!(path = %self.path.display(), %err, "failed to write search history");
        }
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
