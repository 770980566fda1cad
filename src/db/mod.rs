use std::path::{Path, PathBuf};

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read player data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("player data in {path} is not a JSON array: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only collection of player-season rows, loaded once at startup.
///
/// Rows are kept exactly as they appear in the file and are not checked
/// against `PlayerSeasonRecord`.
#[derive(Debug, Default)]
pub struct PlayerStore {
    rows: Vec<Value>,
    degraded: bool,
}

impl PlayerStore {
    pub fn from_rows(rows: Vec<Value>) -> Self {
        Self {
            rows,
            degraded: false,
        }
    }

    /// Load the data file. A file that is unreadable or not a JSON array is
    /// an error; the rows themselves are taken as-is.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let rows: Vec<Value> = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_rows(rows))
    }

    /// Startup policy: keep serving with an empty, degraded store when the
    /// file cannot be loaded. `/health` reports the degraded state.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => {
                tracing::info!(
                    records = store.len(),
                    path = %path.display(),
                    "Successfully loaded player information."
                );
                store
            }
            Err(err) => {
                tracing::error!(error = %err, "Player data unavailable, serving an empty store");
                Self {
                    rows: Vec::new(),
                    degraded: true,
                }
            }
        }
    }

    /// All rows whose numeric `player_id` equals `player_id`, in file order.
    /// Rows without a numeric `player_id` never match.
    pub fn players_by_id(&self, player_id: f64) -> Vec<&Value> {
        self.rows
            .iter()
            .filter(|row| row.get("player_id").and_then(Value::as_f64) == Some(player_id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}
