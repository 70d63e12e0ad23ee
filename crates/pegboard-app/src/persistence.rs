//! Best-time persistence backed by a JSON file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use pegboard_game::BestTimeStore;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
struct PersistedScores {
    best_time: Option<u32>,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PersistenceError {
    #[display("failed to access {}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("failed to parse {}", path.display())]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A [`BestTimeStore`] that writes through to a JSON file on every update.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    scores: PersistedScores,
}

impl JsonFileStore {
    /// Loads the store from `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();
        let scores = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| PersistenceError::Format {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => PersistedScores::default(),
            Err(source) => return Err(PersistenceError::Io { path, source }),
        };
        log::debug!("loaded best time {:?} from {}", scores.best_time, path.display());
        Ok(Self { path, scores })
    }

    /// Like [`open`](Self::open), but starts empty (and logs) if the file is unreadable.
    ///
    /// The unreadable file is overwritten on the next new best time.
    pub fn open_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::open(&path).unwrap_or_else(|err| {
            log::warn!("{err}: {}; starting without a best time", error_source(&err));
            Self {
                path,
                scores: PersistedScores::default(),
            }
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PersistenceError> {
        let text = serde_json::to_string_pretty(&self.scores).map_err(|source| {
            PersistenceError::Format {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, text).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn error_source(err: &PersistenceError) -> String {
    match err {
        PersistenceError::Io { source, .. } => source.to_string(),
        PersistenceError::Format { source, .. } => source.to_string(),
    }
}

impl BestTimeStore for JsonFileStore {
    fn best_time(&self) -> Option<u32> {
        self.scores.best_time
    }

    fn set_best_time(&mut self, seconds: u32) {
        self.scores.best_time = Some(seconds);
        if let Err(err) = self.save() {
            log::warn!("{err}: {}", error_source(&err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("scores.json")).unwrap();
        assert_eq!(store.best_time(), None);
    }

    #[test]
    fn test_set_best_time_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set_best_time(95);
        assert_eq!(store.best_time(), Some(95));

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.best_time(), Some(95));
        assert_eq!(reopened.path(), path);
    }

    #[test]
    fn test_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{ "best_time": 42 }"#).unwrap();
        assert_eq!(JsonFileStore::open(&path).unwrap().best_time(), Some(42));

        fs::write(&path, r#"{ "best_time": null }"#).unwrap();
        assert_eq!(JsonFileStore::open(&path).unwrap().best_time(), None);
    }

    #[test]
    fn test_corrupt_file_is_reported_and_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path),
            Err(PersistenceError::Format { .. })
        ));

        let mut store = JsonFileStore::open_or_default(&path);
        assert_eq!(store.best_time(), None);
        store.set_best_time(7);
        assert_eq!(JsonFileStore::open(&path).unwrap().best_time(), Some(7));
    }
}
