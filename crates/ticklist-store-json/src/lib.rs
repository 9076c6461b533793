//! JSON-file storage for ticklist.

mod error;

pub use crate::error::StoreError;

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use ticklist_core::TaskList;
use tracing::{debug, warn};

/// Storage backed by a single JSON file holding the whole task list.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Bind a store to `path`. No I/O happens until `load` or `save`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the task file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hydrate the task list from the task file.
    ///
    /// Total by design: a missing file yields an empty list, and an
    /// unreadable or malformed one is logged and treated the same. Callers
    /// never see a load failure.
    #[must_use]
    pub fn load(&self) -> TaskList {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no task file yet, starting empty");
                return TaskList::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "could not read task file, starting empty");
                return TaskList::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "malformed task file, starting empty");
                TaskList::new()
            }
        }
    }

    /// Mirror the whole task list to the task file.
    ///
    /// The payload is written to a temporary file in the target directory
    /// and renamed into place, so readers never observe a partial file.
    /// Parent directories are created on demand.
    pub fn save(&self, tasks: &TaskList) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(tasks)?;
        let dir = self.target_dir();
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        tmp.write_all(payload.as_bytes())
            .map_err(|source| StoreError::Io {
                path: tmp.path().to_path_buf(),
                source,
            })?;
        tmp.persist(&self.path).map_err(|err| StoreError::Persist {
            path: self.path.clone(),
            source: err.error,
        })?;

        debug!(path = %self.path.display(), tasks = tasks.len(), "task file saved");
        Ok(())
    }

    fn target_dir(&self) -> &Path {
        // parent() yields an empty path for bare file names.
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
