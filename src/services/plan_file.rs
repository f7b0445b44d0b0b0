//! Reading and writing plan files on disk.
//!
//! Files use the saved-plan JSON format from `planner::persist`. Reads go
//! through tokio's filesystem API so the CLI never blocks the runtime.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use planner::doc::Document;
use planner::geometry::CanvasExtent;
use planner::persist::{self, PersistError};
use tracing::info;

use crate::error::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum PlanFileError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl ErrorCode for PlanFileError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E_PLAN_FILE_IO",
            Self::Persist(e) => e.error_code(),
        }
    }
}

/// Current time as milliseconds since Unix epoch.
#[must_use]
pub fn now_ms() -> u64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    u64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Load `path` on top of `current` using partial-import rules.
///
/// # Errors
///
/// Returns [`PlanFileError::Io`] if the file cannot be read and
/// [`PlanFileError::Persist`] if its content is rejected.
pub async fn read_plan(path: &Path, current: &Document, extent: &CanvasExtent) -> Result<Document, PlanFileError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PlanFileError::Io { path: path.to_path_buf(), source })?;
    let doc = persist::import_json(current, &text, extent)?;
    info!(path = %path.display(), entities = doc.len(), "plan file: loaded");
    Ok(doc)
}

/// Export `doc` to `path`, stamped with the current time.
///
/// # Errors
///
/// Returns [`PlanFileError`] if serialization or the write fails.
pub async fn write_plan(path: &Path, doc: &Document) -> Result<(), PlanFileError> {
    let text = persist::export_json(doc, now_ms())?;
    tokio::fs::write(path, text)
        .await
        .map_err(|source| PlanFileError::Io { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), entities = doc.len(), "plan file: written");
    Ok(())
}

#[cfg(test)]
#[path = "plan_file_test.rs"]
mod tests;
