//! Filesystem-backed report store.
//!
//! One pretty-printed JSON file per report under the configured directory,
//! keyed by a random alphanumeric ID. Reports are immutable once written;
//! there is no deletion path and no index beyond the filename.

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::report::models::StoredReport;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle on the reports directory. Cheap to clone. Writes are unsynchronized;
/// two requests only collide when they draw the same random ID, which is not
/// handled.
#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the reports directory if missing. Called once at startup;
    /// `save` repeats it so a directory removed at runtime does not break
    /// writes.
    pub async fn ensure_dir(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Fresh random alphanumeric report ID. Collisions are not checked.
    pub fn generate_report_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Persists a report as `<dir>/<report_id>.json`.
    pub async fn save(&self, report_id: &str, report: &StoredReport) -> Result<(), StoreError> {
        self.ensure_dir().await?;
        let path = self.path_for(report_id);
        let json = serde_json::to_vec_pretty(report)?;
        tokio::fs::write(&path, json).await?;
        info!("Report {report_id} written to {}", path.display());
        Ok(())
    }

    /// Looks a report up by ID. `Ok(None)` when no file exists.
    pub async fn load(&self, report_id: &str) -> Result<Option<StoredReport>, StoreError> {
        let path = self.path_for(report_id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Whether a report file exists for the ID.
    pub async fn exists(&self, report_id: &str) -> bool {
        tokio::fs::try_exists(self.path_for(report_id))
            .await
            .unwrap_or(false)
    }

    fn path_for(&self, report_id: &str) -> PathBuf {
        self.dir.join(format!("{report_id}.json"))
    }
}

/// Report IDs arrive in URLs; only plain alphanumeric IDs may reach the
/// filesystem.
pub fn is_valid_report_id(report_id: &str) -> bool {
    !report_id.is_empty() && report_id.chars().all(|c| c.is_ascii_alphanumeric())
}
