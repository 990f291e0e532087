//! Upload Store - Keep uploaded files and a record of each upload
//!
//! Files are written flat into the upload directory under their own
//! name. Every upload appends an [`UploadRecord`] to a JSON index that
//! lives outside that directory, so an uploaded file can never
//! overwrite it.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// One stored upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    /// Sequential identifier, starting at 1
    pub id: u64,
    /// Name the file was stored under
    pub filename: String,
    /// Where the file was written
    pub path: String,
    /// RFC 3339 UTC timestamp
    pub uploaded_at: String,
}

/// Upload directory plus its record index
pub struct UploadStore {
    upload_dir: PathBuf,
    index_path: PathBuf,
    records: Vec<UploadRecord>,
}

impl UploadStore {
    /// Open a store, creating the upload directory and loading the index
    pub fn open(upload_dir: impl AsRef<Path>, index_path: impl AsRef<Path>) -> StoreResult<Self> {
        let upload_dir = upload_dir.as_ref().to_path_buf();
        let index_path = index_path.as_ref().to_path_buf();

        fs::create_dir_all(&upload_dir)?;

        let records = if index_path.exists() {
            let content = fs::read_to_string(&index_path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        Ok(Self {
            upload_dir,
            index_path,
            records,
        })
    }

    /// Write `bytes` under `filename` and record the upload.
    ///
    /// A file with the same name is overwritten; both uploads keep
    /// their record.
    pub fn save(&mut self, filename: &str, bytes: &[u8]) -> StoreResult<UploadRecord> {
        let filename = sanitize_filename(filename)?;
        let path = self.upload_dir.join(&filename);
        let existed = path.exists();
        fs::write(&path, bytes)?;

        let record = UploadRecord {
            id: self.next_id(),
            filename,
            path: path.display().to_string(),
            uploaded_at: Utc::now().to_rfc3339(),
        };

        // Only commit the record once the index holds it.
        let mut records = self.records.clone();
        records.push(record.clone());
        if let Err(e) = self.persist(&records) {
            if !existed {
                let _ = fs::remove_file(&path);
            }
            return Err(e);
        }

        self.records = records;
        Ok(record)
    }

    /// All records, oldest first
    pub fn list(&self) -> &[UploadRecord] {
        &self.records
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    fn persist(&self, records: &[UploadRecord]) -> StoreResult<()> {
        if let Some(parent) = self.index_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.index_path, content)?;
        Ok(())
    }
}

/// Reduce a client-supplied name to its last path component.
///
/// Rejects names that reduce to nothing, `.` or `..`.
pub fn sanitize_filename(name: &str) -> StoreResult<String> {
    let base = name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or("")
        .trim();

    if base.is_empty() || base == "." || base == ".." || base.contains('\0') {
        return Err(StoreError::InvalidFilename(name.to_string()));
    }

    Ok(base.to_string())
}
