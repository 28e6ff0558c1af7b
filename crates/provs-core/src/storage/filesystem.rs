//! Filesystem storage backend.
//!
//! Records live at `<base>/<resource_type>/<id>`, one JSON document per file
//! with no envelope. Resource type directories are created lazily on first
//! write.
//!
//! There is no locking. Concurrent writers to the same record race and the
//! last rename or truncate wins.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::fs::{ensure_dir, rename_with_fallback, write_chunked};
use crate::storage::check_segment;
use crate::storage::traits::{BackendClient, Blob};

/// How `update` replaces an existing record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// Stage the new content next to the record and rename it into place.
    ///
    /// Readers observe either the old or the new content, never a missing
    /// record. A failed write or rename leaves the old content untouched.
    #[default]
    AtomicReplace,

    /// Remove the record, then write it again.
    ///
    /// Not atomic: a reader between the two steps gets `NotFound`, and a
    /// failure while writing leaves the record deleted. Kept for
    /// compatibility with stores that relied on this behaviour.
    DeleteThenCreate,
}

/// Filesystem implementation of `BackendClient`.
#[derive(Debug, Clone)]
pub struct FsBackend {
    base_path: PathBuf,
    update_strategy: UpdateStrategy,
}

impl FsBackend {
    /// Open (and create if needed) a store rooted at `base_path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidConfiguration` if `base_path` is relative;
    /// nothing is created on disk in that case. Returns `StoreError::Io` if
    /// the directory cannot be created.
    pub fn new(base_path: impl AsRef<Path>) -> Result<Self> {
        let base_path = base_path.as_ref();
        if !base_path.is_absolute() {
            return Err(StoreError::InvalidConfiguration(format!(
                "only absolute paths allowed, got '{}'",
                base_path.display()
            )));
        }
        fs::create_dir_all(base_path)
            .map_err(|e| StoreError::io(format!("create {}", base_path.display()), e))?;
        debug!(base_path = %base_path.display(), "Opened filesystem store");
        Ok(Self {
            base_path: base_path.to_path_buf(),
            update_strategy: UpdateStrategy::default(),
        })
    }

    pub fn with_update_strategy(mut self, update_strategy: UpdateStrategy) -> Self {
        self.update_strategy = update_strategy;
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn update_strategy(&self) -> UpdateStrategy {
        self.update_strategy
    }

    fn namespace_dir(&self, resource_type: &str) -> Result<PathBuf> {
        check_segment("resource type", resource_type)?;
        Ok(self.base_path.join(resource_type))
    }

    fn record_path(&self, resource_type: &str, id: &str) -> Result<PathBuf> {
        let dir = self.namespace_dir(resource_type)?;
        check_segment("resource id", id)?;
        Ok(dir.join(id))
    }

    /// Map an I/O failure on a single record, keeping "does not exist"
    /// distinguishable from everything else.
    fn record_error(action: &str, resource_type: &str, id: &str, err: io::Error) -> StoreError {
        if err.kind() == io::ErrorKind::NotFound {
            StoreError::not_found(resource_type, id)
        } else {
            StoreError::io(format!("{} {}/{}", action, resource_type, id), err)
        }
    }

    /// Create-or-truncate `path` and stream `body` into it.
    fn write_file(path: &Path, body: &mut dyn Read) -> io::Result<u64> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        write_chunked(body, &mut file)
    }

    fn replace_atomically(&self, resource_type: &str, id: &str, body: &mut dyn Read) -> Result<()> {
        let target = self.record_path(resource_type, id)?;
        match fs::metadata(&target) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(StoreError::not_found(resource_type, id)),
            Err(err) => return Err(Self::record_error("update", resource_type, id, err)),
        }

        let staged = target.with_file_name(format!(".{}.tmp", Uuid::new_v4()));
        let written = match Self::write_file(&staged, body) {
            Ok(n) => n,
            Err(err) => {
                if let Err(cleanup) = fs::remove_file(&staged) {
                    if cleanup.kind() != io::ErrorKind::NotFound {
                        warn!(
                            path = %staged.display(),
                            error = %cleanup,
                            "Failed to remove staging file"
                        );
                    }
                }
                return Err(StoreError::io(
                    format!("stage {}/{}", resource_type, id),
                    err,
                ));
            }
        };

        rename_with_fallback(&staged, &target)
            .map_err(|e| StoreError::io(format!("replace {}/{}", resource_type, id), e))?;
        debug!(resource_type, id, bytes = written, "Replaced record");
        Ok(())
    }
}

impl BackendClient for FsBackend {
    fn create_with_id(
        &self,
        resource_type: &str,
        id: &str,
        body: &mut dyn Read,
    ) -> Result<String> {
        let dir = self.namespace_dir(resource_type)?;
        let path = self.record_path(resource_type, id)?;

        ensure_dir(&dir).map_err(|e| StoreError::io(format!("create {}", dir.display()), e))?;
        let written = Self::write_file(&path, body)
            .map_err(|e| StoreError::io(format!("write {}/{}", resource_type, id), e))?;

        debug!(resource_type, id, bytes = written, "Wrote record");
        Ok(id.to_string())
    }

    fn read(&self, resource_type: &str, id: &str) -> Result<Blob> {
        let path = self.record_path(resource_type, id)?;
        let mut file =
            File::open(&path).map_err(|e| Self::record_error("open", resource_type, id, e))?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| Self::record_error("read", resource_type, id, e))?;

        debug!(resource_type, id, bytes = content.len(), "Read record");
        Ok(Cursor::new(content))
    }

    fn read_all(&self, resource_type: &str) -> Result<Vec<Blob>> {
        let dir = self.namespace_dir(resource_type)?;
        let entries = fs::read_dir(&dir).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NamespaceNotFound {
                    resource_type: resource_type.to_string(),
                }
            } else {
                StoreError::io(format!("list {}", resource_type), e)
            }
        })?;

        let mut blobs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(format!("list {}", resource_type), e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| StoreError::io(format!("list {}", resource_type), e))?;
            if !file_type.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(id) = name.to_str() else {
                warn!(resource_type, name = ?name, "Skipping non UTF-8 record name");
                continue;
            };
            if id.starts_with('.') {
                continue;
            }
            blobs.push(self.read(resource_type, id)?);
        }

        debug!(resource_type, count = blobs.len(), "Listed records");
        Ok(blobs)
    }

    fn update(&self, resource_type: &str, id: &str, body: &mut dyn Read) -> Result<()> {
        match self.update_strategy {
            UpdateStrategy::AtomicReplace => self.replace_atomically(resource_type, id, body),
            UpdateStrategy::DeleteThenCreate => {
                self.destroy(resource_type, id)?;
                self.create_with_id(resource_type, id, body)?;
                Ok(())
            }
        }
    }

    fn destroy(&self, resource_type: &str, id: &str) -> Result<()> {
        let path = self.record_path(resource_type, id)?;
        fs::remove_file(&path).map_err(|e| Self::record_error("remove", resource_type, id, e))?;
        debug!(resource_type, id, "Removed record");
        Ok(())
    }
}
