//! Filesystem photo blob store
//!
//! Stores photo bytes under a flat uploads directory and hands back
//! `/uploads/{filename}` references. References are resolved back to plain
//! file names only; anything with a path component is ignored so a stored
//! reference can never escape the uploads directory.

use std::path::PathBuf;

use uuid::Uuid;

use crate::error::{ServerResult, StorageError};
use crate::traits::PhotoStore;

const REFERENCE_PREFIX: &str = "/uploads/";

pub struct FsPhotoStore {
    dir: PathBuf,
}

impl FsPhotoStore {
    /// Create the store, ensuring the uploads directory exists
    pub fn new(dir: impl Into<PathBuf>) -> ServerResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(StorageError::Io)?;
        Ok(Self { dir })
    }
}

impl PhotoStore for FsPhotoStore {
    fn store(&self, member_id: i64, ext: &str, bytes: &[u8]) -> ServerResult<String> {
        let nonce = Uuid::new_v4().simple().to_string();
        let filename = format!("{member_id}_{}{ext}", &nonce[..8]);
        std::fs::write(self.dir.join(&filename), bytes).map_err(StorageError::Io)?;
        Ok(format!("{REFERENCE_PREFIX}{filename}"))
    }

    fn remove(&self, reference: &str) -> ServerResult<()> {
        let Some(name) = reference.strip_prefix(REFERENCE_PREFIX) else {
            return Ok(());
        };
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Ok(());
        }
        match std::fs::remove_file(self.dir.join(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e).into()),
        }
    }
}
