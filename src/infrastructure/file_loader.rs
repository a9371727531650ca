//! Raw file loading
//!
//! Failures are reported as a bare `FileReadFailure`; the underlying I/O error
//! is only logged.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::infrastructure::config::FileConfig;
use crate::infrastructure::parsing_error::FileReadFailure;

/// Read a whole file with no size cap
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, FileReadFailure> {
    FileLoader::default().read(path)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileLoader {
    max_file_bytes: Option<u64>,
}

impl FileLoader {
    pub const fn new(config: &FileConfig) -> Self {
        Self {
            max_file_bytes: config.max_file_bytes,
        }
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, FileReadFailure> {
        let path = path.as_ref();

        if let Some(max) = self.max_file_bytes {
            let metadata = fs::metadata(path).map_err(|e| {
                debug!("Failed to stat {:?}: {}", path, e);
                FileReadFailure
            })?;
            if metadata.len() > max {
                debug!(
                    "File {:?} is {} bytes, over the {} byte limit",
                    path,
                    metadata.len(),
                    max
                );
                return Err(FileReadFailure);
            }
        }

        fs::read(path).map_err(|e| {
            debug!("Failed to read {:?}: {}", path, e);
            FileReadFailure
        })
    }
}
