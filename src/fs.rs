//! File system access for rule files.
//!
//! Only one fact is read per rule file: when it was last modified. A file
//! that does not exist is an ordinary answer (`None`), any other failure
//! to read its metadata is an error.

use crate::error::{GateError, Result};
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Abstraction over rule-file metadata lookups.
pub trait RuleFileSystem {
    /// Last modification time of `path`, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata exists but cannot be read
    /// (permission denied, broken mount, ...).
    fn modified(&self, path: &Path) -> Result<Option<DateTime<Utc>>>;
}

/// [`RuleFileSystem`] over the local disk, resolving paths against a root.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    /// Create a file system rooted at `root`; relative paths resolve there.
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl RuleFileSystem for LocalFileSystem {
    fn modified(&self, path: &Path) -> Result<Option<DateTime<Utc>>> {
        let full_path = self.root.join(path);
        let metadata = match std::fs::metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(GateError::Metadata {
                    path: full_path,
                    source,
                })
            }
        };

        let modified = metadata.modified().map_err(|source| GateError::Metadata {
            path: full_path.clone(),
            source,
        })?;
        Ok(Some(DateTime::<Utc>::from(modified)))
    }
}
