//! Reading entries out of IDE distribution jars.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Upper bound on the buffer reserved from an entry's declared size.
const MAX_PREALLOC: u64 = 1 << 24;

/// One file inside one archive, e.g.
/// `plugins/java/lib/java-impl.jar!META-INF/InspectionGadgets.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Archive path relative to the IDE home.
    pub archive: PathBuf,
    /// Entry name inside the archive.
    pub entry: String,
}

impl SourceEntry {
    pub fn new(archive: impl Into<PathBuf>, entry: impl Into<String>) -> Self {
        Self {
            archive: archive.into(),
            entry: entry.into(),
        }
    }
}

impl fmt::Display for SourceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}", self.archive.display(), self.entry)
    }
}

/// Extracts single entries from archives.
pub trait ArchiveReader {
    fn read_entry(&self, source: &SourceEntry) -> Result<Vec<u8>, InputError>;
}

/// Reads zip-format jars below an IDE installation directory.
#[derive(Debug, Clone)]
pub struct ZipArchiveReader {
    home: PathBuf,
}

impl ZipArchiveReader {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }
}

impl ArchiveReader for ZipArchiveReader {
    fn read_entry(&self, source: &SourceEntry) -> Result<Vec<u8>, InputError> {
        let path = self.home.join(&source.archive);
        let file = File::open(&path).map_err(|e| InputError::OpenArchive {
            path: path.clone(),
            source: e,
        })?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| InputError::Archive {
            path: path.clone(),
            source: e,
        })?;

        let mut entry = match archive.by_name(&source.entry) {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(InputError::MissingEntry {
                    archive: path,
                    entry: source.entry.clone(),
                });
            }
            Err(e) => return Err(InputError::Archive { path, source: e }),
        };

        let mut bytes = Vec::with_capacity(capacity_hint(entry.size()));
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| InputError::ReadEntry {
                archive: path.clone(),
                entry: source.entry.clone(),
                source: e,
            })?;

        tracing::debug!(source = %source, bytes = bytes.len(), "read archive entry");
        Ok(bytes)
    }
}

/// The declared size comes from the archive header and is not trusted.
fn capacity_hint(declared: u64) -> usize {
    usize::try_from(declared.min(MAX_PREALLOC)).unwrap_or(0)
}
