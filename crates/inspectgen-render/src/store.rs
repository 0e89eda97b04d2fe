//! Where rendered artifacts land.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for artifacts, addressed by paths relative to its root.
///
/// `exists` is the query renderers use to decide whether a hand-customized
/// file is already present. Writes are two-phase: `stage` prepares a file
/// without making it visible, `publish` makes every staged file visible and
/// `discard` drops them. `exists` only sees published files.
pub trait ArtifactStore {
    fn exists(&self, path: &Path) -> bool;

    fn stage(&mut self, path: &Path, contents: &str) -> Result<(), RenderError>;

    fn publish(&mut self) -> Result<(), RenderError>;

    fn discard(&mut self);

    /// Stage and publish a single file.
    fn write(&mut self, path: &Path, contents: &str) -> Result<(), RenderError> {
        self.stage(path, contents)?;
        self.publish()
    }
}

/// Writes below a directory on disk.
///
/// Staging writes each file's full contents to a temporary file next to its
/// target. Publishing only renames those into place, so running out of space
/// or hitting a permission error happens before any target is replaced.
#[derive(Debug)]
pub struct FsStore {
    root: PathBuf,
    staged: Vec<(NamedTempFile, PathBuf)>,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            staged: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactStore for FsStore {
    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).exists()
    }

    fn stage(&mut self, path: &Path, contents: &str) -> Result<(), RenderError> {
        let target = self.root.join(path);
        let dir = target.parent().unwrap_or(&self.root);
        let io_err = |source| RenderError::Io {
            path: target.clone(),
            source,
        };

        fs::create_dir_all(dir).map_err(io_err)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(contents.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        self.staged.push((tmp, target));
        Ok(())
    }

    fn publish(&mut self) -> Result<(), RenderError> {
        // unpublished temp files are removed when dropped
        for (tmp, target) in std::mem::take(&mut self.staged) {
            tmp.persist(&target).map_err(|e| RenderError::Io {
                path: target.clone(),
                source: e.error,
            })?;
        }
        Ok(())
    }

    fn discard(&mut self) {
        self.staged.clear();
    }
}

/// Keeps artifacts in memory. Used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<PathBuf, String>,
    staged: Vec<(PathBuf, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ArtifactStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn stage(&mut self, path: &Path, contents: &str) -> Result<(), RenderError> {
        self.staged.push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }

    fn publish(&mut self) -> Result<(), RenderError> {
        self.files.extend(self.staged.drain(..));
        Ok(())
    }

    fn discard(&mut self) {
        self.staged.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fs_store_creates_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = FsStore::new(dir.path());
        let path = Path::new("a/b/c.kt");

        assert!(!store.exists(path));
        store.write(path, "first").unwrap();
        assert!(store.exists(path));
        store.write(path, "second").unwrap();

        let on_disk = fs::read_to_string(dir.path().join(path)).unwrap();
        assert_eq!(on_disk, "second");
    }

    #[test]
    fn fs_store_staged_files_stay_hidden_until_published() {
        let dir = TempDir::new().unwrap();
        let mut store = FsStore::new(dir.path());
        store.write(Path::new("a.kt"), "old").unwrap();

        store.stage(Path::new("a.kt"), "new").unwrap();
        store.stage(Path::new("pkg/b.kt"), "new").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("a.kt")).unwrap(), "old");
        assert!(!store.exists(Path::new("pkg/b.kt")));

        store.publish().unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("a.kt")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dir.path().join("pkg/b.kt")).unwrap(), "new");
    }

    #[test]
    fn fs_store_discard_leaves_targets_alone() {
        let dir = TempDir::new().unwrap();
        let mut store = FsStore::new(dir.path());
        store.write(Path::new("a.kt"), "old").unwrap();

        store.stage(Path::new("a.kt"), "new").unwrap();
        store.discard();
        store.publish().unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("a.kt")).unwrap(), "old");
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        store.write(Path::new("x/BUILD"), "contents").unwrap();
        assert!(store.exists(Path::new("x/BUILD")));
        assert_eq!(store.get("x/BUILD"), Some("contents"));
        assert_eq!(store.len(), 1);
    }
}
