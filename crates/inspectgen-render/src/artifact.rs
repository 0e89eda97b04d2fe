//! Rendered files and committing them to a store.

use crate::store::{ArtifactStore, RenderError};
use serde::Serialize;
use std::path::PathBuf;

/// What to do when the target already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Always regenerate.
    Overwrite,
    /// Leave an existing (possibly hand-edited) file alone.
    PreserveExisting,
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Path relative to the output root.
    pub path: PathBuf,
    pub contents: String,
    pub policy: WritePolicy,
}

impl Artifact {
    pub fn overwrite(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
            policy: WritePolicy::Overwrite,
        }
    }

    pub fn preserve_existing(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
            policy: WritePolicy::PreserveExisting,
        }
    }
}

/// Which artifacts were (or would be) written and which were left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitReport {
    pub written: Vec<PathBuf>,
    pub preserved: Vec<PathBuf>,
}

fn keeps_existing(artifact: &Artifact, store: &dyn ArtifactStore) -> bool {
    artifact.policy == WritePolicy::PreserveExisting && store.exists(&artifact.path)
}

/// Report what [`commit`] would do without touching the store.
pub fn preview(artifacts: &[Artifact], store: &dyn ArtifactStore) -> CommitReport {
    let mut report = CommitReport::default();
    for artifact in artifacts {
        if keeps_existing(artifact, store) {
            report.preserved.push(artifact.path.clone());
        } else {
            report.written.push(artifact.path.clone());
        }
    }
    report
}

/// Write every artifact, honoring each one's [`WritePolicy`].
///
/// Every artifact is staged before any is published. If staging fails, the
/// staged artifacts are discarded and the store is left as it was.
pub fn commit(
    artifacts: &[Artifact],
    store: &mut dyn ArtifactStore,
) -> Result<CommitReport, RenderError> {
    let mut report = CommitReport::default();
    for artifact in artifacts {
        if keeps_existing(artifact, store) {
            tracing::debug!(path = %artifact.path.display(), "preserving existing artifact");
            report.preserved.push(artifact.path.clone());
            continue;
        }
        if let Err(e) = store.stage(&artifact.path, &artifact.contents) {
            store.discard();
            return Err(e);
        }
        report.written.push(artifact.path.clone());
    }

    store.publish()?;
    for path in &report.written {
        tracing::debug!(path = %path.display(), "wrote artifact");
    }
    tracing::info!(
        written = report.written.len(),
        preserved = report.preserved.len(),
        "committed artifacts"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FsStore, MemoryStore};
    use std::path::Path;

    #[test]
    fn existing_preserved_artifacts_are_untouched() {
        let mut store = MemoryStore::new();
        store
            .write(Path::new("custom.kt"), "hand edited")
            .unwrap();

        let artifacts = vec![
            Artifact::preserve_existing("custom.kt", "generated".into()),
            Artifact::preserve_existing("fresh.kt", "generated".into()),
            Artifact::overwrite("aggregate.kt", "generated".into()),
        ];

        let expected = CommitReport {
            written: vec!["fresh.kt".into(), "aggregate.kt".into()],
            preserved: vec!["custom.kt".into()],
        };
        assert_eq!(preview(&artifacts, &store), expected);
        assert_eq!(store.len(), 1);

        let report = commit(&artifacts, &mut store).unwrap();
        assert_eq!(report, expected);
        assert_eq!(store.get("custom.kt"), Some("hand edited"));
        assert_eq!(store.get("fresh.kt"), Some("generated"));

        // second run preserves what the first one created
        let again = commit(&artifacts, &mut store).unwrap();
        assert_eq!(again.preserved.len(), 2);
    }

    /// Fails to stage one path; everything else goes to the inner store.
    struct FailingStore {
        inner: MemoryStore,
        fail_on: &'static str,
    }

    impl ArtifactStore for FailingStore {
        fn exists(&self, path: &Path) -> bool {
            self.inner.exists(path)
        }

        fn stage(&mut self, path: &Path, contents: &str) -> Result<(), RenderError> {
            if path == Path::new(self.fail_on) {
                return Err(RenderError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.inner.stage(path, contents)
        }

        fn publish(&mut self) -> Result<(), RenderError> {
            self.inner.publish()
        }

        fn discard(&mut self) {
            self.inner.discard()
        }
    }

    #[test]
    fn failed_commit_leaves_every_artifact_stale() {
        let mut inner = MemoryStore::new();
        inner.write(Path::new("a.kt"), "stale a").unwrap();
        inner.write(Path::new("c.kt"), "stale c").unwrap();
        let mut store = FailingStore {
            inner,
            fail_on: "b.kt",
        };

        let artifacts = vec![
            Artifact::overwrite("a.kt", "fresh a".into()),
            Artifact::overwrite("b.kt", "fresh b".into()),
            Artifact::overwrite("c.kt", "fresh c".into()),
        ];
        assert!(commit(&artifacts, &mut store).is_err());

        assert_eq!(store.inner.get("a.kt"), Some("stale a"));
        assert_eq!(store.inner.get("b.kt"), None);
        assert_eq!(store.inner.get("c.kt"), Some("stale c"));

        // nothing staged by the failed commit leaks into a later one
        store.fail_on = "none";
        commit(&[Artifact::overwrite("d.kt", "d".into())], &mut store).unwrap();
        assert_eq!(store.inner.get("a.kt"), Some("stale a"));
        assert_eq!(store.inner.len(), 3);
    }

    #[test]
    fn failed_commit_on_disk_replaces_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = FsStore::new(dir.path());
        store.write(Path::new("a.kt"), "stale a").unwrap();
        // a regular file where a directory is needed makes staging fail
        store.write(Path::new("blocked"), "").unwrap();

        let artifacts = vec![
            Artifact::overwrite("a.kt", "fresh a".into()),
            Artifact::overwrite("blocked/b.kt", "fresh b".into()),
        ];
        assert!(commit(&artifacts, &mut store).is_err());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("a.kt")).unwrap(),
            "stale a"
        );
    }

    #[test]
    fn overwrite_replaces_contents() {
        let mut store = MemoryStore::new();
        store.write(Path::new("a.kt"), "old").unwrap();
        commit(&[Artifact::overwrite("a.kt", "new".into())], &mut store).unwrap();
        assert_eq!(store.get("a.kt"), Some("new"));
    }
}
