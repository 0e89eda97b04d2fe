//! Package and directory layout of generated sources.

use inspectgen_core::GroupIdents;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sub-package holding the settings data model.
const LAYOUT_PACKAGE: &str = "layout.editor.inspections";
/// Sub-package holding appliers.
const APPLIER_PACKAGE: &str = "applier.impl.editor.inspections";
const APPLIER_API_PACKAGE: &str = "applier.api";
const DAGGER_PROJECT_PACKAGE: &str = "dagger.project";
const DAGGER_INSPECTIONS_PACKAGE: &str = "dagger.inspections";

/// Fixed roots every artifact is placed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Source directory relative to the output root.
    pub source_root: PathBuf,
    /// Kotlin package everything is generated under.
    pub base_package: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src/main/kotlin"),
            base_package: "com.github.alexandrecarlton.idea.settings".to_string(),
        }
    }
}

impl Layout {
    fn qualify(&self, parts: &[&str]) -> String {
        std::iter::once(self.base_package.as_str())
            .chain(parts.iter().copied().filter(|p| !p.is_empty()))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Directory of a fully qualified package.
    pub fn dir(&self, package: &str) -> PathBuf {
        package
            .split('.')
            .fold(self.source_root.clone(), |dir, part| dir.join(part))
    }

    /// Bazel label of a fully qualified package's directory.
    pub fn label(&self, package: &str) -> String {
        let dir = self.dir(package);
        let parts: Vec<String> = dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        format!("//{}", parts.join("/"))
    }

    pub fn layout_root_package(&self) -> String {
        self.qualify(&[LAYOUT_PACKAGE])
    }

    pub fn layout_package(&self, group: &GroupIdents) -> String {
        self.qualify(&[LAYOUT_PACKAGE, group.package.as_str()])
    }

    pub fn applier_root_package(&self) -> String {
        self.qualify(&[APPLIER_PACKAGE])
    }

    pub fn applier_package(&self, group: &GroupIdents) -> String {
        self.qualify(&[APPLIER_PACKAGE, group.package.as_str()])
    }

    pub fn applier_api_package(&self) -> String {
        self.qualify(&[APPLIER_API_PACKAGE])
    }

    pub fn dagger_project_package(&self) -> String {
        self.qualify(&[DAGGER_PROJECT_PACKAGE])
    }

    pub fn dagger_inspections_package(&self) -> String {
        self.qualify(&[DAGGER_INSPECTIONS_PACKAGE])
    }
}
