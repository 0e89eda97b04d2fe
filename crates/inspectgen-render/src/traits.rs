//! Traits for artifact renderers.

use crate::artifact::Artifact;
use crate::store::ArtifactStore;
use inspectgen_core::{GenerationGroup, GenerationPlan};
use std::collections::HashSet;

/// Turns normalized inspections into output artifacts.
///
/// Rendering is pure: implementations only read the store (to see which
/// customized files exist) and return artifacts for [`commit`](crate::commit).
pub trait Renderer {
    /// Unique renderer identifier (e.g., "kotlin").
    fn name(&self) -> &'static str;

    /// Artifacts for one generation group: the group aggregate plus one
    /// artifact per inspection.
    fn render_group(&self, group: &GenerationGroup) -> Vec<Artifact>;

    /// Artifacts spanning every group (registration modules and the like).
    fn render_all(&self, plan: &GenerationPlan, store: &dyn ArtifactStore) -> Vec<Artifact>;

    /// Render the whole plan: every group, then the cross-cutting artifacts.
    fn render(&self, plan: &GenerationPlan, store: &dyn ArtifactStore) -> Vec<Artifact> {
        let mut artifacts: Vec<Artifact> = plan
            .groups()
            .iter()
            .flat_map(|group| self.render_group(group))
            .collect();
        artifacts.extend(self.render_all(plan, store));

        let mut seen = HashSet::new();
        for artifact in &artifacts {
            if !seen.insert(&artifact.path) {
                tracing::warn!(
                    renderer = self.name(),
                    path = %artifact.path.display(),
                    "identifier collision: several artifacts share one path"
                );
            }
        }
        artifacts
    }
}
