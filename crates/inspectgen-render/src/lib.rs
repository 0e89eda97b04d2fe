//! Rendering of normalized inspection groups into source files.
//!
//! ```text
//! GenerationPlan ──> Renderer ──> Vec<Artifact> ──> commit ──> ArtifactStore
//!                       │                                  (FsStore | MemoryStore)
//!                       └── exists? (preserve hand-edited files)
//! ```
//!
//! Rendering happens entirely in memory. Only once every artifact is rendered
//! does [`commit`] touch the store, honoring each artifact's [`WritePolicy`].
//!
//! ```
//! use inspectgen_core::{AllowList, GenerationPlan};
//! use inspectgen_render::{KotlinRenderer, MemoryStore, Renderer, commit};
//!
//! let plan = GenerationPlan::build(Vec::new(), &AllowList::All);
//! let mut store = MemoryStore::new();
//! let artifacts = KotlinRenderer::default().render(&plan, &store);
//! let report = commit(&artifacts, &mut store).unwrap();
//! assert_eq!(report.written.len(), 4);
//! ```

pub mod artifact;
pub mod layout;
pub mod output;
pub mod store;
pub mod traits;

pub use artifact::{Artifact, CommitReport, WritePolicy, commit, preview};
pub use layout::Layout;
pub use output::KotlinRenderer;
pub use store::{ArtifactStore, FsStore, MemoryStore, RenderError};
pub use traits::Renderer;
