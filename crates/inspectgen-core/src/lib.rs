//! Inspection metadata normalization.
//!
//! `inspectgen-core` turns raw inspection declarations from IDE plugin
//! manifests into a canonical naming and grouping model that code generators
//! consume.
//!
//! # Architecture
//!
//! ```text
//! Descriptor ─┐
//!             ├─> Classifier ──> NormalizedRecord ──> GenerationPlan ──> Renderer
//! Messages  ──┘   (path, name)   (+ identifiers)      (groups by path)
//! ```
//!
//! # Example
//!
//! ```
//! use inspectgen_core::{AllowList, Descriptor, InspectionKind, LocalizationIndex, normalize};
//!
//! let messages: LocalizationIndex = [("group.names.probable.bugs", "Probable bugs")]
//!     .into_iter()
//!     .collect();
//!
//! let descriptor = Descriptor::builder(InspectionKind::Local)
//!     .short_name(Some("EqualsWithItself"))
//!     .group_path(Some("Java"))
//!     .group_key(Some("group.names.probable.bugs"))
//!     .display_name(Some("'equals()' called on itself"))
//!     .build()
//!     .unwrap();
//!
//! let out = normalize([descriptor], &messages, &AllowList::default()).unwrap();
//! let group = &out.plan.groups()[0];
//! assert_eq!(group.names().package, "java.probable_bugs");
//! assert_eq!(group.records()[0].class_name_prefix(), "EqualsCalledOnItself");
//! ```

pub mod classify;
pub mod descriptor;
pub mod group;
pub mod ident;
pub mod localization;
pub mod normalize;
pub mod path;
pub mod record;

pub use classify::{Classification, classify};
pub use descriptor::{Descriptor, DescriptorBuilder, DescriptorError, InspectionKind};
pub use group::{AllowList, AmbiguousClassification, GenerationGroup, GenerationPlan};
pub use ident::{GroupIdents, InspectionIdents};
pub use localization::{LocalizationIndex, LocalizationIndexBuilder};
pub use normalize::{Normalized, normalize};
pub use path::CategoryPath;
pub use record::{NormalizeError, NormalizedRecord, ResolutionGap};
