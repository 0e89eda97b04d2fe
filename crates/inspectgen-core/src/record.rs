//! Normalized records and resolution gaps.

use crate::classify::Classification;
use crate::descriptor::Descriptor;
use crate::ident::{GroupIdents, InspectionIdents};
use crate::path::CategoryPath;
use serde::Serialize;
use std::fmt;

/// Why a descriptor cannot be used as a generation source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionGap {
    /// No groupPath, no resolvable groupKey, no groupName.
    EmptyCategoryPath { short_name: String },
    /// Neither the localized key nor the raw displayName resolved.
    EmptyDisplayName { short_name: String },
    /// The display name has no characters left after identifier derivation.
    EmptyIdentifier {
        short_name: String,
        display_name: String,
    },
}

impl ResolutionGap {
    pub fn short_name(&self) -> &str {
        match self {
            ResolutionGap::EmptyCategoryPath { short_name }
            | ResolutionGap::EmptyDisplayName { short_name }
            | ResolutionGap::EmptyIdentifier { short_name, .. } => short_name,
        }
    }
}

impl fmt::Display for ResolutionGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionGap::EmptyCategoryPath { short_name } => {
                write!(f, "{short_name}: no category path could be resolved")
            }
            ResolutionGap::EmptyDisplayName { short_name } => {
                write!(f, "{short_name}: no display name could be resolved")
            }
            ResolutionGap::EmptyIdentifier {
                short_name,
                display_name,
            } => write!(
                f,
                "{short_name}: display name {display_name:?} yields an empty identifier"
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("{} inspection(s) could not be resolved:\n  {}", .0.len(), join_gaps(.0))]
    Unresolved(Vec<ResolutionGap>),
}

fn join_gaps(gaps: &[ResolutionGap]) -> String {
    gaps.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n  ")
}

/// List every gap in a classification.
pub fn resolution_gaps(short_name: &str, classification: &Classification) -> Vec<ResolutionGap> {
    let mut gaps = Vec::new();
    if classification.path.is_empty() {
        gaps.push(ResolutionGap::EmptyCategoryPath {
            short_name: short_name.to_string(),
        });
    }
    if classification.display_name.is_empty() {
        gaps.push(ResolutionGap::EmptyDisplayName {
            short_name: short_name.to_string(),
        });
    }
    gaps
}

/// A descriptor with its resolved names and derived identifiers.
///
/// Built once after classification, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    descriptor: Descriptor,
    display_name: String,
    path: CategoryPath,
    inspection: InspectionIdents,
    group: GroupIdents,
}

impl NormalizedRecord {
    /// Validate a classification and derive identifiers from it.
    pub fn try_new(
        descriptor: Descriptor,
        classification: Classification,
    ) -> Result<Self, Vec<ResolutionGap>> {
        let mut gaps = resolution_gaps(descriptor.short_name(), &classification);

        let inspection = InspectionIdents::from_display_name(&classification.display_name);
        if !classification.display_name.is_empty() && inspection.class_name_prefix.is_empty() {
            gaps.push(ResolutionGap::EmptyIdentifier {
                short_name: descriptor.short_name().to_string(),
                display_name: classification.display_name.clone(),
            });
        }
        if !gaps.is_empty() {
            return Err(gaps);
        }

        let group = GroupIdents::from_path(&classification.path);
        Ok(Self {
            descriptor,
            display_name: classification.display_name,
            path: classification.path,
            inspection,
            group,
        })
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn short_name(&self) -> &str {
        self.descriptor.short_name()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn path(&self) -> &CategoryPath {
        &self.path
    }

    /// Names derived from this inspection's display name.
    pub fn inspection(&self) -> &InspectionIdents {
        &self.inspection
    }

    /// Names derived from this inspection's category path.
    pub fn group(&self) -> &GroupIdents {
        &self.group
    }

    pub fn class_name_prefix(&self) -> &str {
        &self.inspection.class_name_prefix
    }

    pub fn variable_name_prefix(&self) -> &str {
        &self.inspection.variable_name_prefix
    }

    pub fn package(&self) -> &str {
        &self.group.package
    }

    pub fn folder(&self) -> &str {
        &self.group.folder
    }

    pub fn build_rule(&self) -> &str {
        &self.group.build_rule
    }
}
