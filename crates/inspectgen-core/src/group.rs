//! Scope filtering and grouping by category path.

use crate::ident::GroupIdents;
use crate::path::CategoryPath;
use crate::record::NormalizedRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Which category paths take part in generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowList {
    /// Every path.
    All,
    /// Exactly these paths.
    Only(Vec<CategoryPath>),
}

impl AllowList {
    pub fn only(paths: impl IntoIterator<Item = CategoryPath>) -> Self {
        AllowList::Only(paths.into_iter().collect())
    }

    pub fn admits(&self, path: &CategoryPath) -> bool {
        match self {
            AllowList::All => true,
            AllowList::Only(paths) => paths.contains(path),
        }
    }
}

/// The single category generated by default.
impl Default for AllowList {
    fn default() -> Self {
        AllowList::Only(vec![CategoryPath::new(["Java", "Probable bugs"])])
    }
}

/// Records sharing one category path.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationGroup {
    path: CategoryPath,
    names: GroupIdents,
    records: Vec<NormalizedRecord>,
}

impl GenerationGroup {
    pub fn path(&self) -> &CategoryPath {
        &self.path
    }

    /// Names of the group-wide settings aggregate.
    pub fn names(&self) -> &GroupIdents {
        &self.names
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }
}

/// Filtered, sorted records, partitioned into contiguous groups.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationPlan {
    groups: Vec<GenerationGroup>,
}

impl GenerationPlan {
    /// Filter by `scope`, stable-sort by category path, then split at every
    /// path change.
    pub fn build(records: impl IntoIterator<Item = NormalizedRecord>, scope: &AllowList) -> Self {
        let mut records: Vec<NormalizedRecord> = records
            .into_iter()
            .filter(|record| scope.admits(record.path()))
            .collect();
        records.sort_by(|a, b| a.path().cmp(b.path()));

        let mut groups: Vec<GenerationGroup> = Vec::new();
        for record in records {
            match groups.last_mut() {
                Some(group) if group.path == *record.path() => group.records.push(record),
                _ => groups.push(GenerationGroup {
                    path: record.path().clone(),
                    names: GroupIdents::from_path(record.path()),
                    records: vec![record],
                }),
            }
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[GenerationGroup] {
        &self.groups
    }

    /// Every record across all groups, in sort order.
    pub fn records(&self) -> impl Iterator<Item = &NormalizedRecord> {
        self.groups.iter().flat_map(|group| group.records.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All short names, sorted.
    pub fn short_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records().map(NormalizedRecord::short_name).collect();
        names.sort_unstable();
        names
    }
}

/// A short name declared under more than one category path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguousClassification {
    pub short_name: String,
    pub paths: Vec<CategoryPath>,
}

/// Report short names that classify differently across declarations.
///
/// Nothing is reconciled; the caller decides how loudly to report.
pub fn find_ambiguous<'a>(
    classified: impl IntoIterator<Item = (&'a str, &'a CategoryPath)>,
) -> Vec<AmbiguousClassification> {
    let mut seen: BTreeMap<&str, Vec<&CategoryPath>> = BTreeMap::new();
    for (short_name, path) in classified {
        let paths = seen.entry(short_name).or_default();
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    seen.into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(short_name, paths)| AmbiguousClassification {
            short_name: short_name.to_string(),
            paths: paths.into_iter().cloned().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classification;
    use crate::descriptor::{Descriptor, InspectionKind};

    fn record(short_name: &str, path: &[&str]) -> NormalizedRecord {
        let descriptor = Descriptor::builder(InspectionKind::Local)
            .short_name(Some(short_name))
            .build()
            .unwrap();
        NormalizedRecord::try_new(
            descriptor,
            Classification {
                path: CategoryPath::new(path.iter().copied()),
                display_name: format!("{short_name} display"),
            },
        )
        .unwrap()
    }

    fn short_names(group: &GenerationGroup) -> Vec<&str> {
        group.records().iter().map(|r| r.short_name()).collect()
    }

    #[test]
    fn equal_paths_are_contiguous() {
        let records = vec![
            record("A", &["Java", "Probable bugs"]),
            record("B", &["JavaScript", "General"]),
            record("C", &["Java", "Probable bugs"]),
            record("D", &["Java", "Code style issues"]),
            record("E", &["JavaScript", "General"]),
        ];
        let plan = GenerationPlan::build(records, &AllowList::All);

        let paths: Vec<String> = plan.groups().iter().map(|g| g.path().to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "Java/Code style issues",
                "Java/Probable bugs",
                "JavaScript/General"
            ]
        );
        // stable: input order is kept within a group
        assert_eq!(short_names(&plan.groups()[1]), vec!["A", "C"]);
        assert_eq!(short_names(&plan.groups()[2]), vec!["B", "E"]);
        assert_eq!(plan.len(), 5);

        let flat: Vec<&str> = plan.records().map(|r| r.short_name()).collect();
        assert_eq!(flat, vec!["D", "A", "C", "B", "E"]);
    }

    #[test]
    fn allow_list_excludes_other_paths() {
        let records = vec![
            record("A", &["Java", "Probable bugs"]),
            record("B", &["Java", "Threading issues"]),
            record("C", &["Java"]),
            record("D", &["Java", "Probable bugs", "Nullability problems"]),
        ];
        let plan = GenerationPlan::build(records, &AllowList::default());

        assert_eq!(plan.groups().len(), 1);
        assert_eq!(plan.groups()[0].names().class_name_prefix, "JavaProbableBugs");
        assert_eq!(plan.short_names(), vec!["A"]);
    }

    #[test]
    fn short_names_are_sorted() {
        let records = vec![
            record("Zeta", &["B"]),
            record("Alpha", &["B"]),
            record("Mid", &["A"]),
        ];
        let plan = GenerationPlan::build(records, &AllowList::All);
        assert_eq!(plan.short_names(), vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn empty_input() {
        let plan = GenerationPlan::build(Vec::new(), &AllowList::All);
        assert!(plan.is_empty());
        assert_eq!(plan.records().count(), 0);
    }

    #[test]
    fn ambiguous_short_names_are_reported() {
        let bugs = CategoryPath::new(["Java", "Probable bugs"]);
        let style = CategoryPath::new(["Java", "Code style issues"]);
        let found = find_ambiguous([
            ("Dup", &bugs),
            ("Same", &bugs),
            ("Dup", &style),
            ("Same", &bugs),
        ]);
        assert_eq!(
            found,
            vec![AmbiguousClassification {
                short_name: "Dup".into(),
                paths: vec![bugs.clone(), style.clone()],
            }]
        );
    }
}
