//! End-to-end normalization: classify, scope, validate, group.

use crate::classify::classify;
use crate::descriptor::Descriptor;
use crate::group::{AllowList, AmbiguousClassification, GenerationPlan, find_ambiguous};
use crate::localization::LocalizationIndex;
use crate::record::{NormalizeError, NormalizedRecord};

/// Result of a successful normalization pass.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub plan: GenerationPlan,
    /// Descriptors whose category path the allow-list rejected.
    pub excluded: usize,
    /// Short names classified under more than one path (all descriptors,
    /// in scope or not).
    pub ambiguous: Vec<AmbiguousClassification>,
}

/// Run the whole pipeline over a batch of descriptors.
///
/// Every descriptor is classified first. Records outside `scope` are set
/// aside before validation, so an unresolvable inspection in another category
/// does not abort the run. Every gap among in-scope records is collected and
/// returned together.
pub fn normalize(
    descriptors: impl IntoIterator<Item = Descriptor>,
    messages: &LocalizationIndex,
    scope: &AllowList,
) -> Result<Normalized, NormalizeError> {
    let classified: Vec<_> = descriptors
        .into_iter()
        .map(|descriptor| {
            let classification = classify(&descriptor, messages);
            (descriptor, classification)
        })
        .collect();

    let ambiguous = find_ambiguous(
        classified
            .iter()
            .map(|(descriptor, c)| (descriptor.short_name(), &c.path)),
    );

    let mut records = Vec::new();
    let mut gaps = Vec::new();
    let mut excluded = 0;
    for (descriptor, classification) in classified {
        if !scope.admits(&classification.path) {
            tracing::debug!(
                short_name = descriptor.short_name(),
                path = %classification.path,
                "out of scope"
            );
            excluded += 1;
            continue;
        }
        match NormalizedRecord::try_new(descriptor, classification) {
            Ok(record) => records.push(record),
            Err(found) => gaps.extend(found),
        }
    }

    if !gaps.is_empty() {
        return Err(NormalizeError::Unresolved(gaps));
    }

    let plan = GenerationPlan::build(records, scope);
    tracing::info!(
        records = plan.len(),
        groups = plan.groups().len(),
        excluded,
        "normalized inspections"
    );

    Ok(Normalized {
        plan,
        excluded,
        ambiguous,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::InspectionKind;
    use crate::path::CategoryPath;
    use crate::record::ResolutionGap;

    fn messages() -> LocalizationIndex {
        [
            ("group.names.probable.bugs", "Probable bugs"),
            ("group.names.threading.issues", "Threading issues"),
            ("object.equality", "Object comparison using '==', instead of 'equals()'"),
        ]
        .into_iter()
        .collect()
    }

    fn gadget(short_name: &str, group_key: &str, key: Option<&str>) -> Descriptor {
        Descriptor::builder(InspectionKind::Local)
            .short_name(Some(short_name))
            .group_path(Some("Java"))
            .group_key(Some(group_key))
            .key(key)
            .display_name(Some(format!("{short_name} raw").as_str()))
            .build()
            .unwrap()
    }

    #[test]
    fn normalizes_default_scope() {
        let descriptors = vec![
            gadget("ObjectEquality", "group.names.probable.bugs", Some("object.equality")),
            gadget("WaitNotInLoop", "group.names.threading.issues", None),
            gadget("NumberEquality", "group.names.probable.bugs", None),
        ];

        let out = normalize(descriptors, &messages(), &AllowList::default()).unwrap();
        assert_eq!(out.excluded, 1);
        assert!(out.ambiguous.is_empty());
        assert_eq!(out.plan.groups().len(), 1);

        let group = &out.plan.groups()[0];
        assert_eq!(group.path(), &CategoryPath::new(["Java", "Probable bugs"]));
        let prefixes: Vec<&str> = group
            .records()
            .iter()
            .map(|r| r.class_name_prefix())
            .collect();
        assert_eq!(
            prefixes,
            vec![
                "ObjectComparisonUsingEqualsInsteadOfEquals",
                "NumberEqualityRaw"
            ]
        );
    }

    #[test]
    fn out_of_scope_gaps_do_not_abort() {
        let orphan = Descriptor::builder(InspectionKind::Global)
            .short_name(Some("Orphan"))
            .build()
            .unwrap();
        let descriptors = vec![
            orphan,
            gadget("NumberEquality", "group.names.probable.bugs", None),
        ];
        let out = normalize(descriptors, &messages(), &AllowList::default()).unwrap();
        assert_eq!(out.plan.short_names(), vec!["NumberEquality"]);
        assert_eq!(out.excluded, 1);
    }

    #[test]
    fn in_scope_gaps_abort_with_every_gap() {
        let orphan = Descriptor::builder(InspectionKind::Global)
            .short_name(Some("Orphan"))
            .build()
            .unwrap();
        let nameless = Descriptor::builder(InspectionKind::Local)
            .short_name(Some("Nameless"))
            .group_name(Some("Misc"))
            .build()
            .unwrap();

        let err = normalize(vec![orphan, nameless], &messages(), &AllowList::All).unwrap_err();
        let NormalizeError::Unresolved(gaps) = err;
        assert_eq!(
            gaps,
            vec![
                ResolutionGap::EmptyCategoryPath {
                    short_name: "Orphan".into()
                },
                ResolutionGap::EmptyDisplayName {
                    short_name: "Orphan".into()
                },
                ResolutionGap::EmptyDisplayName {
                    short_name: "Nameless".into()
                },
            ]
        );
    }

    #[test]
    fn reports_ambiguity_across_scope() {
        let descriptors = vec![
            gadget("Dup", "group.names.probable.bugs", None),
            gadget("Dup", "group.names.threading.issues", None),
        ];
        let out = normalize(descriptors, &messages(), &AllowList::default()).unwrap();
        assert_eq!(out.ambiguous.len(), 1);
        assert_eq!(out.ambiguous[0].short_name, "Dup");
    }
}
