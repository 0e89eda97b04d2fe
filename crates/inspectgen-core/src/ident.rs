//! Identifier derivation.
//!
//! Two separate contexts produce names:
//!
//! - [`InspectionIdents`]: per inspection, derived from its display name.
//! - [`GroupIdents`]: per generation group, derived from the whole category path.
//!
//! They never share an entry point. The group class prefix for
//! `["Java", "Probable bugs"]` is `JavaProbableBugs`, while an inspection in that
//! group gets its prefix from its own display name.
//!
//! Every function here is total: any string is accepted and empty input
//! yields empty output.

use crate::path::CategoryPath;
use serde::Serialize;

/// Operator-like tokens spelled out before punctuation is stripped, in this order.
const SYMBOL_WORDS: &[(&str, &str)] = &[
    ("==", "equals"),
    ("++", "increment"),
    ("--", "decrement"),
];

/// Compound identifier form: `"'==' between objects"` → `"EqualsBetweenObjects"`.
///
/// Each word keeps its remaining characters as-is; only the first is upper-cased.
pub fn to_pascal(text: &str) -> String {
    let mut replaced = text.to_string();
    for (symbol, word) in SYMBOL_WORDS {
        replaced = replaced.replace(symbol, word);
    }

    let spaced: String = replaced
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect();

    spaced.split_whitespace().map(upper_first).collect()
}

/// [`to_pascal`] with the first character lower-cased.
pub fn to_variable_name(text: &str) -> String {
    lower_first(&to_pascal(text))
}

/// `["Java", "Probable bugs"]` → `java.probable_bugs`
pub fn package_path(path: &CategoryPath) -> String {
    path.segments()
        .iter()
        .map(|segment| segment.to_lowercase().replace([' ', '-'], "_"))
        .collect::<Vec<_>>()
        .join(".")
}

/// `["Java", "Probable bugs"]` → `java/probable_bugs`
pub fn folder_path(path: &CategoryPath) -> String {
    package_path(path).replace('.', "/")
}

/// `["Java", "Probable bugs"]` → `probable_bugs`
pub fn build_rule_label(path: &CategoryPath) -> String {
    path.last()
        .map(|segment| segment.to_lowercase().replace(' ', "_"))
        .unwrap_or_default()
}

/// `["Java", "Probable bugs"]` → `JavaProbableBugs`
pub fn group_class_name_prefix(path: &CategoryPath) -> String {
    to_pascal(&path.segments().join(" "))
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Names for the per-inspection options object and its applier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionIdents {
    /// `NumberComparisonUsingEquals`
    pub class_name_prefix: String,
    /// `numberComparisonUsingEquals`
    pub variable_name_prefix: String,
}

impl InspectionIdents {
    pub fn from_display_name(display_name: &str) -> Self {
        let class_name_prefix = to_pascal(display_name);
        let variable_name_prefix = lower_first(&class_name_prefix);
        Self {
            class_name_prefix,
            variable_name_prefix,
        }
    }
}

/// Names for the one settings aggregate (and applier) covering a whole group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupIdents {
    pub class_name_prefix: String,
    pub package: String,
    pub folder: String,
    pub build_rule: String,
}

impl GroupIdents {
    pub fn from_path(path: &CategoryPath) -> Self {
        Self {
            class_name_prefix: group_class_name_prefix(path),
            package: package_path(path),
            folder: folder_path(path),
            build_rule: build_rule_label(path),
        }
    }
}
