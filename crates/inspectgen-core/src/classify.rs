//! Category path and display name resolution.

use crate::descriptor::Descriptor;
use crate::localization::LocalizationIndex;
use crate::path::CategoryPath;
use serde::Serialize;

/// What the classifier resolved for one descriptor.
///
/// Either part may be empty; validation happens when the record is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub path: CategoryPath,
    pub display_name: String,
}

/// Resolve both the category path and display name.
pub fn classify(descriptor: &Descriptor, messages: &LocalizationIndex) -> Classification {
    Classification {
        path: category_path(descriptor, messages),
        display_name: display_name(descriptor, messages),
    }
}

/// Build the category path.
///
/// Segments accumulate: every `groupPath` entry, then the localized `groupKey`.
/// Only when neither contributed anything is the raw `groupName` used.
pub fn category_path(descriptor: &Descriptor, messages: &LocalizationIndex) -> CategoryPath {
    let mut path = CategoryPath::default();

    if let Some(group_path) = descriptor.group_path() {
        for segment in group_path.split(',') {
            path.push(segment.trim());
        }
    }

    if let Some(group) = descriptor.group_key().and_then(|key| messages.get(key)) {
        path.push(group);
    }

    if path.is_empty()
        && let Some(name) = descriptor.group_name()
    {
        path.push(name);
    }

    path
}

/// Resolve the human-readable name: localized `key` first, raw `displayName`
/// otherwise. Empty when neither resolves.
pub fn display_name(descriptor: &Descriptor, messages: &LocalizationIndex) -> String {
    let raw = descriptor
        .key()
        .and_then(|key| messages.get(key))
        .or(descriptor.display_name())
        .unwrap_or_default();
    unescape_quotes(raw)
}

/// Bundles write `''ADD''` for a quoted word; show it as `"ADD"`.
pub fn unescape_quotes(name: &str) -> String {
    name.replace("''", "\"")
}
