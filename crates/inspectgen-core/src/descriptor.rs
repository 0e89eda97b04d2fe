//! Raw inspection declarations.
//!
//! A [`Descriptor`] is one `<localInspection/>` or `<globalInspection/>` element
//! read from a plugin manifest. Construction goes through [`DescriptorBuilder`],
//! which reads a fixed attribute set and turns empty attributes into `None`.

use serde::{Deserialize, Serialize};

/// Which element the descriptor was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionKind {
    /// `<localInspection/>`
    Local,
    /// `<globalInspection/>`
    Global,
}

impl InspectionKind {
    /// Element tag name used in plugin manifests.
    pub fn tag(self) -> &'static str {
        match self {
            InspectionKind::Local => "localInspection",
            InspectionKind::Global => "globalInspection",
        }
    }

    /// Map an element tag back to a kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "localInspection" => Some(InspectionKind::Local),
            "globalInspection" => Some(InspectionKind::Global),
            _ => None,
        }
    }
}

/// The attributes read from each inspection element, in manifest spelling.
pub const DESCRIPTOR_ATTRIBUTES: &[&str] = &[
    "shortName",
    "groupKey",
    "groupName",
    "groupPath",
    "implementationClass",
    "language",
    "key",
    "displayName",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error(
        "{kind} element has neither shortName nor a usable implementationClass",
        kind = .0.tag()
    )]
    MissingShortName(InspectionKind),
}

/// A parsed inspection declaration.
///
/// `short_name` is always non-empty; every other field is `None` when the
/// attribute was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    kind: InspectionKind,
    short_name: String,
    group_key: Option<String>,
    group_name: Option<String>,
    group_path: Option<String>,
    display_name: Option<String>,
    key: Option<String>,
    implementation_class: Option<String>,
    language: Option<String>,
}

impl Descriptor {
    /// Start building a descriptor of the given kind.
    pub fn builder(kind: InspectionKind) -> DescriptorBuilder {
        DescriptorBuilder::new(kind)
    }

    pub fn kind(&self) -> InspectionKind {
        self.kind
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn group_key(&self) -> Option<&str> {
        self.group_key.as_deref()
    }

    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    pub fn group_path(&self) -> Option<&str> {
        self.group_path.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn implementation_class(&self) -> Option<&str> {
        self.implementation_class.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Builder for [`Descriptor`].
///
/// Setters accept `Option<&str>` so attribute lookups can be passed straight
/// through; empty strings are treated as absent.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    kind: InspectionKind,
    short_name: Option<String>,
    group_key: Option<String>,
    group_name: Option<String>,
    group_path: Option<String>,
    display_name: Option<String>,
    key: Option<String>,
    implementation_class: Option<String>,
    language: Option<String>,
}

fn present(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}

impl DescriptorBuilder {
    pub fn new(kind: InspectionKind) -> Self {
        Self {
            kind,
            short_name: None,
            group_key: None,
            group_name: None,
            group_path: None,
            display_name: None,
            key: None,
            implementation_class: None,
            language: None,
        }
    }

    /// Fill every field from an attribute lookup keyed by manifest spelling
    /// (see [`DESCRIPTOR_ATTRIBUTES`]).
    pub fn attributes<'a>(self, lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        self.short_name(lookup("shortName"))
            .group_key(lookup("groupKey"))
            .group_name(lookup("groupName"))
            .group_path(lookup("groupPath"))
            .implementation_class(lookup("implementationClass"))
            .language(lookup("language"))
            .key(lookup("key"))
            .display_name(lookup("displayName"))
    }

    pub fn short_name(mut self, value: Option<&str>) -> Self {
        self.short_name = present(value);
        self
    }

    pub fn group_key(mut self, value: Option<&str>) -> Self {
        self.group_key = present(value);
        self
    }

    pub fn group_name(mut self, value: Option<&str>) -> Self {
        self.group_name = present(value);
        self
    }

    pub fn group_path(mut self, value: Option<&str>) -> Self {
        self.group_path = present(value);
        self
    }

    pub fn display_name(mut self, value: Option<&str>) -> Self {
        self.display_name = present(value);
        self
    }

    pub fn key(mut self, value: Option<&str>) -> Self {
        self.key = present(value);
        self
    }

    pub fn implementation_class(mut self, value: Option<&str>) -> Self {
        self.implementation_class = present(value);
        self
    }

    pub fn language(mut self, value: Option<&str>) -> Self {
        self.language = present(value);
        self
    }

    /// Validate and produce the descriptor.
    ///
    /// A missing short name is derived from the implementation class the same
    /// way the IDE does: simple class name minus a trailing `Inspection`.
    pub fn build(self) -> Result<Descriptor, DescriptorError> {
        let short_name = match self.short_name {
            Some(name) => name,
            None => self
                .implementation_class
                .as_deref()
                .and_then(short_name_from_class)
                .ok_or(DescriptorError::MissingShortName(self.kind))?,
        };

        Ok(Descriptor {
            kind: self.kind,
            short_name,
            group_key: self.group_key,
            group_name: self.group_name,
            group_path: self.group_path,
            display_name: self.display_name,
            key: self.key,
            implementation_class: self.implementation_class,
            language: self.language,
        })
    }
}

/// `com.siyeh.ig.bugs.EqualsBetweenInconvertibleTypesInspection` → `EqualsBetweenInconvertibleTypes`
pub fn short_name_from_class(class: &str) -> Option<String> {
    let simple = class.rsplit(['.', '$']).next().unwrap_or(class);
    let name = simple.strip_suffix("Inspection").unwrap_or(simple);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
