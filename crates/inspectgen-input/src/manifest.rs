//! Inspection declarations from plugin manifests.
//!
//! Reads `<localInspection/>` and `<globalInspection/>` children of every
//! top-level `<extensions>` element:
//!
//! ```xml
//! <idea-plugin>
//!   <extensions defaultExtensionNs="com.intellij">
//!     <localInspection groupPath="Java" groupKey="group.names.probable.bugs"
//!                      shortName="ObjectEquality" key="object.comparison.display.name"
//!                      implementationClass="com.siyeh.ig.bugs.ObjectEqualityInspection"/>
//!   </extensions>
//! </idea-plugin>
//! ```

use crate::error::InputError;
use inspectgen_core::{Descriptor, InspectionKind};
use roxmltree::{Document, ParsingOptions};

/// Parse every inspection declared in one manifest.
///
/// `origin` names the document in error messages.
pub fn parse_descriptors(xml: &str, origin: &str) -> Result<Vec<Descriptor>, InputError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options).map_err(|e| InputError::Xml {
        origin: origin.to_string(),
        source: e,
    })?;

    let mut descriptors = Vec::new();
    for extensions in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("extensions"))
    {
        for node in extensions.children().filter(|n| n.is_element()) {
            let Some(kind) = InspectionKind::from_tag(node.tag_name().name()) else {
                continue;
            };
            let descriptor = Descriptor::builder(kind)
                .attributes(|name| node.attribute(name))
                .build()
                .map_err(|e| InputError::Descriptor {
                    origin: origin.to_string(),
                    source: e,
                })?;
            descriptors.push(descriptor);
        }
    }

    tracing::debug!(origin, count = descriptors.len(), "parsed inspection manifest");
    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GADGETS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE idea-plugin [<!ENTITY bugs "Probable bugs">]>
<idea-plugin>
  <id>com.intellij.java</id>
  <extensions defaultExtensionNs="com.intellij">
    <localInspection groupPath="Java" language="JAVA" shortName="ObjectEquality"
                     bundle="com.siyeh.InspectionGadgetsBundle" key="object.comparison.display.name"
                     groupBundle="messages.InspectionsBundle" groupKey="group.names.probable.bugs"
                     enabledByDefault="true" level="WARNING"
                     implementationClass="com.siyeh.ig.bugs.ObjectEqualityInspection"/>
    <applicationService serviceImplementation="com.example.Unrelated"/>
    <globalInspection groupName="Declaration redundancy" displayName="Unused declaration"
                      implementationClass="com.intellij.codeInspection.deadCode.UnusedDeclarationInspection"/>
  </extensions>
  <extensions defaultExtensionNs="com.intellij.java">
    <localInspection shortName="Second" groupPath="" displayName="In second block"/>
  </extensions>
  <actions>
    <localInspection shortName="NotAnExtension"/>
  </actions>
</idea-plugin>
"#;

    #[test]
    fn reads_both_inspection_kinds() {
        let descriptors = parse_descriptors(GADGETS, "InspectionGadgets.xml").unwrap();
        let names: Vec<&str> = descriptors.iter().map(|d| d.short_name()).collect();
        assert_eq!(names, vec!["ObjectEquality", "UnusedDeclaration", "Second"]);

        let equality = &descriptors[0];
        assert_eq!(equality.kind(), InspectionKind::Local);
        assert_eq!(equality.group_path(), Some("Java"));
        assert_eq!(equality.group_key(), Some("group.names.probable.bugs"));
        assert_eq!(equality.key(), Some("object.comparison.display.name"));
        assert_eq!(equality.language(), Some("JAVA"));
        assert_eq!(equality.display_name(), None);

        let unused = &descriptors[1];
        assert_eq!(unused.kind(), InspectionKind::Global);
        assert_eq!(unused.group_name(), Some("Declaration redundancy"));
        assert_eq!(unused.display_name(), Some("Unused declaration"));

        assert_eq!(descriptors[2].group_path(), None);
    }

    #[test]
    fn no_extensions_is_empty() {
        let descriptors = parse_descriptors("<idea-plugin/>", "empty.xml").unwrap();
        assert!(descriptors.is_empty());
    }

    #[test]
    fn malformed_xml_names_the_origin() {
        let err = parse_descriptors("<idea-plugin>", "broken.xml").unwrap_err();
        assert!(matches!(err, InputError::Xml { .. }));
        assert!(err.to_string().contains("broken.xml"));
    }

    #[test]
    fn unnamed_inspection_is_an_error() {
        let xml = r#"<idea-plugin><extensions><localInspection displayName="x"/></extensions></idea-plugin>"#;
        let err = parse_descriptors(xml, "plugin.xml").unwrap_err();
        assert!(matches!(err, InputError::Descriptor { .. }));
    }
}
