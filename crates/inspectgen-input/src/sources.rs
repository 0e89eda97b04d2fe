//! Which archive entries a run reads, and loading them.

use crate::archive::{ArchiveReader, SourceEntry};
use crate::error::InputError;
use crate::manifest::parse_descriptors;
use crate::properties::{decode, parse_properties};
use inspectgen_core::{Descriptor, LocalizationIndex};
use serde::{Deserialize, Serialize};

/// Archive entries holding inspection manifests and message bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceManifest {
    /// Entries containing `localInspection`/`globalInspection` elements.
    pub descriptors: Vec<SourceEntry>,
    /// Bundles resolving the keys those elements reference, in load order.
    pub bundles: Vec<SourceEntry>,
}

impl Default for SourceManifest {
    fn default() -> Self {
        Self {
            descriptors: vec![
                SourceEntry::new(
                    "plugins/Docker/lib/Docker-compose.jar",
                    "META-INF/yaml-specific.xml",
                ),
                SourceEntry::new(
                    "plugins/Docker/lib/Docker-file.jar",
                    "META-INF/dockerfile-language.xml",
                ),
                SourceEntry::new(
                    "plugins/java/lib/java-impl.jar",
                    "META-INF/InspectionGadgets.xml",
                ),
                SourceEntry::new(
                    "plugins/JavaScriptLanguage/lib/JavaScriptLanguage.jar",
                    "META-INF/plugin.xml",
                ),
            ],
            bundles: vec![
                SourceEntry::new(
                    "lib/resources_en.jar",
                    "messages/InspectionsBundle.properties",
                ),
                SourceEntry::new(
                    "plugins/Docker/lib/Docker-compose.jar",
                    "resources/DockerCompose.properties",
                ),
                SourceEntry::new(
                    "plugins/Docker/lib/Docker-core.jar",
                    "resources/DockerBundle.properties",
                ),
                SourceEntry::new(
                    "plugins/java/lib/java_resources_en.jar",
                    "com/siyeh/InspectionGadgetsBundle.properties",
                ),
                SourceEntry::new(
                    "plugins/JavaScriptLanguage/lib/resources_en.jar",
                    "messages/JavaScriptBundle.properties",
                ),
            ],
        }
    }
}

/// Load every bundle into one index. Later bundles override earlier keys.
pub fn load_messages(
    reader: &dyn ArchiveReader,
    bundles: &[SourceEntry],
) -> Result<LocalizationIndex, InputError> {
    let mut builder = LocalizationIndex::builder();
    for bundle in bundles {
        let bytes = reader.read_entry(bundle)?;
        let entries = parse_properties(&decode(&bytes));
        tracing::info!(source = %bundle, messages = entries.len(), "loaded bundle");
        builder.extend(entries);
    }
    Ok(builder.build())
}

/// Parse every manifest, concatenating declarations in source order.
pub fn load_descriptors(
    reader: &dyn ArchiveReader,
    manifests: &[SourceEntry],
) -> Result<Vec<Descriptor>, InputError> {
    let mut descriptors = Vec::new();
    for manifest in manifests {
        let bytes = reader.read_entry(manifest)?;
        let origin = manifest.to_string();
        let xml = std::str::from_utf8(&bytes).map_err(|e| InputError::Encoding {
            origin: origin.clone(),
            source: e,
        })?;
        let parsed = parse_descriptors(xml, &origin)?;
        tracing::info!(source = %manifest, inspections = parsed.len(), "loaded manifest");
        descriptors.extend(parsed);
    }
    Ok(descriptors)
}
