//! Reading sources and normalizing them.

use crate::config::Settings;
use anyhow::{Context, Result};
use inspectgen_core::{Normalized, normalize};
use inspectgen_input::{ZipArchiveReader, load_descriptors, load_messages};

/// Load the configured manifests and bundles and normalize them into a plan.
pub fn normalize_sources(settings: &Settings) -> Result<Normalized> {
    let reader = ZipArchiveReader::new(&settings.ide_home);
    tracing::debug!(ide_home = %settings.ide_home.display(), "reading IDE distribution");

    let messages = load_messages(&reader, &settings.sources.bundles)
        .context("failed to load message bundles")?;
    let descriptors = load_descriptors(&reader, &settings.sources.descriptors)
        .context("failed to load inspection manifests")?;

    let normalized = normalize(descriptors, &messages, &settings.scope)?;
    for ambiguous in &normalized.ambiguous {
        let paths: Vec<String> = ambiguous.paths.iter().map(ToString::to_string).collect();
        tracing::warn!(
            short_name = %ambiguous.short_name,
            paths = %paths.join(", "),
            "inspection is classified under several category paths"
        );
    }
    if normalized.plan.is_empty() {
        tracing::warn!("no inspections in scope");
    }
    Ok(normalized)
}
