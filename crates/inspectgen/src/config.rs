//! Configuration system for inspectgen.
//!
//! Layers, later ones overriding earlier ones field by field:
//! 1. Built-in defaults
//! 2. Global: `$XDG_CONFIG_HOME/inspectgen/config.toml` (or `~/.config/...`)
//! 3. Per-project: `.inspectgen/config.toml`
//! 4. An explicit `--config FILE`
//! 5. Command-line flags
//!
//! Example config.toml:
//! ```toml
//! ide_home = "bazel-idea-settings/external/idea-IU"
//! categories = [["Java", "Probable bugs"], ["Java", "Threading issues"]]
//!
//! [layout]
//! base_package = "com.github.alexandrecarlton.idea.settings"
//!
//! [[sources.bundles]]
//! archive = "lib/resources_en.jar"
//! entry = "messages/InspectionsBundle.properties"
//! ```

use anyhow::{Context, Result, bail};
use inspectgen_core::{AllowList, CategoryPath};
use inspectgen_input::{SourceEntry, SourceManifest};
use inspectgen_render::Layout;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where generated sources go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub source_root: Option<PathBuf>,
    pub base_package: Option<String>,
}

/// Which archive entries to read. Each list replaces the built-in one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesConfig {
    pub descriptors: Option<Vec<SourceEntry>>,
    pub bundles: Option<Vec<SourceEntry>>,
}

/// One configuration layer. Unset fields defer to earlier layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectgenConfig {
    /// Root of the unpacked IDE distribution.
    pub ide_home: Option<PathBuf>,
    /// Directory generated sources are written below.
    pub output: Option<PathBuf>,
    /// Category paths to generate; each path is a list of labels.
    pub categories: Option<Vec<Vec<String>>>,
    /// Generate every category, ignoring `categories`.
    pub all_categories: Option<bool>,
    pub layout: LayoutConfig,
    pub sources: SourcesConfig,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub ide_home: PathBuf,
    pub output: PathBuf,
    pub scope: AllowList,
    pub layout: Layout,
    pub sources: SourceManifest,
}

impl InspectgenConfig {
    /// Load the file layers for a project rooted at `root`.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        Self::load_layers(Self::global_config_path().as_deref(), root, explicit)
    }

    fn load_layers(global: Option<&Path>, root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global) = global
            && let Some(layer) = Self::load_file(global)?
        {
            tracing::debug!(path = %global.display(), "loaded global config");
            config = config.merge(layer);
        }

        let project = root.join(".inspectgen").join("config.toml");
        if let Some(layer) = Self::load_file(&project)? {
            tracing::debug!(path = %project.display(), "loaded project config");
            config = config.merge(layer);
        }

        if let Some(path) = explicit {
            let Some(layer) = Self::load_file(path)? else {
                bail!("config file {} does not exist", path.display());
            };
            tracing::debug!(path = %path.display(), "loaded config");
            config = config.merge(layer);
        }

        Ok(config)
    }

    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("inspectgen").join("config.toml"))
    }

    /// `Ok(None)` when the file does not exist.
    fn load_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(Some(config))
    }

    /// Overlay `other` on top of `self`.
    ///
    /// `categories` and `all_categories` form one scope: a layer listing
    /// categories also switches off an inherited `all_categories`.
    pub fn merge(self, other: Self) -> Self {
        let (categories, all_categories) = match other.categories {
            Some(categories) => (Some(categories), other.all_categories.or(Some(false))),
            None => (
                self.categories,
                other.all_categories.or(self.all_categories),
            ),
        };
        Self {
            ide_home: other.ide_home.or(self.ide_home),
            output: other.output.or(self.output),
            categories,
            all_categories,
            layout: LayoutConfig {
                source_root: other.layout.source_root.or(self.layout.source_root),
                base_package: other.layout.base_package.or(self.layout.base_package),
            },
            sources: SourcesConfig {
                descriptors: other.sources.descriptors.or(self.sources.descriptors),
                bundles: other.sources.bundles.or(self.sources.bundles),
            },
        }
    }

    /// Fill unset fields from the built-in defaults.
    pub fn resolve(self) -> Result<Settings> {
        let Some(ide_home) = self.ide_home else {
            bail!("no IDE home configured: pass --ide-home or set `ide_home` in config.toml");
        };

        let scope = match (self.all_categories, self.categories) {
            (Some(true), _) => AllowList::All,
            (_, Some(categories)) => {
                AllowList::only(categories.into_iter().map(CategoryPath::new))
            }
            _ => AllowList::default(),
        };

        let default_layout = Layout::default();
        let layout = Layout {
            source_root: self.layout.source_root.unwrap_or(default_layout.source_root),
            base_package: self.layout.base_package.unwrap_or(default_layout.base_package),
        };

        let default_sources = SourceManifest::default();
        let sources = SourceManifest {
            descriptors: self.sources.descriptors.unwrap_or(default_sources.descriptors),
            bundles: self.sources.bundles.unwrap_or(default_sources.bundles),
        };

        Ok(Settings {
            ide_home,
            output: self.output.unwrap_or_else(|| PathBuf::from(".")),
            scope,
            layout,
            sources,
        })
    }
}
