//! Subcommands and the arguments they share.

use crate::config::{InspectgenConfig, Settings};
use anyhow::{Context, Result};
use clap::Args;
use inspectgen_core::CategoryPath;
use std::path::PathBuf;

pub mod generate;
pub mod list;

/// Where inspections come from and which ones are in scope.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Config file applied on top of the global and project configs
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root of the unpacked IDE distribution
    #[arg(long, value_name = "DIR")]
    pub ide_home: Option<PathBuf>,

    /// Category path to generate, e.g. "Java/Probable bugs" (repeatable)
    #[arg(long = "category", value_name = "PATH")]
    pub categories: Vec<CategoryPath>,

    /// Generate every category
    #[arg(long, conflicts_with = "categories")]
    pub all_categories: bool,
}

impl SourceArgs {
    /// The command-line layer, overriding every config file.
    fn overrides(&self) -> InspectgenConfig {
        InspectgenConfig {
            ide_home: self.ide_home.clone(),
            categories: (!self.categories.is_empty()).then(|| {
                self.categories
                    .iter()
                    .map(|path| path.segments().to_vec())
                    .collect()
            }),
            all_categories: self.all_categories.then_some(true),
            ..Default::default()
        }
    }

    /// Load every config layer, apply `extra` and the flags, and resolve.
    pub fn settings(&self, extra: InspectgenConfig) -> Result<Settings> {
        let root = std::env::current_dir().context("failed to determine working directory")?;
        InspectgenConfig::load(&root, self.config.as_deref())?
            .merge(extra)
            .merge(self.overrides())
            .resolve()
    }
}
