//! Generate command - render and write settings sources.

use super::SourceArgs;
use crate::config::InspectgenConfig;
use crate::pipeline;
use anyhow::{Context, Result};
use clap::Args;
use inspectgen_render::{FsStore, KotlinRenderer, Renderer, commit, preview};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory generated sources are written below
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Show what would be written or preserved without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let settings = args.source.settings(InspectgenConfig {
        output: args.output.clone(),
        ..Default::default()
    })?;
    let normalized = pipeline::normalize_sources(&settings)?;

    let renderer = KotlinRenderer::new(settings.layout.clone());
    let mut store = FsStore::new(&settings.output);
    let artifacts = renderer.render(&normalized.plan, &store);

    if args.dry_run {
        let report = preview(&artifacts, &store);
        for path in &report.written {
            println!("write    {}", path.display());
        }
        for path in &report.preserved {
            println!("preserve {}", path.display());
        }
        return Ok(());
    }

    let report = commit(&artifacts, &mut store)
        .with_context(|| format!("failed to write into {}", settings.output.display()))?;
    println!(
        "{} inspection(s) in {} group(s): wrote {} file(s), preserved {}",
        normalized.plan.len(),
        normalized.plan.groups().len(),
        report.written.len(),
        report.preserved.len()
    );
    Ok(())
}
