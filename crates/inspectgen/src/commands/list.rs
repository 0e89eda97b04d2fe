//! List command - show normalized inspections.

use super::SourceArgs;
use crate::config::InspectgenConfig;
use crate::pipeline;
use anyhow::Result;
use clap::Args;
use inspectgen_core::GenerationPlan;

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs) -> Result<()> {
    let settings = args.source.settings(InspectgenConfig::default())?;
    let normalized = pipeline::normalize_sources(&settings)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&normalized.plan)?);
    } else {
        print!("{}", format_plan(&normalized.plan));
    }
    Ok(())
}

fn format_plan(plan: &GenerationPlan) -> String {
    let mut out = String::new();
    for group in plan.groups() {
        out.push_str(&format!("{} ({})\n", group.path(), group.names().package));
        for record in group.records() {
            out.push_str(&format!(
                "  {:<32} {:<40} {}\n",
                record.short_name(),
                record.class_name_prefix(),
                record.display_name()
            ));
        }
    }
    out
}
