//! Kotlin settings model, appliers and Dagger wiring.
//!
//! Per group the renderer writes a data model under
//! `layout/editor/inspections/<folder>` and a group applier under
//! `applier/impl/editor/inspections/<folder>`. Across groups it writes the
//! Dagger modules under `dagger/project` and `dagger/inspections`.
//!
//! Per-inspection `*InspectionOptionsSettings.kt` files and the applier `BUILD`
//! are starting points meant to be hand-edited, so they are only created when
//! missing. A hand-written `*InspectionOptionsSettingsApplier.kt` next to the
//! group applier replaces the no-op binding for that inspection.

use super::bazel;
use crate::artifact::Artifact;
use crate::layout::Layout;
use crate::store::ArtifactStore;
use crate::traits::Renderer;
use inspectgen_core::{GenerationGroup, GenerationPlan, GroupIdents, NormalizedRecord};
use std::path::PathBuf;

const GENERATED: &str = "// Generated by inspectgen. Do not edit.\n\n";
const CUSTOMIZABLE: &str =
    "// Generated by inspectgen. Safe to edit: an existing file is never regenerated.\n\n";

/// Renders Kotlin sources plus Bazel `BUILD` files.
#[derive(Debug, Clone, Default)]
pub struct KotlinRenderer {
    layout: Layout,
}

impl KotlinRenderer {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Where a hand-written applier for `record` would live.
    pub fn custom_applier_path(&self, record: &NormalizedRecord) -> PathBuf {
        let package = self.layout.applier_package(record.group());
        self.layout
            .dir(&package)
            .join(format!("{}.kt", options_applier_class(record)))
    }

    fn options_settings(&self, record: &NormalizedRecord, package: &str) -> String {
        let mut out = file_start(CUSTOMIZABLE, package, &[]);
        out.push_str("/**\n");
        out.push_str(&format!(" * {}\n", kdoc(record.display_name())));
        out.push_str(" *\n");
        out.push_str(&format!(
            " * Inspection `{}` under {}.\n",
            kdoc(record.short_name()),
            kdoc(&record.path().to_string())
        ));
        out.push_str(" */\n");
        out.push_str(&format!("data class {}(\n", options_settings_class(record)));
        out.push_str("    val enabled: Boolean? = null,\n");
        out.push_str(")\n");
        out
    }

    fn group_settings(&self, group: &GenerationGroup, package: &str) -> String {
        let mut out = file_start(GENERATED, package, &[]);
        out.push_str(&format!(
            "/** Settings for the inspections under {}. */\n",
            kdoc(&group.path().to_string())
        ));
        out.push_str(&format!("data class {}(\n", group_settings_class(group.names())));
        for record in group.records() {
            out.push_str(&format!(
                "    val {}: {}? = null,\n",
                record.variable_name_prefix(),
                options_settings_class(record)
            ));
        }
        out.push_str(")\n");
        out
    }

    fn group_applier(&self, group: &GenerationGroup, package: &str, layout_package: &str) -> String {
        let names = group.names();
        let settings = group_settings_class(names);

        let mut imports = vec![
            format!("{}.SettingsApplier", self.layout.applier_api_package()),
            format!("{layout_package}.{settings}"),
            "javax.inject.Inject".to_string(),
        ];
        imports.extend(
            group
                .records()
                .iter()
                .map(|r| format!("{layout_package}.{}", options_settings_class(r))),
        );

        let mut out = file_start(GENERATED, package, &imports);
        out.push_str(&format!(
            "class {} @Inject constructor(\n",
            group_applier_class(names)
        ));
        for record in group.records() {
            out.push_str(&format!(
                "    private val {}Applier: SettingsApplier<{}>,\n",
                record.variable_name_prefix(),
                options_settings_class(record)
            ));
        }
        out.push_str(&format!(") : SettingsApplier<{settings}> {{\n\n"));
        out.push_str(&format!("    override fun apply(settings: {settings}) {{\n"));
        for record in group.records() {
            let var = record.variable_name_prefix();
            out.push_str(&format!("        settings.{var}?.let({var}Applier::apply)\n"));
        }
        out.push_str("    }\n");
        out.push_str("}\n");
        out
    }

    fn tools_impl_module(&self, plan: &GenerationPlan) -> String {
        let imports = [
            "dagger.Module",
            "dagger.Provides",
            "dagger.multibindings.ElementsIntoSet",
        ]
        .map(String::from);

        let mut out = file_start(GENERATED, &self.layout.dagger_project_package(), &imports);
        out.push_str("@Module\n");
        out.push_str("object ToolsImplModule {\n\n");
        out.push_str("    @Provides\n");
        out.push_str("    @ElementsIntoSet\n");
        out.push_str("    fun provideInspectionShortNames(): Set<String> = setOf(\n");
        for short_name in plan.short_names() {
            out.push_str(&format!("        {},\n", kotlin_string(short_name)));
        }
        out.push_str("    )\n");
        out.push_str("}\n");
        out
    }

    fn settings_applier_module(&self, plan: &GenerationPlan) -> String {
        let mut imports = vec![
            "dagger.Binds".to_string(),
            "dagger.Module".to_string(),
            format!("{}.SettingsApplier", self.layout.applier_api_package()),
        ];
        for group in plan.groups() {
            let names = group.names();
            imports.push(format!(
                "{}.{}",
                self.layout.layout_package(names),
                group_settings_class(names)
            ));
            imports.push(format!(
                "{}.{}",
                self.layout.applier_package(names),
                group_applier_class(names)
            ));
        }

        let mut out = file_start(GENERATED, &self.layout.dagger_project_package(), &imports);
        out.push_str("@Module\n");
        out.push_str("interface InspectionSettingsApplierModule {\n");
        for group in plan.groups() {
            let applier = group_applier_class(group.names());
            out.push('\n');
            out.push_str("    @Binds\n");
            out.push_str(&format!("    fun bind{applier}(\n"));
            out.push_str(&format!("        applier: {applier},\n"));
            out.push_str(&format!(
                "    ): SettingsApplier<{}>\n",
                group_settings_class(group.names())
            ));
        }
        out.push_str("}\n");
        out
    }

    fn no_op_module(&self, records: &[&NormalizedRecord]) -> String {
        let api = self.layout.applier_api_package();
        let mut imports = vec![
            "dagger.Module".to_string(),
            "dagger.Provides".to_string(),
            format!("{api}.NoOpSettingsApplier"),
            format!("{api}.SettingsApplier"),
        ];
        imports.extend(records.iter().map(|r| self.settings_import(r)));

        let mut out = file_start(GENERATED, &self.layout.dagger_inspections_package(), &imports);
        out.push_str("@Module\n");
        out.push_str("object NoOpInspectionOptionsSettingsApplierModule {\n");
        for record in records {
            out.push('\n');
            out.push_str("    @Provides\n");
            out.push_str(&format!(
                "    fun provide{}(): SettingsApplier<{}> = NoOpSettingsApplier()\n",
                options_applier_class(record),
                options_settings_class(record)
            ));
        }
        out.push_str("}\n");
        out
    }

    fn options_settings_applier(&self, plan: &GenerationPlan) -> String {
        let mut imports = vec![
            format!("{}.SettingsApplier", self.layout.applier_api_package()),
            "javax.inject.Inject".to_string(),
        ];
        imports.extend(plan.records().map(|r| self.settings_import(r)));

        let mut out = file_start(GENERATED, &self.layout.dagger_inspections_package(), &imports);
        out.push_str("/** Dispatches options settings of any generated inspection to its applier. */\n");
        out.push_str("class InspectionOptionsSettingsApplier @Inject constructor(\n");
        for record in plan.records() {
            out.push_str(&format!(
                "    private val {}Applier: SettingsApplier<{}>,\n",
                record.variable_name_prefix(),
                options_settings_class(record)
            ));
        }
        out.push_str(") {\n\n");
        out.push_str("    fun apply(settings: Any) {\n");
        out.push_str("        when (settings) {\n");
        for record in plan.records() {
            out.push_str(&format!(
                "            is {} -> {}Applier.apply(settings)\n",
                options_settings_class(record),
                record.variable_name_prefix()
            ));
        }
        out.push_str(
            "            else -> throw IllegalArgumentException(\"No applier for ${settings::class}\")\n",
        );
        out.push_str("        }\n");
        out.push_str("    }\n");
        out.push_str("}\n");
        out
    }

    fn settings_import(&self, record: &NormalizedRecord) -> String {
        format!(
            "{}.{}",
            self.layout.layout_package(record.group()),
            options_settings_class(record)
        )
    }
}

impl Renderer for KotlinRenderer {
    fn name(&self) -> &'static str {
        "kotlin"
    }

    fn render_group(&self, group: &GenerationGroup) -> Vec<Artifact> {
        let names = group.names();
        let layout_package = self.layout.layout_package(names);
        let layout_dir = self.layout.dir(&layout_package);
        let applier_package = self.layout.applier_package(names);
        let applier_dir = self.layout.dir(&applier_package);

        let mut artifacts = vec![Artifact::overwrite(
            layout_dir.join("BUILD"),
            bazel::layout_build(&names.build_rule),
        )];
        for record in group.records() {
            artifacts.push(Artifact::preserve_existing(
                layout_dir.join(format!("{}.kt", options_settings_class(record))),
                self.options_settings(record, &layout_package),
            ));
        }
        artifacts.push(Artifact::overwrite(
            layout_dir.join(format!("{}.kt", group_settings_class(names))),
            self.group_settings(group, &layout_package),
        ));
        artifacts.push(Artifact::preserve_existing(
            applier_dir.join("BUILD"),
            bazel::applier_build(
                &names.build_rule,
                &self.layout.label(&layout_package),
                &self.layout.label(&self.layout.applier_api_package()),
            ),
        ));
        artifacts.push(Artifact::overwrite(
            applier_dir.join(format!("{}.kt", group_applier_class(names))),
            self.group_applier(group, &applier_package, &layout_package),
        ));
        artifacts
    }

    fn render_all(&self, plan: &GenerationPlan, store: &dyn ArtifactStore) -> Vec<Artifact> {
        let project_dir = self.layout.dir(&self.layout.dagger_project_package());
        let inspections_dir = self.layout.dir(&self.layout.dagger_inspections_package());

        let no_op: Vec<&NormalizedRecord> = plan
            .records()
            .filter(|record| !store.exists(&self.custom_applier_path(record)))
            .collect();
        tracing::debug!(
            custom = plan.len() - no_op.len(),
            no_op = no_op.len(),
            "resolved inspection appliers"
        );

        vec![
            Artifact::overwrite(
                project_dir.join("ToolsImplModule.kt"),
                self.tools_impl_module(plan),
            ),
            Artifact::overwrite(
                project_dir.join("InspectionSettingsApplierModule.kt"),
                self.settings_applier_module(plan),
            ),
            Artifact::overwrite(
                inspections_dir.join("NoOpInspectionOptionsSettingsApplierModule.kt"),
                self.no_op_module(&no_op),
            ),
            Artifact::overwrite(
                inspections_dir.join("InspectionOptionsSettingsApplier.kt"),
                self.options_settings_applier(plan),
            ),
        ]
    }
}

// =============================================================================
// Names
// =============================================================================

fn options_settings_class(record: &NormalizedRecord) -> String {
    format!("{}InspectionOptionsSettings", record.class_name_prefix())
}

fn options_applier_class(record: &NormalizedRecord) -> String {
    format!("{}InspectionOptionsSettingsApplier", record.class_name_prefix())
}

fn group_settings_class(names: &GroupIdents) -> String {
    format!("{}InspectionsSettings", names.class_name_prefix)
}

fn group_applier_class(names: &GroupIdents) -> String {
    format!("{}InspectionsSettingsApplier", names.class_name_prefix)
}

// =============================================================================
// Kotlin text
// =============================================================================

fn file_start(header: &str, package: &str, imports: &[String]) -> String {
    let mut out = String::from(header);
    out.push_str(&format!("package {package}\n\n"));

    let mut imports: Vec<&str> = imports.iter().map(String::as_str).collect();
    imports.sort_unstable();
    imports.dedup();
    for import in &imports {
        out.push_str(&format!("import {import}\n"));
    }
    if !imports.is_empty() {
        out.push('\n');
    }
    out
}

/// Quote `text` as a Kotlin string literal.
pub fn kotlin_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Make `text` safe inside a KDoc block.
fn kdoc(text: &str) -> String {
    text.replace("*/", "*&#47;").replace('\n', " ")
}
