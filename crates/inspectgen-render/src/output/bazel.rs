//! Bazel `BUILD` files for generated packages.

const KOTLIN_RULES: &str = "@io_bazel_rules_kotlin//kotlin:jvm.bzl";

fn library(name: &str, deps: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("load(\"{KOTLIN_RULES}\", \"kt_jvm_library\")\n\n"));
    out.push_str("kt_jvm_library(\n");
    out.push_str(&format!("    name = \"{name}\",\n"));
    out.push_str("    srcs = glob([\"*.kt\"]),\n");
    out.push_str("    visibility = [\"//visibility:public\"],\n");
    if !deps.is_empty() {
        out.push_str("    deps = [\n");
        for dep in deps {
            out.push_str(&format!("        \"{dep}\",\n"));
        }
        out.push_str("    ],\n");
    }
    out.push_str(")\n");
    out
}

/// `BUILD` for a group's settings data model.
pub fn layout_build(build_rule: &str) -> String {
    library(build_rule, &[])
}

/// `BUILD` for a group's appliers.
///
/// `layout` and `api` are the labels of the group's layout package and of the
/// applier API package.
pub fn applier_build(build_rule: &str, layout: &str, api: &str) -> String {
    let deps = vec![
        api.to_string(),
        layout.to_string(),
        "@maven//:javax_inject_javax_inject".to_string(),
    ];
    library(build_rule, &deps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_build_file() {
        insta::assert_snapshot!(layout_build("probable_bugs"), @r#"
        load("@io_bazel_rules_kotlin//kotlin:jvm.bzl", "kt_jvm_library")

        kt_jvm_library(
            name = "probable_bugs",
            srcs = glob(["*.kt"]),
            visibility = ["//visibility:public"],
        )
        "#);
    }

    #[test]
    fn applier_build_lists_deps() {
        let build = applier_build("probable_bugs", "//layout/java/probable_bugs", "//api");
        assert!(build.contains("    name = \"probable_bugs\",\n"));
        assert!(build.contains(
            "    deps = [\n        \"//api\",\n        \"//layout/java/probable_bugs\",\n"
        ));
    }
}
