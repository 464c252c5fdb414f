//! Incremental merge of per-menu modules into the two aggregate files.
//!
//! The export index (`index.ts`) is merged textually: a module's export
//! lines are appended once, keyed by the presence of its interfaces
//! re-export, and only the timestamp line changes on later runs. The
//! global type declaration file (`types.d.ts`) is merged structurally:
//! existing import and namespace-member lines are parsed back out,
//! updated in place and re-rendered, so a renamed menu replaces its old
//! entry instead of accumulating a duplicate. Lines neither file format
//! knows about are preserved verbatim.
//!
//! Both merges are idempotent: merging the same module twice with the
//! same timestamp reproduces the file byte for byte.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use ytt_core::pascal_identifier;

pub const INDEX_HEADER: &str = "// Auto-generated API index";
pub const GLOBAL_TYPES_HEADER: &str = "// Auto-generated global API type declarations";

const NO_EDIT_LINE: &str = "// Do not edit this file by hand; it is rewritten on every run.";
const GENERATED_AT_PREFIX: &str = "// Generated at: ";

/// Merge one menu module into the export index content and return the
/// new content. An empty or blank `existing` starts a fresh index.
pub fn merge_module_into_index(
    existing: &str,
    menu_name: &str,
    stem: &str,
    generated_at: &str,
) -> String {
    let mut content = if existing.trim().is_empty() {
        format!("{INDEX_HEADER}\n{GENERATED_AT_PREFIX}{generated_at}\n{NO_EDIT_LINE}\n")
    } else if !existing.contains(INDEX_HEADER) {
        // Hand-started file: put the header on top, keep the rest
        let mut prefixed =
            format!("{INDEX_HEADER}\n{GENERATED_AT_PREFIX}{generated_at}\n{NO_EDIT_LINE}\n\n");
        prefixed.push_str(existing);
        prefixed
    } else {
        existing.to_string()
    };

    let signature = format!("export * from './{stem}/interfaces';");
    if !content.contains(&signature) {
        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&format!(
            "\n// Module: {menu_name}\n{signature}\nexport * from './{stem}/apis';\n"
        ));
    }

    stamp(&content, generated_at)
}

/// Replace the timestamp line, or insert one under the header when the
/// file has none.
fn stamp(content: &str, generated_at: &str) -> String {
    let stamp_line = format!("{GENERATED_AT_PREFIX}{generated_at}");
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

    if let Some(line) = lines
        .iter_mut()
        .find(|line| line.starts_with(GENERATED_AT_PREFIX))
    {
        *line = stamp_line;
    } else {
        lines.insert(1.min(lines.len()), stamp_line);
    }

    let mut out = lines.join("\n");
    if content.ends_with('\n') || content.is_empty() {
        out.push('\n');
    }
    out
}

static IMPORT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^import type \* as ([A-Za-z_][A-Za-z0-9_]*) from '([^']+)';$")
        .expect("valid regex")
});
static MEMBER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*export import ([A-Za-z_][A-Za-z0-9_]*) = ([A-Za-z_][A-Za-z0-9_]*);$")
        .expect("valid regex")
});
static NAMESPACE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*namespace [A-Za-z_][A-Za-z0-9_]* \{$").expect("valid regex"));

#[derive(Debug)]
struct GlobalTypeEntry {
    path: String,
    member: Option<String>,
}

/// Merge one menu module into the global type declaration content and
/// return the new content.
///
/// The module is keyed by its import alias (`{Stem}Types`); merging a
/// module whose stem is already present updates that entry's path and
/// namespace member in place.
pub fn merge_module_into_global_types(
    existing: &str,
    menu_name: &str,
    stem: &str,
    namespace: &str,
    generated_at: &str,
) -> String {
    let mut prefix: Vec<String> = Vec::new();
    let mut entries: IndexMap<String, GlobalTypeEntry> = IndexMap::new();
    // Brace depth inside the generated `declare global` block; hand-written
    // braces elsewhere in the file are content, not skeleton
    let mut skeleton_depth = 0usize;

    for line in existing.lines() {
        let trimmed = line.trim();

        if let Some(caps) = MEMBER_LINE.captures(line) {
            let alias = caps[2].to_string();
            if let Some(entry) = entries.get_mut(&alias) {
                entry.member = Some(caps[1].to_string());
                continue;
            }
        }

        if skeleton_depth > 0 {
            if NAMESPACE_OPEN.is_match(line) {
                skeleton_depth += 1;
            } else if trimmed == "}" {
                skeleton_depth -= 1;
            } else if !trimmed.is_empty() {
                prefix.push(line.to_string());
            }
            continue;
        }

        if trimmed == "declare global {" {
            skeleton_depth = 1;
            continue;
        }
        if trimmed.is_empty() || is_header_line(line) {
            continue;
        }
        if let Some(caps) = IMPORT_LINE.captures(line) {
            entries.insert(
                caps[1].to_string(),
                GlobalTypeEntry {
                    path: caps[2].to_string(),
                    member: None,
                },
            );
            continue;
        }
        prefix.push(line.to_string());
    }

    let alias = format!("{}Types", pascal_identifier(stem));
    entries.insert(
        alias,
        GlobalTypeEntry {
            path: format!("./{stem}/interfaces"),
            member: Some(pascal_identifier(menu_name)),
        },
    );

    render_global_types(&prefix, &entries, namespace, generated_at)
}

fn is_header_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed == GLOBAL_TYPES_HEADER
        || trimmed.starts_with(GENERATED_AT_PREFIX)
        || trimmed == NO_EDIT_LINE
}

fn render_global_types(
    prefix: &[String],
    entries: &IndexMap<String, GlobalTypeEntry>,
    namespace: &str,
    generated_at: &str,
) -> String {
    let mut out = format!(
        "{GLOBAL_TYPES_HEADER}\n{GENERATED_AT_PREFIX}{generated_at}\n{NO_EDIT_LINE}\n\n"
    );

    for line in prefix {
        out.push_str(line);
        out.push('\n');
    }
    if !prefix.is_empty() {
        out.push('\n');
    }

    for (alias, entry) in entries {
        out.push_str(&format!("import type * as {alias} from '{}';\n", entry.path));
    }

    out.push_str(&format!("\ndeclare global {{\n  namespace {namespace} {{\n"));
    for (alias, entry) in entries {
        if let Some(member) = &entry.member {
            out.push_str(&format!("    export import {member} = {alias};\n"));
        }
    }
    out.push_str("  }\n}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2024-01-01 00:00:00";

    #[test]
    fn test_index_fresh_file() {
        let content = merge_module_into_index("", "商店管理", "shangdianguanli", TS);
        assert!(content.starts_with(INDEX_HEADER));
        assert!(content.contains("// Generated at: 2024-01-01 00:00:00\n"));
        assert!(content.contains("// Module: 商店管理\n"));
        assert!(content.contains("export * from './shangdianguanli/interfaces';\n"));
        assert!(content.contains("export * from './shangdianguanli/apis';\n"));
    }

    #[test]
    fn test_index_merge_is_idempotent() {
        let once = merge_module_into_index("", "商店", "shangdian", TS);
        let twice = merge_module_into_index(&once, "商店", "shangdian", TS);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_index_appends_second_module() {
        let content = merge_module_into_index("", "商店", "shangdian", TS);
        let content = merge_module_into_index(&content, "用户", "yonghu", TS);
        assert!(content.contains("export * from './shangdian/interfaces';"));
        assert!(content.contains("export * from './yonghu/interfaces';"));
        let shop = content.find("// Module: 商店").unwrap();
        let user = content.find("// Module: 用户").unwrap();
        assert!(shop < user);
    }

    #[test]
    fn test_index_only_timestamp_changes_on_rerun() {
        let content = merge_module_into_index("", "商店", "shangdian", TS);
        let later = merge_module_into_index(&content, "商店", "shangdian", "2024-06-01 12:00:00");
        assert_eq!(
            content.replace(TS, "2024-06-01 12:00:00"),
            later
        );
        assert_eq!(later.matches("// Generated at:").count(), 1);
    }

    #[test]
    fn test_index_preserves_foreign_lines() {
        let existing = format!(
            "{INDEX_HEADER}\n// Generated at: old\n{NO_EDIT_LINE}\n\nexport {{ api }} from './handwritten';\n"
        );
        let content = merge_module_into_index(&existing, "商店", "shangdian", TS);
        assert!(content.contains("export { api } from './handwritten';\n"));
        assert!(content.contains("export * from './shangdian/interfaces';"));
    }

    #[test]
    fn test_global_types_fresh_file() {
        let content =
            merge_module_into_global_types("", "用户管理", "yonghuguanli", "YapiTypes", TS);
        assert!(content.starts_with(GLOBAL_TYPES_HEADER));
        assert!(content.contains(
            "import type * as YonghuguanliTypes from './yonghuguanli/interfaces';\n"
        ));
        assert!(content.contains("declare global {\n  namespace YapiTypes {\n"));
        assert!(content.contains("    export import YongHuGuanLi = YonghuguanliTypes;\n"));
        assert!(content.ends_with("  }\n}\n"));
    }

    #[test]
    fn test_global_types_merge_is_idempotent() {
        let once = merge_module_into_global_types("", "用户", "yonghu", "YapiTypes", TS);
        let twice = merge_module_into_global_types(&once, "用户", "yonghu", "YapiTypes", TS);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_global_types_accumulates_modules() {
        let content = merge_module_into_global_types("", "用户", "yonghu", "YapiTypes", TS);
        let content =
            merge_module_into_global_types(&content, "商店", "shangdian", "YapiTypes", TS);
        assert!(content.contains("import type * as YonghuTypes from './yonghu/interfaces';"));
        assert!(content.contains("import type * as ShangdianTypes from './shangdian/interfaces';"));
        assert!(content.contains("    export import YongHu = YonghuTypes;\n"));
        assert!(content.contains("    export import ShangDian = ShangdianTypes;\n"));
        assert_eq!(content.matches("declare global {").count(), 1);
    }

    #[test]
    fn test_global_types_replaces_entry_in_place() {
        let content = merge_module_into_global_types("", "旧菜单", "yonghu", "YapiTypes", TS);
        let content =
            merge_module_into_global_types(&content, "新菜单", "yonghu", "YapiTypes", TS);
        assert_eq!(
            content
                .matches("import type * as YonghuTypes from './yonghu/interfaces';")
                .count(),
            1
        );
        assert!(content.contains(&format!(
            "    export import {} = YonghuTypes;\n",
            pascal_identifier("新菜单")
        )));
        assert!(!content.contains(&pascal_identifier("旧菜单")));
    }

    #[test]
    fn test_index_headerless_existing_gains_header() {
        let existing = "export { api } from './handwritten';\n";
        let content = merge_module_into_index(existing, "商店", "shangdian", TS);
        assert!(content.starts_with(INDEX_HEADER));
        assert!(content.contains("export { api } from './handwritten';\n"));
        assert!(content.contains("export * from './shangdian/interfaces';"));
        assert_eq!(content.matches("// Generated at:").count(), 1);

        let twice = merge_module_into_index(&content, "商店", "shangdian", TS);
        assert_eq!(content, twice);
    }

    #[test]
    fn test_global_types_digit_leading_stem_stays_idempotent() {
        let once = merge_module_into_global_types("", "3D模型", "3dmoxing", "YapiTypes", TS);
        let twice = merge_module_into_global_types(&once, "3D模型", "3dmoxing", "YapiTypes", TS);
        let thrice = merge_module_into_global_types(&twice, "3D模型", "3dmoxing", "YapiTypes", TS);
        assert_eq!(once, twice);
        assert_eq!(twice, thrice);

        // Emitted names are valid identifiers even though the stem is not
        assert!(once.contains("import type * as DmoxingTypes from './3dmoxing/interfaces';"));
        assert!(once.contains("    export import DMoXing = DmoxingTypes;"));
        assert_eq!(once.matches("DmoxingTypes from").count(), 1);
    }

    #[test]
    fn test_global_types_keeps_hand_written_blocks() {
        let existing = "interface Foo {\n  a: string;\n}\n";
        let content = merge_module_into_global_types(existing, "用户", "yonghu", "YapiTypes", TS);
        assert!(content.contains("interface Foo {\n  a: string;\n}\n"));
        assert!(content.contains("import type * as YonghuTypes from './yonghu/interfaces';"));

        let twice = merge_module_into_global_types(&content, "用户", "yonghu", "YapiTypes", TS);
        assert_eq!(content, twice);
    }

    #[test]
    fn test_global_types_preserves_unknown_lines() {
        let existing = merge_module_into_global_types("", "用户", "yonghu", "YapiTypes", TS);
        let existing = existing.replace(
            "import type * as YonghuTypes",
            "// manual note\nimport type * as YonghuTypes",
        );
        let content =
            merge_module_into_global_types(&existing, "商店", "shangdian", "YapiTypes", TS);
        assert!(content.contains("// manual note\n"));
        // Unknown lines sit before the import block
        let note = content.find("// manual note").unwrap();
        let import = content.find("import type * as").unwrap();
        assert!(note < import);
    }
}
