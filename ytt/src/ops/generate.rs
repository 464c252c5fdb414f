//! The generation pipeline: menus in, module directories plus the two
//! aggregate files out.
//!
//! Each non-empty menu becomes one directory under the output root with
//! `interfaces.ts`, `apis.ts` and `index.ts`. The root `index.ts` and
//! `types.d.ts` are read back first and merged, so modules generated by
//! earlier runs survive.

use std::collections::HashSet;
use std::path::Path;

use eyre::{Context, Result};
use ytt_codegen::{
    CodegenOptions, assemble_menu, merge_module_into_global_types, merge_module_into_index,
    render_apis_file, render_interfaces_file, render_module_index,
};
use ytt_core::{File, WriteResult, file_stem, read_or_empty};
use ytt_ir::MenuExport;

/// One generated menu module.
#[derive(Debug)]
pub struct ModuleReport {
    pub menu: String,
    pub stem: String,
    pub interfaces: usize,
}

/// What a generation run did.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub modules: Vec<ModuleReport>,
    pub created: usize,
    pub updated: usize,
}

/// Generate all modules for `menus` under `output`, merging into any
/// aggregates already on disk. Menus without interfaces are skipped; if
/// nothing is generated the aggregates are left untouched.
pub fn generate(
    menus: &[MenuExport],
    options: &CodegenOptions,
    output: &Path,
    generated_at: &str,
) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();
    let mut index = read_or_empty(&output.join("index.ts"));
    let mut types = read_or_empty(&output.join("types.d.ts"));
    let mut used_stems = HashSet::new();

    for menu in menus {
        if menu.list.is_empty() {
            continue;
        }
        let stem = unique_stem(&menu.name, &mut used_stems);
        let artifacts = assemble_menu(&menu.list, options);

        let dir = output.join(&stem);
        let files = [
            File::new(
                dir.join("interfaces.ts"),
                render_interfaces_file(&menu.name, &artifacts, generated_at),
            ),
            File::new(
                dir.join("apis.ts"),
                render_apis_file(&menu.name, &artifacts, options, generated_at),
            ),
            File::new(dir.join("index.ts"), render_module_index(&menu.name, generated_at)),
        ];
        for file in files {
            let result = file
                .write()
                .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?;
            report.tally(result);
        }

        index = merge_module_into_index(&index, &menu.name, &stem, generated_at);
        types = merge_module_into_global_types(
            &types,
            &menu.name,
            &stem,
            &options.global_namespace,
            generated_at,
        );

        report.modules.push(ModuleReport {
            menu: menu.name.clone(),
            stem,
            interfaces: artifacts.len(),
        });
    }

    if !report.modules.is_empty() {
        for (name, content) in [("index.ts", index), ("types.d.ts", types)] {
            let file = File::new(output.join(name), content);
            let result = file
                .write()
                .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?;
            report.tally(result);
        }
    }

    Ok(report)
}

impl GenerationReport {
    fn tally(&mut self, result: WriteResult) {
        match result {
            WriteResult::Created => self.created += 1,
            WriteResult::Updated => self.updated += 1,
            WriteResult::Skipped => {}
        }
    }
}

/// Directory stem for a menu name: transliterated, lowered, restricted
/// to filename-safe characters, and made unique within the run.
fn unique_stem(name: &str, used: &mut HashSet<String>) -> String {
    let mut stem: String = file_stem(name)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    stem = stem.to_lowercase();
    if stem.is_empty() {
        stem = "module".to_string();
    }

    let mut candidate = stem.clone();
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{stem}{n}");
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use ytt_ir::{InterfaceDescriptor, ParamDescriptor};

    use super::*;

    const TS: &str = "2024-01-01 00:00:00";

    fn menu(name: &str, path: &str) -> MenuExport {
        MenuExport {
            name: name.to_string(),
            desc: String::new(),
            list: vec![InterfaceDescriptor {
                id: 1,
                title: "列表".to_string(),
                path: path.to_string(),
                method: "GET".to_string(),
                req_query: vec![ParamDescriptor {
                    name: "page".to_string(),
                    required: "1".to_string(),
                    desc: String::new(),
                    example: "1".to_string(),
                }],
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_generates_module_tree() {
        let temp = TempDir::new().unwrap();
        let menus = vec![menu("商店管理", "/api/shop/list"), menu("用户", "/api/user/list")];

        let report = generate(&menus, &CodegenOptions::default(), temp.path(), TS).unwrap();

        assert_eq!(report.modules.len(), 2);
        assert_eq!(report.modules[0].stem, "shangdianguanli");
        // 3 files per module + 2 aggregates
        assert_eq!(report.created, 8);
        assert_eq!(report.updated, 0);

        for file in ["interfaces.ts", "apis.ts", "index.ts"] {
            assert!(temp.path().join("shangdianguanli").join(file).exists());
            assert!(temp.path().join("yonghu").join(file).exists());
        }
        let index = fs::read_to_string(temp.path().join("index.ts")).unwrap();
        assert!(index.contains("export * from './shangdianguanli/interfaces';"));
        assert!(index.contains("export * from './yonghu/interfaces';"));
        let types = fs::read_to_string(temp.path().join("types.d.ts")).unwrap();
        assert!(types.contains("export import ShangDianGuanLi = ShangdianguanliTypes;"));
    }

    #[test]
    fn test_rerun_converges() {
        let temp = TempDir::new().unwrap();
        let menus = vec![menu("商店", "/api/shop/list")];
        let options = CodegenOptions::default();

        generate(&menus, &options, temp.path(), TS).unwrap();
        let first = fs::read_to_string(temp.path().join("index.ts")).unwrap();

        let report = generate(&menus, &options, temp.path(), TS).unwrap();
        let second = fs::read_to_string(temp.path().join("index.ts")).unwrap();

        assert_eq!(first, second);
        assert_eq!(report.created, 0);
        assert_eq!(report.updated, 5);
    }

    #[test]
    fn test_later_run_keeps_earlier_modules() {
        let temp = TempDir::new().unwrap();
        let options = CodegenOptions::default();

        generate(&[menu("商店", "/api/shop/list")], &options, temp.path(), TS).unwrap();
        generate(&[menu("用户", "/api/user/list")], &options, temp.path(), TS).unwrap();

        let index = fs::read_to_string(temp.path().join("index.ts")).unwrap();
        assert!(index.contains("export * from './shangdian/interfaces';"));
        assert!(index.contains("export * from './yonghu/interfaces';"));
    }

    #[test]
    fn test_duplicate_menu_names_get_distinct_stems() {
        let temp = TempDir::new().unwrap();
        let menus = vec![menu("商店", "/api/a/list"), menu("商店", "/api/b/list")];

        let report = generate(&menus, &CodegenOptions::default(), temp.path(), TS).unwrap();

        assert_eq!(report.modules[0].stem, "shangdian");
        assert_eq!(report.modules[1].stem, "shangdian2");
        assert!(temp.path().join("shangdian2").join("apis.ts").exists());
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let menus = vec![MenuExport::default()];

        let report = generate(&menus, &CodegenOptions::default(), temp.path(), TS).unwrap();

        assert!(report.modules.is_empty());
        assert_eq!(report.created, 0);
        assert!(!temp.path().join("index.ts").exists());
    }
}
