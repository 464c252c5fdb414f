//! Generation options.
//!
//! All knobs are carried in an explicit [`CodegenOptions`] value passed
//! into the core functions; there is no ambient configuration state.

use indexmap::IndexMap;
use ytt_config::Config;

/// Which path segments feed into derived names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamingScope {
    /// Use only the last non-empty segment (default; keeps names short,
    /// at the cost of possible collisions between sibling routes)
    #[default]
    LastSegment,
    /// Use every non-empty segment
    FullPath,
}

/// Options consumed by every stage of the generation pipeline.
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    /// Uppercase HTTP method -> lowercase function-name prefix
    pub method_prefixes: IndexMap<String, String>,

    /// Named type token -> TypeScript type literal, used on fallback
    /// paths that carry a type name instead of a schema
    pub type_mapping: IndexMap<String, String>,

    /// The two transport function names generated request functions call:
    /// first for GET, second for everything else
    pub transport_fns: [String; 2],

    /// Module specifier the transports are imported from in apis.ts
    pub request_fn_path: String,

    /// Namespace name in the global type declaration file
    pub global_namespace: String,

    /// Path segments used for name derivation
    pub naming_scope: NamingScope,

    /// Append the interface id to every derived name, not only on
    /// last-segment collisions
    pub always_append_id: bool,

    /// Emit doc-comment blocks above generated declarations
    pub generate_comments: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        let method_prefixes = [
            ("GET", "get"),
            ("POST", "post"),
            ("PUT", "put"),
            ("DELETE", "delete"),
            ("PATCH", "patch"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let type_mapping = [
            ("string", "string"),
            ("number", "number"),
            ("boolean", "boolean"),
            ("array", "any[]"),
            ("object", "any"),
            ("file", "File"),
            ("date", "string"),
            ("datetime", "string"),
            ("integer", "number"),
            ("float", "number"),
            ("double", "number"),
            ("long", "number"),
            ("short", "number"),
            ("byte", "number"),
            ("binary", "string"),
            ("password", "string"),
            ("email", "string"),
            ("url", "string"),
            ("uri", "string"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            method_prefixes,
            type_mapping,
            transport_fns: ["get".to_string(), "post".to_string()],
            request_fn_path: "./request".to_string(),
            global_namespace: "YapiTypes".to_string(),
            naming_scope: NamingScope::default(),
            always_append_id: false,
            generate_comments: true,
        }
    }
}

impl CodegenOptions {
    /// Build options from a loaded ytt.json, falling back to defaults for
    /// anything the config leaves unset.
    pub fn from_config(config: &Config) -> Self {
        let mut options = Self::default();

        if let Some(names) = &config.import_function_names
            && names.len() == 2
        {
            options.transport_fns = [names[0].clone(), names[1].clone()];
        }
        if !config.request_function_file_path.trim().is_empty() {
            options.request_fn_path = config.request_function_file_path.clone();
        }
        if let Some(prefixes) = &config.method_name_prefix {
            for (method, prefix) in prefixes {
                options
                    .method_prefixes
                    .insert(method.to_uppercase(), prefix.to_lowercase());
            }
        }
        if let Some(mapping) = &config.type_mapping {
            for (token, ty) in mapping {
                options.type_mapping.insert(token.to_lowercase(), ty.clone());
            }
        }
        if let Some(ns) = &config.global_namespace {
            options.global_namespace = ns.clone();
        }
        if let Some(append) = config.append_interface_id {
            options.always_append_id = append;
        }
        if let Some(comments) = config.generate_comments {
            options.generate_comments = comments;
        }

        options
    }

    /// Transport function used for the given HTTP method. Missing or
    /// blank methods count as GET, matching name derivation.
    pub fn transport_for(&self, method: &str) -> &str {
        let method = method.trim();
        if method.eq_ignore_ascii_case("get") || method.is_empty() {
            &self.transport_fns[0]
        } else {
            &self.transport_fns[1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes() {
        let options = CodegenOptions::default();
        assert_eq!(options.method_prefixes.get("GET").unwrap(), "get");
        assert_eq!(options.method_prefixes.get("PATCH").unwrap(), "patch");
    }

    #[test]
    fn test_default_type_mapping() {
        let options = CodegenOptions::default();
        assert_eq!(options.type_mapping.get("datetime").unwrap(), "string");
        assert_eq!(options.type_mapping.get("double").unwrap(), "number");
    }

    #[test]
    fn test_transport_for_method() {
        let options = CodegenOptions::default();
        assert_eq!(options.transport_for("GET"), "get");
        assert_eq!(options.transport_for("get"), "get");
        assert_eq!(options.transport_for("POST"), "post");
        assert_eq!(options.transport_for("DELETE"), "post");
        assert_eq!(options.transport_for(""), "get");
        assert_eq!(options.transport_for("  "), "get");
        assert_eq!(options.transport_for(" get "), "get");
    }

    #[test]
    fn test_from_config_overrides() {
        let config = ytt_config::Config::from_source(
            r#"{
                "outputPath": "src/api",
                "requestFunctionFilePath": "@/utils/request",
                "importFunctionNames": ["doGet", "doPost"],
                "methodNamePrefix": { "get": "Fetch" },
                "typeMapping": { "Money": "number" },
                "globalNamespace": "ShopApi"
            }"#,
            "ytt.json",
        )
        .unwrap();

        let options = CodegenOptions::from_config(&config);
        assert_eq!(options.transport_fns[0], "doGet");
        assert_eq!(options.request_fn_path, "@/utils/request");
        assert_eq!(options.method_prefixes.get("GET").unwrap(), "fetch");
        assert_eq!(options.type_mapping.get("money").unwrap(), "number");
        assert_eq!(options.global_namespace, "ShopApi");
    }
}
