//! Configuration for the ytt code generator.
//!
//! Settings live in a `ytt.json` at the workspace root. Everything is
//! optional except the output directory and the request-function module
//! path; the generator falls back to documented defaults for the rest.
//!
//! ```json
//! {
//!   "outputPath": "src/api",
//!   "requestFunctionFilePath": "@/utils/request",
//!   "importFunctionNames": ["get", "post"]
//! }
//! ```

mod error;

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

pub use error::{Error, Result};

/// Parsed contents of ytt.json.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directory generated modules are written into, e.g. "src/api"
    pub output_path: String,

    /// Module the generated request functions import from,
    /// e.g. "@/utils/request"
    pub request_function_file_path: String,

    /// The two transport function names imported into generated apis.ts:
    /// first is used for GET, second for everything else.
    /// Defaults to ["get", "post"].
    pub import_function_names: Option<Vec<String>>,

    /// Overrides for the HTTP-method -> function-name-prefix mapping
    pub method_name_prefix: Option<IndexMap<String, String>>,

    /// Overrides for named-type-token -> TypeScript-type mapping
    pub type_mapping: Option<IndexMap<String, String>>,

    /// Name of the ambient namespace in the global type declaration file
    pub global_namespace: Option<String>,

    /// Always append the YAPI interface id to derived names
    pub append_interface_id: Option<bool>,

    /// Emit doc-comment blocks above generated declarations (default true)
    pub generate_comments: Option<bool>,
}

impl Config {
    /// Load and validate a ytt.json file.
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let filename = path.display().to_string();
        Self::from_source(&src, &filename)
    }

    /// Parse and validate config from raw JSON text.
    pub fn from_source(src: &str, filename: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(src).map_err(|e| Error::parse(e, src, filename))?;
        config.validate(src, filename)?;
        Ok(config)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let mut problems = Vec::new();

        if self.output_path.trim().is_empty() {
            problems.push("outputPath must not be empty");
        }
        if self.request_function_file_path.trim().is_empty() {
            problems.push("requestFunctionFilePath must not be empty");
        }
        if let Some(names) = &self.import_function_names
            && names.len() != 2
        {
            problems.push(
                "importFunctionNames must list exactly two functions (GET transport, then non-GET transport)",
            );
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(problems.join("\n"), src, filename))
        }
    }
}
