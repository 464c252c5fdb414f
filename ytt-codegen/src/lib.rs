//! TypeScript code generation core for the ytt YAPI generator.
//!
//! The pipeline turns one YAPI interface descriptor into a pair of text
//! artifacts (a type-declaration block and a request-function block) and
//! merges per-menu modules into two aggregate files: a project export
//! index and a global ambient-type declaration file.
//!
//! Everything here is pure, synchronous string transformation: no I/O,
//! no clock, no panics on malformed input. Bad schemas and unparseable
//! response bodies degrade to permissive fallback types instead of
//! failing, so generation always produces plausible output.
//!
//! ```
//! use ytt_codegen::{CodegenOptions, assemble};
//! use ytt_ir::InterfaceDescriptor;
//!
//! let options = CodegenOptions::default();
//! let iface = InterfaceDescriptor {
//!     id: 1,
//!     title: "Shop list".into(),
//!     path: "/api/shop/shopList".into(),
//!     method: "GET".into(),
//!     ..Default::default()
//! };
//! let artifacts = assemble(&iface, false, &options);
//! assert!(artifacts.api.content.contains("getShopList"));
//! ```

mod assemble;
mod comment;
mod infer;
mod merge;
mod naming;
mod options;
mod schema;

pub use assemble::{
    Artifacts, assemble, assemble_menu, ensure_valid_property_name, render_apis_file,
    render_interfaces_file, render_module_index, sanitize_property_key,
    transport_config_type_name,
};
pub use comment::{block_comment, sanitize_comment};
pub use infer::{infer_param_type, map_named_type};
pub use merge::{
    GLOBAL_TYPES_HEADER, INDEX_HEADER, merge_module_into_global_types, merge_module_into_index,
};
pub use naming::{DerivedNames, derive_names};
pub use options::{CodegenOptions, NamingScope};
pub use schema::{schema_to_type, translate_response_body};
