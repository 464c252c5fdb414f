//! Name derivation for generated symbols.
//!
//! A function name is derived from the HTTP method and the request path:
//! `GET /api/shop/V3/shopPopList` -> `getShopPopList` (last segment
//! only by default). The paired type names strip the method prefix and
//! capitalize: `ShopPopListParams` / `ShopPopListResponse`.
//!
//! Derivation is deterministic. Routes whose last segments collide (e.g.
//! `/shopA/list` and `/shopB/list`) produce identical names unless the
//! interface id is appended; batch assembly opts into the id suffix for
//! exactly those interfaces.

use crate::{CodegenOptions, NamingScope};

/// Names derived for one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// Request function name, e.g. "getShopList"
    pub function_name: String,
    /// Function name minus its method prefix, capitalized, e.g. "ShopList"
    pub type_base: String,
    /// Parameter interface name, e.g. "ShopListParams"
    pub params_type: String,
    /// Response interface name, e.g. "ShopListResponse"
    pub response_type: String,
}

/// Derive all generated names for one interface.
///
/// `with_id` forces the numeric id suffix; it is also applied when
/// `options.always_append_id` is set. An empty path yields just the
/// method prefix; an empty or unmapped method falls back to `get`.
pub fn derive_names(
    method: &str,
    path: &str,
    id: u64,
    with_id: bool,
    options: &CodegenOptions,
) -> DerivedNames {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let picked: &[&str] = match options.naming_scope {
        NamingScope::LastSegment if segments.len() > 1 => &segments[segments.len() - 1..],
        _ => &segments,
    };

    let mut function_name = method_prefix(method, options);
    for segment in picked {
        function_name.push_str(&pascal_segment(segment));
    }
    if with_id || options.always_append_id {
        function_name.push_str(&id.to_string());
    }

    let type_base = strip_method_prefix(&function_name, options);
    let params_type = format!("{type_base}Params");
    let response_type = format!("{type_base}Response");

    DerivedNames {
        function_name,
        type_base,
        params_type,
        response_type,
    }
}

/// Lowercased prefix for the method, defaulting to "get" for unknown or
/// missing methods.
fn method_prefix(method: &str, options: &CodegenOptions) -> String {
    options
        .method_prefixes
        .get(&method.trim().to_uppercase())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_lowercase())
        .unwrap_or_else(|| "get".to_string())
}

/// Clean one path segment into a PascalCase word: characters outside
/// `[A-Za-z0-9_-]` are dropped, `-`/`_` start a new uppercase letter,
/// leading digits are stripped, and the first letter is capitalized.
fn pascal_segment(segment: &str) -> String {
    let mut out = String::new();
    let mut upper_next = false;
    for c in segment.chars() {
        if c == '-' || c == '_' {
            upper_next = true;
            continue;
        }
        if !c.is_ascii_alphanumeric() {
            continue;
        }
        if out.is_empty() && c.is_ascii_digit() {
            continue;
        }
        if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    let mut chars = out.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

/// Remove the longest configured method prefix from the front of a
/// function name and capitalize what remains.
fn strip_method_prefix(function_name: &str, options: &CodegenOptions) -> String {
    let longest = options
        .method_prefixes
        .values()
        .filter(|p| function_name.starts_with(p.as_str()))
        .map(|p| p.len())
        .max()
        .unwrap_or(0);

    let rest = &function_name[longest..];
    let mut chars = rest.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}
