//! JSON-Schema to TypeScript type-literal translation.
//!
//! YAPI response bodies are usually JSON Schema describing an
//! `{errcode, errmsg, data}` envelope; only `data` is interesting to
//! callers, so translation unwraps it. Every malformed input degrades to
//! a permissive type instead of failing: generation never throws on a
//! weird body.

use serde_json::Value;

use crate::{CodegenOptions, assemble::ensure_valid_property_name, comment};

/// Translate a raw response body into the field block of a response
/// interface (the text between the braces, indented two spaces).
///
/// - body is not valid JSON -> commented `data?: any` fallback
/// - JSON-Schema-shaped root with a `properties.data` sub-schema -> the
///   `data` schema's fields (envelope unwrapped)
/// - anything else -> open index signature
pub fn translate_response_body(raw: &str, options: &CodegenOptions) -> String {
    match serde_json::from_str::<Value>(raw) {
        Err(_) => "  // response body is not valid JSON\n  data?: any;\n".to_string(),
        Ok(root) => {
            if is_json_schema(&root)
                && let Some(data) = root.get("properties").and_then(|p| p.get("data"))
            {
                return fields_from_schema(data, "  ", options);
            }
            "  [key: string]: any;\n".to_string()
        }
    }
}

/// A node is JSON-Schema-shaped when it carries any of the structural
/// schema keys.
fn is_json_schema(value: &Value) -> bool {
    value.is_object()
        && ["$schema", "type", "properties", "items"]
            .iter()
            .any(|key| value.get(key).is_some())
}

/// Translate one schema node into a TypeScript type literal, possibly a
/// multi-line inline object. Recursion depth follows the schema's depth;
/// `serde_json::Value` trees cannot be cyclic.
pub fn schema_to_type(schema: &Value, indent: &str, options: &CodegenOptions) -> String {
    let kind = match schema.get("type").and_then(Value::as_str) {
        Some(t) => Some(t.to_string()),
        None if schema.get("properties").is_some() => Some("object".to_string()),
        None if schema.get("items").is_some() => Some("array".to_string()),
        None => None,
    };

    match kind.as_deref() {
        Some("object") => {
            let inner = fields_from_schema(schema, &format!("{indent}  "), options);
            format!("{{\n{inner}{indent}  }}")
        }
        Some("array") => {
            let items = schema.get("items").cloned().unwrap_or(Value::Null);
            let item_type = schema_to_type(&items, &format!("{indent}  "), options);
            format!("{item_type}[]")
        }
        Some(primitive) => options
            .type_mapping
            .get(&primitive.to_lowercase())
            .cloned()
            .unwrap_or_else(|| "any".to_string()),
        None => "any".to_string(),
    }
}

/// Emit one `name?: type;` line per property of an object schema, with a
/// sanitized doc comment above documented fields. A schema without
/// properties stays permissive via an index signature.
pub(crate) fn fields_from_schema(schema: &Value, indent: &str, options: &CodegenOptions) -> String {
    let properties = schema.get("properties").and_then(Value::as_object);
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let Some(properties) = properties.filter(|p| !p.is_empty()) else {
        return format!("{indent}[key: string]: any;\n");
    };

    let mut out = String::new();
    for (key, prop) in properties {
        let safe_key = ensure_valid_property_name(key);
        let optional = if required.contains(&key.as_str()) {
            ""
        } else {
            "?"
        };
        let ty = schema_to_type(prop, indent, options);

        if let Some(desc) = prop.get("description").and_then(Value::as_str) {
            let doc = comment::inline_doc(&comment::sanitize_comment(desc));
            if !doc.is_empty() {
                out.push_str(&format!("{indent}{doc}\n"));
            }
        }
        out.push_str(&format!("{indent}{safe_key}{optional}: {ty};\n"));
    }
    out
}
