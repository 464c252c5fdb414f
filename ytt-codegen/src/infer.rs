//! Heuristic type inference for query parameters.
//!
//! YAPI query parameters carry no schema, only an example value and a
//! free-text description. The inference below is best-effort with a
//! documented precedence; a numeric-looking string that is semantically
//! an identifier will still come out as `number`.

use indexmap::IndexMap;
use serde_json::Value;

/// Infer a TypeScript type literal for a parameter.
///
/// Precedence, first match wins:
/// 1. example is `true`/`false` (any case) -> `boolean`
/// 2. example is a signed integer/decimal -> `number`
/// 3. example parses strictly as a JSON array/object -> element/map type
/// 4. example parses as a calendar date or datetime -> `string`
/// 5. description keywords (English and Chinese families)
/// 6. `string`
pub fn infer_param_type(example: &str, desc: &str) -> String {
    if let Some(ty) = infer_from_example(example) {
        return ty;
    }
    if let Some(ty) = infer_from_desc(desc) {
        return ty;
    }
    "string".to_string()
}

fn infer_from_example(example: &str) -> Option<String> {
    let ex = example.trim();
    if ex.is_empty() {
        return None;
    }

    if ex.eq_ignore_ascii_case("true") || ex.eq_ignore_ascii_case("false") {
        return Some("boolean".to_string());
    }

    if is_numeric_literal(ex) {
        return Some("number".to_string());
    }

    let json_shaped = (ex.starts_with('[') && ex.ends_with(']'))
        || (ex.starts_with('{') && ex.ends_with('}'));
    if json_shaped && let Ok(value) = serde_json::from_str::<Value>(ex) {
        return Some(match value {
            Value::Array(items) => match items.first() {
                Some(first) => format!("{}[]", json_value_type(first)),
                None => "any[]".to_string(),
            },
            _ => "Record<string, any>".to_string(),
        });
    }

    if looks_like_date(ex) {
        return Some("string".to_string());
    }

    None
}

/// Signed integer or decimal: `-?\d+(\.\d+)?`
fn is_numeric_literal(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    if s.is_empty() {
        return false;
    }
    let mut parts = s.splitn(2, '.');
    let int = parts.next().unwrap_or("");
    let frac = parts.next();
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

fn looks_like_date(s: &str) -> bool {
    if chrono::DateTime::parse_from_rfc3339(s).is_ok() {
        return true;
    }
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"];
    if DATETIME_FORMATS
        .iter()
        .any(|f| chrono::NaiveDateTime::parse_from_str(s, f).is_ok())
    {
        return true;
    }
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
    DATE_FORMATS
        .iter()
        .any(|f| chrono::NaiveDate::parse_from_str(s, f).is_ok())
}

fn json_value_type(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Array(_) => "any[]",
        Value::Object(_) => "Record<string, any>",
        Value::Null => "any",
    }
}

fn infer_from_desc(desc: &str) -> Option<String> {
    if desc.trim().is_empty() {
        return None;
    }
    let text = desc.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    if matches(&["bool", "布尔"]) {
        return Some("boolean".to_string());
    }
    if matches(&["int", "浮点", "数字", "number", "数值", "整型", "整数"]) {
        return Some("number".to_string());
    }
    if matches(&["array", "列表", "数组"]) {
        return Some("any[]".to_string());
    }
    if matches(&["object", "对象", "json"]) {
        return Some("Record<string, any>".to_string());
    }
    if matches(&["date", "时间", "日期", "timestamp"]) {
        return Some("string".to_string());
    }
    None
}

/// Translate a named type token (from non-schema fallback paths) through
/// the configured mapping table.
///
/// Handles `array`-suffixed tokens, `[]`-suffixed tokens and `|` unions;
/// anything unmapped becomes `any`.
pub fn map_named_type(token: &str, table: &IndexMap<String, String>) -> String {
    let trimmed = token.trim();
    if let Some(mapped) = table.get(&trimmed.to_lowercase()) {
        return mapped.clone();
    }

    if let Some(base) = trimmed.to_lowercase().strip_suffix("array") {
        let base = base.trim();
        let mapped = table.get(base).cloned().unwrap_or_else(|| "any".to_string());
        return format!("{mapped}[]");
    }

    if trimmed.contains("[]") {
        let base = trimmed.replace("[]", "");
        let mapped = table
            .get(&base.trim().to_lowercase())
            .cloned()
            .unwrap_or_else(|| "any".to_string());
        return format!("{mapped}[]");
    }

    if trimmed.contains('|') {
        return trimmed
            .split('|')
            .map(|t| map_named_type(t, table))
            .collect::<Vec<_>>()
            .join(" | ");
    }

    "any".to_string()
}
