//! Description sanitization for generated doc comments.
//!
//! YAPI descriptions are edited in a rich-text widget and arrive with
//! HTML markup and entities. Comments in generated code carry the plain
//! text only.

use std::sync::LazyLock;

use regex::Regex;

static BR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>(\r?\n)?").expect("valid regex"));
static BLOCK_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(p|div)>").expect("valid regex"));
static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a [^>]*>(.*?)</a>").expect("valid regex"));
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Strip HTML from a description and normalize it into trimmed plain-text
/// lines. `<br>` and closing block tags become newlines, anchors keep
/// their visible text, all other tags are dropped, and common entities
/// are decoded.
pub fn sanitize_comment(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let text = BR_TAG.replace_all(raw, "\n");
    let text = BLOCK_CLOSE.replace_all(&text, "\n");
    let text = ANCHOR.replace_all(&text, "$1");
    let text = ANY_TAG.replace_all(&text, "");
    let text = text
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Wrap text in a multi-line block comment, one ` * ` line per input
/// line, ending with a newline. Empty input produces no comment at all.
pub fn block_comment(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let body = text
        .lines()
        .map(|line| format!(" * {line}").trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    format!("/**\n{body}\n */\n")
}

/// Single-line `/** ... */` for field docs; newlines collapse to spaces.
pub(crate) fn inline_doc(text: &str) -> String {
    let flat = text.replace('\n', " ");
    let flat = flat.trim();
    if flat.is_empty() {
        String::new()
    } else {
        format!("/** {flat} */")
    }
}
