//! Core utilities for the ytt YAPI code generator.
//!
//! This crate provides the string helpers and the file-writer used across
//! the ytt workspace: case conversions, CJK-to-pinyin transliteration for
//! identifiers and file stems, and atomic file writes.

mod file;
mod translit;
mod utils;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult, read_or_empty};
// Transliteration
pub use translit::{file_stem, pascal_identifier, transliterate};
// String utilities
pub use utils::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
