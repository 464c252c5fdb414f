//! File writing for generated output.
//!
//! Writes go through a temp file in the target directory followed by a
//! rename, so a crash mid-write never leaves a truncated generated file.
//! If the rename fails (e.g., across filesystems) the write falls back to
//! a plain `fs::write`.

use std::{
    fs,
    io::Write as _,
    path::{Path, PathBuf},
};

use eyre::Result;

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// File existed and was replaced
    Updated,
    /// File was skipped (already exists and rules forbid overwrite)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }
}

/// A file to be written to disk
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Create a file that is only written when it does not exist yet
    pub fn if_missing(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules {
                overwrite: Overwrite::IfMissing,
            },
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        let existed = self.exists();
        match self.rules.overwrite {
            Overwrite::IfMissing if existed => Ok(WriteResult::Skipped),
            _ => {
                atomic_write(&self.path, &self.content)?;
                if existed {
                    Ok(WriteResult::Updated)
                } else {
                    Ok(WriteResult::Created)
                }
            }
        }
    }
}

/// Read a file, treating "not there yet" the same as empty content.
pub fn read_or_empty(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
    tmp.write_all(content.as_bytes())?;
    if tmp.persist(path).is_err() {
        fs::write(path, content)?;
    }
    Ok(())
}
