//! Output of the content assembler.

/// A named block of generated TypeScript source.
///
/// Artifacts are immutable once produced; whole-file renderers only ever
/// concatenate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Symbol the block declares (function name or interface base name)
    pub name: String,
    /// Source text of the block
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
