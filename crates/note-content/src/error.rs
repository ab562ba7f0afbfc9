//! Error types for note-content

/// Result type for note-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or rebuilding front matter
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No delimiter pair in the text: either no `---` line at all, or an
    /// opening delimiter with no closing one before end of text.
    #[error("front-matter block not found or missing closing delimiter")]
    BlockNotFound,

    /// The block parsed as YAML but to something other than a mapping.
    #[error("front-matter block is not a mapping (found {shape})")]
    NotAMapping { shape: &'static str },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
