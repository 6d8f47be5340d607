use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting an API model from a header tree
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to read a header file
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// Syntax error in a prepared header
    #[error("Syntax error in {0}: {1}")]
    Syntax(PathBuf, String),

    /// The C front-end could not produce a tree at all
    #[error("Parse error in {0}: {1}")]
    Parse(PathBuf, String),

    /// A parameter node of a shape the extractor does not model
    #[error("Unsupported parameter construct in {0}:{1}: {2}")]
    UnsupportedParameter(PathBuf, usize, String),

    /// A documentation-region `#define` that fits neither accepted shape
    #[error("Malformed macro definition in {0}:{1}: {2}")]
    MalformedMacro(PathBuf, usize, String),
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
