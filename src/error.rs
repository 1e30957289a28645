//! Global error handling for promptclip
//!
//! Every failure in the pipeline is fatal, so a single error type carries
//! enough context for the top-level diagnostic.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for promptclip operations
#[derive(Error, Debug)]
pub enum PromptError {
    /// The root ancestor could not be computed or is not a directory
    #[error("Root not found: {0}")]
    RootNotFound(String),

    /// A listed file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A listed file does not lie under the root
    #[error("Path {} is not under root {}", .path.display(), .root.display())]
    PathContainment { path: PathBuf, root: PathBuf },

    /// A listed file is not valid UTF-8 text
    #[error("Failed to decode {} as UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// Any other read failure
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Tokenizer errors
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// JSON processing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Specialized Result type for promptclip operations
pub type Result<T> = std::result::Result<T, PromptError>;

/// Creates a PromptError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::PromptError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

impl PromptError {
    /// Map an IO error from reading `path` onto the matching variant
    pub fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::Io { path, source }
        }
    }
}
