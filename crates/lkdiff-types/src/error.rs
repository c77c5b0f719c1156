use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading a locale document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid UTF-8.
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The file is not well-formed JSON.
    #[error("{} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON root is something other than an object.
    #[error("{}: expected a JSON object at the root, found {found}", .path.display())]
    NotAMapping { path: PathBuf, found: &'static str },
}

/// Result alias for document loading.
pub type LoadResult<T> = Result<T, LoadError>;
