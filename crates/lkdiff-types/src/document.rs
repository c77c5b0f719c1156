//! Locale documents: nested JSON mappings loaded from disk.
//!
//! A document is read in one shot, decoded as UTF-8 and parsed as JSON. Only
//! a JSON object is accepted at the root; everything below the root is kept
//! as-is, so arrays and scalars stay opaque values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{LoadError, LoadResult};

/// A parsed locale file whose root is a JSON object.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleDocument {
    source: PathBuf,
    entries: Map<String, Value>,
}

impl LocaleDocument {
    /// Load a locale document from `path`.
    ///
    /// The file is fully read and released before parsing starts.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let doc = Self::from_json_str(path, &text)?;
        debug!(path = %path.display(), entries = doc.entries.len(), "locale document loaded");
        Ok(doc)
    }

    /// Parse a locale document from in-memory JSON text.
    ///
    /// `path` is only used to name the document in reports and errors.
    pub fn from_json_str(path: impl Into<PathBuf>, text: &str) -> LoadResult<Self> {
        let path = path.into();
        let value = parse_value(text).map_err(|source| LoadError::Parse {
            path: path.clone(),
            source,
        })?;

        match value {
            Value::Object(entries) => Ok(Self {
                source: path,
                entries,
            }),
            other => Err(LoadError::NotAMapping {
                path,
                found: json_type_name(&other),
            }),
        }
    }

    /// The path (or label) this document was loaded from.
    pub fn name(&self) -> &Path {
        &self.source
    }

    /// The root mapping.
    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }
}

/// Parse JSON with no nesting limit. Recursion runs on a growable stack, and
/// numbers are kept as written so out-of-range literals still parse.
fn parse_value(text: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
