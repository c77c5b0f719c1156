//! Foundation types for lkdiff.
//!
//! This crate provides the data model shared by the flattener, the differ and
//! the command-line front end.
//!
//! # Key Types
//!
//! - [`LocaleDocument`] -- A loaded JSON locale file whose root is a mapping
//! - [`KeySet`] -- Ordered set of dot-joined leaf-key paths
//! - [`LoadError`] -- Why a locale file could not be loaded

pub mod document;
pub mod error;
pub mod keyset;

pub use document::LocaleDocument;
pub use error::{LoadError, LoadResult};
pub use keyset::KeySet;
