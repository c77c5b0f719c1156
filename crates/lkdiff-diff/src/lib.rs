//! Diff engine for lkdiff.
//!
//! Flattens nested locale documents into dot-joined leaf keys, computes the
//! keys exclusive to each side, and renders the human-readable report.
//!
//! # Key Types
//!
//! - [`flatten`] / [`flatten_document`] -- Nested mapping to [`KeySet`](lkdiff_types::KeySet)
//! - [`KeyDiff`] -- Keys present on only one side
//! - [`Report`] -- Text rendering of a [`KeyDiff`]

pub mod flatten;
pub mod key_diff;
pub mod report;

pub use flatten::{flatten, flatten_document};
pub use key_diff::{diff_key_sets, KeyDiff};
pub use report::Report;
