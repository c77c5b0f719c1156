//! Human-readable rendering of a [`KeyDiff`].
//!
//! ```text
//! Keys only in en.json:
//!   - nested.x
//!
//! Keys only in ar.json:
//!   - nested.y
//! ```

use std::fmt;

use lkdiff_types::KeySet;

use crate::key_diff::KeyDiff;

/// A key diff paired with the names of the two documents it came from.
#[derive(Clone, Debug)]
pub struct Report<'a> {
    first_name: String,
    second_name: String,
    diff: &'a KeyDiff,
}

impl<'a> Report<'a> {
    pub fn new(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        diff: &'a KeyDiff,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            second_name: second_name.into(),
            diff,
        }
    }

    /// Render the report, passing each section header through `heading`.
    ///
    /// Key lines are never styled.
    pub fn render(&self, heading: impl Fn(String) -> String) -> String {
        let mut out = String::new();
        push_section(
            &mut out,
            heading(format!("Keys only in {}:", self.first_name)),
            &self.diff.only_in_first,
        );
        out.push('\n');
        push_section(
            &mut out,
            heading(format!("Keys only in {}:", self.second_name)),
            &self.diff.only_in_second,
        );
        out
    }
}

fn push_section(out: &mut String, header: String, keys: &KeySet) {
    out.push_str(&header);
    out.push('\n');
    for key in keys {
        out.push_str("  - ");
        out.push_str(key);
        out.push('\n');
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|h| h))
    }
}
