//! Paths of the traits whose implementors a fragment lists.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{Result, TableError};

/// Directory under the documentation root that holds implementor fragments.
const FRAGMENT_ROOT: &str = "implementors";

/// A `::`-separated trait path such as `core::default::Default`.
///
/// Every segment is a plain identifier; generic arguments are not part of the
/// path since one fragment covers all instantiations of a trait.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TraitPath {
    segments: Vec<String>,
}

impl TraitPath {
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        if path.is_empty() {
            return Err(TableError::EmptyTraitPath);
        }

        let segments = path
            .split("::")
            .map(|segment| {
                if is_identifier(segment) {
                    Ok(segment.to_owned())
                } else {
                    Err(TableError::InvalidSegment {
                        path: path.to_owned(),
                        segment: segment.to_owned(),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TraitPath { segments })
    }

    /// The trait's own name (last segment).
    pub fn name(&self) -> &str {
        // `parse` guarantees at least one segment.
        self.segments.last().map_or("", String::as_str)
    }

    /// Module segments leading up to the trait name.
    pub fn module(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }

    /// Location of this trait's fragment relative to the documentation root.
    ///
    /// `core::default::Default` maps to `implementors/core/default/trait.Default.js`.
    pub fn fragment_path(&self) -> PathBuf {
        let mut path = PathBuf::from(FRAGMENT_ROOT);
        path.extend(self.module());
        path.push(format!("trait.{}.js", self.name()));
        path
    }
}

impl FromStr for TraitPath {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        TraitPath::parse(s)
    }
}

impl fmt::Display for TraitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("::"))
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;
