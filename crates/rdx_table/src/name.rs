//! Package keys and the default descriptor payload.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a documented package; the unique key of an [`ImplementorTable`].
///
/// [`ImplementorTable`]: crate::ImplementorTable
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Self {
        PackageName(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageName {
    fn from(name: &str) -> Self {
        PackageName(name.to_owned())
    }
}

impl From<String> for PackageName {
    fn from(name: String) -> Self {
        PackageName(name)
    }
}

// Hash of the newtype equals hash of the inner `str`, so map lookups by `&str` work.
impl Borrow<str> for PackageName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Pre-rendered markup describing one implementor.
///
/// Produced by the documentation generator and passed through untouched:
/// empty or malformed markup is carried as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn new(markup: impl Into<String>) -> Self {
        Markup(markup.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Markup {
    fn from(markup: &str) -> Self {
        Markup(markup.to_owned())
    }
}

impl From<String> for Markup {
    fn from(markup: String) -> Self {
        Markup(markup)
    }
}
