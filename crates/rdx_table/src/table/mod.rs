//! The ordered package-to-implementors mapping carried by every fragment.
//!
//! # Design
//!
//! - Entries live in a single `Vec` in insertion order; a `FxHashMap` holds
//!   `usize` indices into it for O(1) lookup by package name
//! - Re-inserting a package replaces its sequence in place, keeping the
//!   package's original position
//! - An empty sequence is a real entry ("checked, none found"), distinct from
//!   an absent package ("not checked")

use std::fmt;
use std::marker::PhantomData;

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Markup, PackageName};

/// Mapping from package name to that package's ordered implementor descriptors.
///
/// The descriptor type `D` is opaque payload; the table never inspects it.
#[derive(Clone)]
pub struct ImplementorTable<D = Markup> {
    /// `(package, descriptors)` in insertion order.
    entries: Vec<(PackageName, Vec<D>)>,

    /// Package name → index into `entries`.
    by_name: FxHashMap<PackageName, usize>,
}

impl<D> ImplementorTable<D> {
    pub fn new() -> Self {
        ImplementorTable {
            entries: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// Set `package`'s descriptors.
    ///
    /// Returns the previous sequence if the package was already present. The
    /// package keeps its original position in that case.
    pub fn insert(
        &mut self,
        package: impl Into<PackageName>,
        descriptors: Vec<D>,
    ) -> Option<Vec<D>> {
        let package = package.into();
        if let Some(&slot) = self.by_name.get(&package) {
            return Some(std::mem::replace(&mut self.entries[slot].1, descriptors));
        }

        self.by_name.insert(package.clone(), self.entries.len());
        self.entries.push((package, descriptors));
        None
    }

    /// Descriptors for `package`, or `None` if the package is absent.
    pub fn get(&self, package: &str) -> Option<&[D]> {
        self.by_name
            .get(package)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn contains_package(&self, package: &str) -> bool {
        self.by_name.contains_key(package)
    }

    /// Package names in insertion order.
    pub fn packages(&self) -> impl Iterator<Item = &PackageName> + '_ {
        self.entries.iter().map(|(package, _)| package)
    }

    /// `(package, descriptors)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &[D])> + '_ {
        self.entries
            .iter()
            .map(|(package, descriptors)| (package, descriptors.as_slice()))
    }

    /// Number of packages, including those with no implementors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of descriptors across all packages.
    pub fn implementor_count(&self) -> usize {
        self.entries.iter().map(|(_, descriptors)| descriptors.len()).sum()
    }

    /// Convert every descriptor, keeping package and descriptor order.
    pub fn map_descriptors<E>(self, mut f: impl FnMut(D) -> E) -> ImplementorTable<E> {
        ImplementorTable {
            entries: self
                .entries
                .into_iter()
                .map(|(package, descriptors)| {
                    (package, descriptors.into_iter().map(&mut f).collect())
                })
                .collect(),
            by_name: self.by_name,
        }
    }
}

impl<D> Default for ImplementorTable<D> {
    fn default() -> Self {
        Self::new()
    }
}

// Equality is deep and order-sensitive; `by_name` is derived from `entries`.
impl<D: PartialEq> PartialEq for ImplementorTable<D> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<D: Eq> Eq for ImplementorTable<D> {}

impl<D: fmt::Debug> fmt::Debug for ImplementorTable<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<PackageName>, D> FromIterator<(K, Vec<D>)> for ImplementorTable<D> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<D>)>>(iter: I) -> Self {
        let mut table = ImplementorTable::new();
        for (package, descriptors) in iter {
            table.insert(package, descriptors);
        }
        table
    }
}

impl<D> IntoIterator for ImplementorTable<D> {
    type Item = (PackageName, Vec<D>);
    type IntoIter = std::vec::IntoIter<(PackageName, Vec<D>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<D: Serialize> Serialize for ImplementorTable<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (package, descriptors) in &self.entries {
            map.serialize_entry(package, descriptors)?;
        }
        map.end()
    }
}

impl<'de, D: Deserialize<'de>> Deserialize<'de> for ImplementorTable<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

struct TableVisitor<D>(PhantomData<D>);

impl<'de, D: Deserialize<'de>> Visitor<'de> for TableVisitor<D> {
    type Value = ImplementorTable<D>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from package name to a list of implementors")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = ImplementorTable::new();
        while let Some((package, descriptors)) = access.next_entry::<PackageName, Vec<D>>()? {
            table.insert(package, descriptors);
        }
        Ok(table)
    }
}
