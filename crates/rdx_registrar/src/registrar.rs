//! Fragment evaluation: build the table, then hand it off.

use rdx_table::{ImplementorTable, Markup};

use crate::ImplementorRegistry;

/// One generated unit of implementor data for a single trait.
pub trait Fragment {
    /// Opaque descriptor payload carried by the table.
    type Descriptor;

    /// Path of the trait whose implementors this fragment lists.
    fn trait_path(&self) -> &str;

    /// Assemble the fragment's table. Performs no validation of descriptors.
    fn build(&self) -> ImplementorTable<Self::Descriptor>;
}

/// How a fragment's table left the registrar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// The aggregator hook was called with the table.
    Delivered,
    /// No hook was present; the table is in the pending slot.
    Queued,
}

impl Delivery {
    #[inline]
    pub fn is_delivered(self) -> bool {
        self == Delivery::Delivered
    }
}

/// Evaluate `fragment` once against `registry`.
///
/// Exactly one of two things happens: the registry's hook is called with the
/// built table, or the table replaces the registry's pending slot.
#[tracing::instrument(level = "debug", skip_all, fields(trait_path = fragment.trait_path()))]
pub fn evaluate<F>(fragment: &F, registry: &ImplementorRegistry<F::Descriptor>) -> Delivery
where
    F: Fragment + ?Sized,
    F::Descriptor: 'static,
{
    let table = fragment.build();
    tracing::trace!(
        packages = table.len(),
        implementors = table.implementor_count(),
        "built implementor table"
    );

    if registry.try_deliver(table) {
        Delivery::Delivered
    } else {
        Delivery::Queued
    }
}

/// Fragment whose data is fixed at generation time.
///
/// `packages` pairs each package name with its pre-rendered descriptors, in
/// display order.
#[derive(Clone, Copy, Debug)]
pub struct StaticFragment {
    trait_path: &'static str,
    packages: &'static [(&'static str, &'static [&'static str])],
}

impl StaticFragment {
    pub const fn new(
        trait_path: &'static str,
        packages: &'static [(&'static str, &'static [&'static str])],
    ) -> Self {
        StaticFragment {
            trait_path,
            packages,
        }
    }
}

impl Fragment for StaticFragment {
    type Descriptor = Markup;

    fn trait_path(&self) -> &str {
        self.trait_path
    }

    fn build(&self) -> ImplementorTable {
        self.packages
            .iter()
            .map(|&(package, descriptors)| {
                (package, descriptors.iter().map(|&d| Markup::from(d)).collect::<Vec<_>>())
            })
            .collect()
    }
}

/// Fragment wrapping a table obtained at runtime (e.g. decoded from JSON).
#[derive(Clone, Debug)]
pub struct TableFragment<D = Markup> {
    trait_path: String,
    table: ImplementorTable<D>,
}

impl<D> TableFragment<D> {
    pub fn new(trait_path: impl Into<String>, table: ImplementorTable<D>) -> Self {
        TableFragment {
            trait_path: trait_path.into(),
            table,
        }
    }
}

impl<D: Clone> Fragment for TableFragment<D> {
    type Descriptor = D;

    fn trait_path(&self) -> &str {
        &self.trait_path
    }

    fn build(&self) -> ImplementorTable<D> {
        self.table.clone()
    }
}
