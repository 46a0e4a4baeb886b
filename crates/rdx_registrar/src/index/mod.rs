//! Page-wide aggregation of the tables delivered by fragments.
//!
//! An [`ImplementorIndex`] attaches to a registry as its hook and flattens
//! every table it receives into rows, in arrival order. Rows for the page's
//! own package are skipped: the page already renders those statically.
//!
//! Tables naming the same package are appended, not overwritten. This is the
//! index's policy; the registry itself never merges.
//!
//! Every package a table names is remembered even when its sequence is empty,
//! so "checked, none found" stays distinct from "never reported".

use std::sync::Arc;

use parking_lot::Mutex;
use rdx_table::{ImplementorTable, Markup, PackageName};

use crate::ImplementorRegistry;

/// One implementor as collected by the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexRow<D = Markup> {
    pub package: PackageName,
    pub descriptor: D,
}

#[derive(Debug)]
struct IndexState<D> {
    rows: Vec<IndexRow<D>>,
    /// Packages reported by any table, in first-seen order.
    packages: Vec<PackageName>,
    tables_received: usize,
}

/// Aggregator collecting implementor rows from any number of fragments.
///
/// Clones share the same collected state.
#[derive(Debug)]
pub struct ImplementorIndex<D = Markup> {
    local_package: Option<PackageName>,
    state: Arc<Mutex<IndexState<D>>>,
}

impl<D: Send + 'static> ImplementorIndex<D> {
    pub fn new() -> Self {
        ImplementorIndex {
            local_package: None,
            state: Arc::new(Mutex::new(IndexState {
                rows: Vec::new(),
                packages: Vec::new(),
                tables_received: 0,
            })),
        }
    }

    /// Index for a page belonging to `package`, whose own rows are skipped.
    pub fn for_package(package: impl Into<PackageName>) -> Self {
        ImplementorIndex {
            local_package: Some(package.into()),
            ..Self::new()
        }
    }

    pub fn local_package(&self) -> Option<&PackageName> {
        self.local_package.as_ref()
    }

    /// Become `registry`'s hook, collecting any table already pending.
    ///
    /// Returns `true` if a pending table was collected.
    pub fn attach(&self, registry: &ImplementorRegistry<D>) -> bool {
        let state = Arc::clone(&self.state);
        let local = self.local_package.clone();
        registry.install_hook(move |table| collect(&state, local.as_ref(), table))
    }

    /// Collect `table` directly, bypassing any registry.
    pub fn record(&self, table: ImplementorTable<D>) {
        collect(&self.state, self.local_package.as_ref(), table);
    }

    pub fn tables_received(&self) -> usize {
        self.state.lock().tables_received
    }

    /// Number of collected rows.
    pub fn len(&self) -> usize {
        self.state.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().rows.is_empty()
    }

    /// Packages reported so far, in first-seen order, including those with no
    /// implementors. The local package is never listed.
    pub fn packages(&self) -> Vec<PackageName> {
        self.state.lock().packages.clone()
    }

    /// Whether any table has reported `package`, even with no implementors.
    pub fn checked(&self, package: &str) -> bool {
        self.state
            .lock()
            .packages
            .iter()
            .any(|seen| seen.as_str() == package)
    }

    /// Snapshot of all rows in arrival order.
    pub fn rows(&self) -> Vec<IndexRow<D>>
    where
        D: Clone,
    {
        self.state.lock().rows.clone()
    }

    /// Descriptors collected for `package`, in arrival order.
    pub fn rows_for(&self, package: &str) -> Vec<D>
    where
        D: Clone,
    {
        self.state
            .lock()
            .rows
            .iter()
            .filter(|row| row.package.as_str() == package)
            .map(|row| row.descriptor.clone())
            .collect()
    }
}

impl<D: Send + 'static> Default for ImplementorIndex<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for ImplementorIndex<D> {
    fn clone(&self) -> Self {
        ImplementorIndex {
            local_package: self.local_package.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

fn collect<D>(
    state: &Mutex<IndexState<D>>,
    local: Option<&PackageName>,
    table: ImplementorTable<D>,
) {
    let mut state = state.lock();
    state.tables_received += 1;

    let before = state.rows.len();
    for (package, descriptors) in table {
        if local == Some(&package) {
            continue;
        }
        if !state.packages.contains(&package) {
            state.packages.push(package.clone());
        }
        state.rows.extend(descriptors.into_iter().map(|descriptor| IndexRow {
            package: package.clone(),
            descriptor,
        }));
    }

    tracing::debug!(
        added = state.rows.len() - before,
        total = state.rows.len(),
        "collected implementor table"
    );
}
