//! The hook/pending-slot mailbox shared by fragments and the aggregator.
//!
//! # Invariants
//!
//! - Each [`ImplementorRegistry::try_deliver`] either calls the hook or fills
//!   the pending slot, never both
//! - Locks are always taken hook first, then pending; the hook is never
//!   called while either lock is held, so a hook may re-enter the registry

use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use rdx_table::{ImplementorTable, Markup};

/// Aggregator callback receiving one table per call.
pub type Hook<D> = Arc<dyn Fn(ImplementorTable<D>) + Send + Sync>;

/// Process-wide handoff point between fragments and the aggregator.
pub struct ImplementorRegistry<D = Markup> {
    /// Aggregator hook, once the aggregator has loaded.
    hook: Mutex<Option<Hook<D>>>,

    /// Table parked by a fragment that ran before the aggregator.
    pending: Mutex<Option<ImplementorTable<D>>>,
}

impl<D: 'static> ImplementorRegistry<D> {
    pub fn new() -> Self {
        ImplementorRegistry {
            hook: Mutex::new(None),
            pending: Mutex::new(None),
        }
    }

    /// Hand `table` to the aggregator hook, or park it if there is no hook.
    ///
    /// Returns `true` if the hook was called. Otherwise the table now sits in
    /// the pending slot, replacing whatever was there. A panic inside the hook
    /// is not caught.
    pub fn try_deliver(&self, table: ImplementorTable<D>) -> bool {
        let hook_slot = self.hook.lock();
        let hook = hook_slot.as_ref().map(Arc::clone);
        if let Some(hook) = hook {
            drop(hook_slot);
            tracing::debug!(packages = table.len(), "delivering table to aggregator hook");
            hook(table);
            return true;
        }

        let packages = table.len();
        let replaced = self.pending.lock().replace(table).is_some();
        drop(hook_slot);
        tracing::debug!(packages, replaced, "no aggregator hook; table parked as pending");
        false
    }

    /// Take the pending table, leaving the slot empty.
    pub fn drain_pending(&self) -> Option<ImplementorTable<D>> {
        self.pending.lock().take()
    }

    /// Install the aggregator hook and replay any pending table into it.
    ///
    /// Replaces a previously installed hook. Returns `true` if a pending table
    /// was replayed.
    ///
    /// The pending table moves into the hook. If the replay panics, the hook
    /// stays installed and the slot stays empty: the table is consumed, exactly
    /// as it would be by a panicking [`try_deliver`](Self::try_deliver).
    pub fn install_hook(&self, hook: impl Fn(ImplementorTable<D>) + Send + Sync + 'static) -> bool {
        let hook: Hook<D> = Arc::new(hook);
        let drained = {
            let mut hook_slot = self.hook.lock();
            *hook_slot = Some(Arc::clone(&hook));
            self.pending.lock().take()
        };

        match drained {
            Some(table) => {
                tracing::debug!(packages = table.len(), "replaying pending table into new hook");
                hook(table);
                true
            }
            None => false,
        }
    }

    /// Remove the aggregator hook. Returns `true` if one was installed.
    pub fn remove_hook(&self) -> bool {
        self.hook.lock().take().is_some()
    }

    pub fn has_hook(&self) -> bool {
        self.hook.lock().is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.lock().is_some()
    }

    /// Copy of the pending table, leaving the slot untouched.
    pub fn pending(&self) -> Option<ImplementorTable<D>>
    where
        D: Clone,
    {
        self.pending.lock().clone()
    }
}

impl<D: 'static> Default for ImplementorRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for ImplementorRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementorRegistry")
            .field("has_hook", &self.hook.lock().is_some())
            .field(
                "pending_packages",
                &self.pending.lock().as_ref().map(ImplementorTable::len),
            )
            .finish()
    }
}

// Global registry shared by every fragment loaded in this process
static GLOBAL_REGISTRY: OnceLock<ImplementorRegistry> = OnceLock::new();

/// The process-wide registry (lazily initialized).
pub fn global() -> &'static ImplementorRegistry {
    GLOBAL_REGISTRY.get_or_init(ImplementorRegistry::new)
}
