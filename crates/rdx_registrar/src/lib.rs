//! Load-time registration of implementor tables.
//!
//! Each generated fragment builds one [`ImplementorTable`] and hands it to the
//! page's aggregator. The aggregator may not exist yet when a fragment loads,
//! so the handoff goes through an [`ImplementorRegistry`]: a single-slot
//! mailbox holding either the aggregator's hook or one pending table.
//!
//! # Architecture
//!
//! ```text
//! Fragment ──evaluate──▶ ImplementorRegistry ──hook──▶ ImplementorIndex
//!                           │  (no hook yet)              ▲
//!                           └── pending slot ──replay─────┘
//! ```
//!
//! [`ImplementorTable`]: rdx_table::ImplementorTable

pub mod fragments;
mod index;
mod registrar;
mod registry;

pub use index::{ImplementorIndex, IndexRow};
pub use registrar::{evaluate, Delivery, Fragment, StaticFragment, TableFragment};
pub use registry::{global, Hook, ImplementorRegistry};
