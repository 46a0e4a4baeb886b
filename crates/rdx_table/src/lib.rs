//! Implementor tables for client-side documentation indexes.
//!
//! A documentation site lists, per trait, every type that implements it. The
//! list is split into generated fragments, one per trait, each holding an
//! [`ImplementorTable`]: package name to the ordered, pre-rendered descriptors
//! of that package's implementors.
//!
//! This crate owns the data model and its two serialized forms:
//!
//! - [`wire`]: the JSON shape `{ "<package>": ["<descriptor>", ...] }`
//! - [`script`]: the self-registering JS fragment loaded by documentation pages
//!
//! Descriptors are opaque. Nothing here parses or validates their content.

mod error;
mod name;
mod path;
pub mod script;
mod table;
pub mod wire;

pub use error::{Result, TableError};
pub use name::{Markup, PackageName};
pub use path::TraitPath;
pub use script::{render_script, ScriptConfig};
pub use table::ImplementorTable;
