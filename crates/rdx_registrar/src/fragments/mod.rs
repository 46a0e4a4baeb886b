//! Generated fragments shipped with the crate.

mod core_default;

pub use core_default::CORE_DEFAULT;

use crate::{Fragment, StaticFragment};

/// Every generated fragment, in emission order.
pub const BUILTIN: &[StaticFragment] = &[CORE_DEFAULT];

/// Find a generated fragment by trait path.
pub fn find(trait_path: &str) -> Option<&'static StaticFragment> {
    BUILTIN.iter().find(|f| f.trait_path() == trait_path)
}
