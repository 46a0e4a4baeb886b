use std::fs;
use std::path::Path;

use rdx_table::{wire, ImplementorTable};

use crate::{CommandError, Result};

/// Read a table from a JSON file.
pub fn read_table(path: &Path) -> Result<ImplementorTable> {
    let text = fs::read_to_string(path).map_err(CommandError::io(path))?;
    Ok(wire::from_json(&text)?)
}

/// List each package with its implementor count, in table order.
pub fn show_table(path: &Path) -> Result<String> {
    let table = read_table(path)?;
    let width = table.packages().map(|p| p.as_str().len()).max().unwrap_or(0);

    let mut out = String::new();
    for (package, descriptors) in table.iter() {
        out.push_str(&format!("{:<width$}  {}\n", package.as_str(), descriptors.len()));
    }
    out.push_str(&format!(
        "{} packages, {} implementors\n",
        table.len(),
        table.implementor_count()
    ));
    Ok(out)
}
