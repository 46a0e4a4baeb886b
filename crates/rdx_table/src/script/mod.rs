//! Rendering of the self-registering JS fragment a documentation page loads.
//!
//! The emitted script builds the table as an object literal, then hands it
//! off: if the page's aggregator hook already exists it is called with the
//! table, otherwise the table is parked in the pending slot for the
//! aggregator to collect once it loads.
//!
//! ```text
//! (function() {var implementors = {};
//! implementors["libc"] = [];
//! implementors["rand"] = ["impl ...",];
//! if (window.register_implementors) {
//!     window.register_implementors(implementors);
//! } else {
//!     window.pending_implementors = implementors;
//! }
//! })()
//! ```

use crate::{ImplementorTable, Result, TableError};

/// Global names the registration script binds to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptConfig {
    /// Object holding the hook and the slot.
    pub global_object: String,
    /// Aggregator hook function name.
    pub hook_name: String,
    /// Pending slot variable name.
    pub pending_name: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        ScriptConfig {
            global_object: "window".to_owned(),
            hook_name: "register_implementors".to_owned(),
            pending_name: "pending_implementors".to_owned(),
        }
    }
}

impl ScriptConfig {
    /// Check that every configured name is a plain JS identifier.
    ///
    /// The names are spliced into the script verbatim.
    pub fn validate(&self) -> Result<()> {
        for (field, name) in [
            ("global object", &self.global_object),
            ("hook name", &self.hook_name),
            ("pending name", &self.pending_name),
        ] {
            if !is_js_identifier(name) {
                return Err(TableError::InvalidScriptName {
                    field,
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Render `table` as a registration script.
///
/// Names in `config` are emitted as given; see [`ScriptConfig::validate`].
pub fn render_script<D: AsRef<str>>(table: &ImplementorTable<D>, config: &ScriptConfig) -> String {
    let mut out = String::from("(function() {var implementors = {};\n");

    for (package, descriptors) in table.iter() {
        out.push_str("implementors[");
        push_js_string(&mut out, package.as_str());
        out.push_str("] = [");
        for descriptor in descriptors {
            push_js_string(&mut out, descriptor.as_ref());
            out.push(',');
        }
        out.push_str("];\n");
    }

    let hook = format!("{}.{}", config.global_object, config.hook_name);
    let pending = format!("{}.{}", config.global_object, config.pending_name);
    out.push_str(&format!("if ({hook}) {{\n    {hook}(implementors);\n"));
    out.push_str(&format!("}} else {{\n    {pending} = implementors;\n}}\n"));
    out.push_str("})()\n");

    tracing::debug!(
        packages = table.len(),
        implementors = table.implementor_count(),
        bytes = out.len(),
        "rendered registration script"
    );
    out
}

/// Append `s` as a double-quoted JS string literal.
///
/// Line and paragraph separators are escaped for pre-ES2019 engines, and `</`
/// is broken up so the literal can sit inside an inline `<script>`.
fn push_js_string(out: &mut String, s: &str) {
    out.push('"');
    let mut prev = '\0';
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '/' if prev == '<' => out.push_str("\\/"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if u32::from(c) < 0x20 => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
        prev = c;
    }
    out.push('"');
}
