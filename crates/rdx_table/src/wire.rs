//! JSON wire form of an implementor table.
//!
//! ```text
//! { "libc": [], "rand": ["impl <a ...>Default</a> for ..."] }
//! ```
//!
//! Package order in the document is the table's order. A package repeated in
//! the input keeps its first position and takes its last value.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{ImplementorTable, Result};

/// Encode `table` as pretty-printed JSON.
pub fn to_json<D: Serialize>(table: &ImplementorTable<D>) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Decode a table from JSON text.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn from_json<D: DeserializeOwned>(text: &str) -> Result<ImplementorTable<D>> {
    let table: ImplementorTable<D> = serde_json::from_str(text)?;
    tracing::trace!(packages = table.len(), "decoded implementor table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Markup, TableError};
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_keeps_document_order() {
        let table: ImplementorTable =
            from_json(r#"{"uuid": ["u"], "libc": [], "feed": ["a", "b"]}"#).unwrap();

        let order: Vec<_> = table.packages().map(|p| p.as_str()).collect();
        assert_eq!(order, ["uuid", "libc", "feed"]);
        assert_eq!(table.get("libc"), Some(&[][..]));
        assert_eq!(table.get("feed"), Some(&[Markup::from("a"), Markup::from("b")][..]));
    }

    #[test]
    fn repeated_package_takes_last_value_at_first_position() {
        let table: ImplementorTable = from_json(r#"{"a": ["1"], "b": [], "a": ["2"]}"#).unwrap();

        let order: Vec<_> = table.packages().map(|p| p.as_str()).collect();
        assert_eq!(order, ["a", "b"]);
        assert_eq!(table.get("a"), Some(&[Markup::from("2")][..]));
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let table: ImplementorTable = [
            ("libc", vec![]),
            ("rand", vec![Markup::from("impl <a href='x'>Default</a> for \"R\"")]),
        ]
        .into_iter()
        .collect();

        let json = to_json(&table).unwrap();
        let back: ImplementorTable = from_json(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn non_map_input_is_rejected() {
        let err = from_json::<Markup>(r#"["libc"]"#).unwrap_err();
        assert!(matches!(err, TableError::Json(_)));
        assert!(err.to_string().starts_with("malformed implementor table"));
    }
}
