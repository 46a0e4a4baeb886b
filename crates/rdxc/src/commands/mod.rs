//! Command implementations.
//!
//! Each command returns its report as a `String`; `main` decides where it goes.

mod builtin;
mod emit;
mod show;
mod simulate;

pub use builtin::{builtin_fragment, parse_builtin_args, BuiltinFormat};
pub use emit::{emit_fragment, parse_emit_args, EmitArgs, EmitConfig};
pub use show::{read_table, show_table};
pub use simulate::{parse_simulate_args, simulate, SimulateArgs, SimulateOptions};

use crate::{CommandError, Result};

/// Value following a `--flag value` or `--flag=value` option.
///
/// `i` indexes the flag; on return it indexes the last consumed argument.
fn option_value(args: &[String], i: &mut usize, flag: &str) -> Result<Option<String>> {
    let arg = &args[*i];
    if let Some(value) = arg.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')) {
        return Ok(Some(value.to_owned()));
    }
    if arg != flag {
        return Ok(None);
    }
    *i += 1;
    args.get(*i)
        .cloned()
        .map(Some)
        .ok_or_else(|| CommandError::Usage(format!("missing value for {flag}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn option_value_forms() {
        let a = args(&["--trait", "core::default::Default", "--trait=x::Y", "--other"]);

        let mut i = 0;
        assert_eq!(
            option_value(&a, &mut i, "--trait").unwrap().as_deref(),
            Some("core::default::Default")
        );
        assert_eq!(i, 1);

        let mut i = 2;
        assert_eq!(option_value(&a, &mut i, "--trait").unwrap().as_deref(), Some("x::Y"));
        assert_eq!(i, 2);

        let mut i = 3;
        assert_eq!(option_value(&a, &mut i, "--trait").unwrap(), None);
    }

    #[test]
    fn option_value_missing() {
        let a = args(&["--out-dir"]);
        let mut i = 0;
        assert!(matches!(
            option_value(&a, &mut i, "--out-dir"),
            Err(CommandError::Usage(_))
        ));
    }
}
