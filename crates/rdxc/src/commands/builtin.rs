use rdx_registrar::{fragments, Fragment};
use rdx_table::{render_script, wire, ScriptConfig};

use super::option_value;
use crate::{CommandError, Result};

/// Output form for `rdx builtin`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuiltinFormat {
    /// Package names with implementor counts.
    #[default]
    Summary,
    /// JSON wire form.
    Json,
    /// Registration script.
    Script,
}

/// Parse `[--trait <path>] [--json | --script]`.
pub fn parse_builtin_args(args: &[String]) -> Result<(String, BuiltinFormat)> {
    let mut trait_path = fragments::CORE_DEFAULT.trait_path().to_owned();
    let mut format = BuiltinFormat::default();

    let mut i = 0;
    while i < args.len() {
        if let Some(value) = option_value(args, &mut i, "--trait")? {
            trait_path = value;
        } else {
            format = match args[i].as_str() {
                "--json" => BuiltinFormat::Json,
                "--script" => BuiltinFormat::Script,
                other => return Err(CommandError::Usage(format!("unknown option {other}"))),
            };
        }
        i += 1;
    }
    Ok((trait_path, format))
}

/// Render a generated fragment.
pub fn builtin_fragment(trait_path: &str, format: BuiltinFormat) -> Result<String> {
    let fragment = fragments::find(trait_path)
        .ok_or_else(|| CommandError::UnknownFragment(trait_path.to_owned()))?;
    let table = fragment.build();

    Ok(match format {
        BuiltinFormat::Summary => {
            let mut out = format!("{}\n", fragment.trait_path());
            for (package, descriptors) in table.iter() {
                out.push_str(&format!("  {package}: {}\n", descriptors.len()));
            }
            out
        }
        BuiltinFormat::Json => {
            let mut json = wire::to_json(&table)?;
            json.push('\n');
            json
        }
        BuiltinFormat::Script => render_script(&table, &ScriptConfig::default()),
    })
}
