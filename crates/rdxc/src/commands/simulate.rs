use std::path::PathBuf;

use rdx_registrar::{
    evaluate, fragments, Delivery, Fragment, ImplementorIndex, ImplementorRegistry, TableFragment,
};
use rdx_table::TraitPath;

use super::{option_value, read_table};
use crate::{CommandError, Result};

/// Page-load ordering for `rdx simulate`.
#[derive(Clone, Debug)]
pub struct SimulateOptions {
    /// Attach the aggregator before any fragment loads.
    pub hook_first: bool,
    /// Package the simulated page belongs to; its rows are skipped.
    pub local_package: Option<String>,
    /// Trait every loaded table lists implementors of.
    pub trait_path: String,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        SimulateOptions {
            hook_first: false,
            local_package: None,
            trait_path: fragments::CORE_DEFAULT.trait_path().to_owned(),
        }
    }
}

/// Parsed `rdx simulate` arguments.
#[derive(Debug)]
pub struct SimulateArgs {
    pub inputs: Vec<PathBuf>,
    pub options: SimulateOptions,
}

/// Parse `[--hook-first] [--local <pkg>] [--trait <path>] <table.json>...`.
pub fn parse_simulate_args(args: &[String]) -> Result<SimulateArgs> {
    let mut inputs = Vec::new();
    let mut options = SimulateOptions::default();

    let mut i = 0;
    while i < args.len() {
        if args[i] == "--hook-first" {
            options.hook_first = true;
        } else if let Some(value) = option_value(args, &mut i, "--local")? {
            options.local_package = Some(value);
        } else if let Some(value) = option_value(args, &mut i, "--trait")? {
            options.trait_path = TraitPath::parse(&value)?.to_string();
        } else if args[i].starts_with('-') {
            return Err(CommandError::Usage(format!("unknown option {}", args[i])));
        } else {
            inputs.push(PathBuf::from(&args[i]));
        }
        i += 1;
    }

    if inputs.is_empty() {
        return Err(CommandError::Usage("missing table file".to_owned()));
    }
    Ok(SimulateArgs { inputs, options })
}

/// Load each table as a fragment against `registry`, with an aggregator
/// attached before or after, and report what the aggregator collected.
pub fn simulate(
    inputs: &[PathBuf],
    options: &SimulateOptions,
    registry: &ImplementorRegistry,
) -> Result<String> {
    let index = match &options.local_package {
        Some(package) => ImplementorIndex::for_package(package.as_str()),
        None => ImplementorIndex::new(),
    };
    let mut out = String::new();

    if options.hook_first {
        index.attach(registry);
        out.push_str("aggregator attached\n");
    }

    for input in inputs {
        let table = read_table(input)?;
        let fragment = TableFragment::new(options.trait_path.as_str(), table);
        let outcome = match evaluate(&fragment, registry) {
            Delivery::Delivered => "delivered",
            Delivery::Queued => "queued",
        };
        out.push_str(&format!("loaded {}: {outcome}\n", input.display()));
    }

    if !options.hook_first {
        let replayed = index.attach(registry);
        out.push_str(if replayed {
            "aggregator attached: replayed pending table\n"
        } else {
            "aggregator attached: nothing pending\n"
        });
    }

    out.push_str(&format!(
        "{} tables received, {} rows\n",
        index.tables_received(),
        index.len()
    ));
    for row in index.rows() {
        out.push_str(&format!("  {}  {}\n", row.package, row.descriptor.as_str()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn trait_defaults_to_core_default() {
        let parsed = parse_simulate_args(&args(&["a.json"])).unwrap();
        assert_eq!(parsed.options.trait_path, "core::default::Default");
        assert_eq!(parsed.inputs, vec![PathBuf::from("a.json")]);
    }

    #[test]
    fn trait_option_is_validated() {
        let parsed =
            parse_simulate_args(&args(&["--trait", "core::clone::Clone", "a.json"])).unwrap();
        assert_eq!(parsed.options.trait_path, "core::clone::Clone");

        let err = parse_simulate_args(&args(&["--trait=a.json", "a.json"])).unwrap_err();
        assert!(matches!(err, CommandError::Table(_)));
    }

    #[test]
    fn flags_and_inputs() {
        let parsed =
            parse_simulate_args(&args(&["--hook-first", "--local", "feed", "a.json", "b.json"]))
                .unwrap();
        assert!(parsed.options.hook_first);
        assert_eq!(parsed.options.local_package.as_deref(), Some("feed"));
        assert_eq!(parsed.inputs.len(), 2);
    }
}
