use std::fs;
use std::path::{Path, PathBuf};

use rdx_table::{render_script, ImplementorTable, ScriptConfig, TraitPath};

use super::option_value;
use crate::{CommandError, Result};

/// Where and how registration scripts are written.
#[derive(Clone, Debug)]
pub struct EmitConfig {
    /// Documentation root; fragments land under `<out_dir>/implementors/`.
    pub out_dir: PathBuf,
    pub script: ScriptConfig,
}

impl Default for EmitConfig {
    fn default() -> Self {
        EmitConfig {
            out_dir: PathBuf::from("."),
            script: ScriptConfig::default(),
        }
    }
}

/// Parsed `rdx emit` arguments.
#[derive(Debug)]
pub struct EmitArgs {
    pub input: PathBuf,
    pub trait_path: TraitPath,
    pub config: EmitConfig,
}

/// Parse `<table.json> --trait <path> [--out-dir <dir>]`
/// `[--global <name>] [--hook <name>] [--pending <name>]`.
pub fn parse_emit_args(args: &[String]) -> Result<EmitArgs> {
    let mut input = None;
    let mut trait_path = None;
    let mut config = EmitConfig::default();

    let mut i = 0;
    while i < args.len() {
        if let Some(value) = option_value(args, &mut i, "--trait")? {
            trait_path = Some(TraitPath::parse(&value)?);
        } else if let Some(value) = option_value(args, &mut i, "--out-dir")? {
            config.out_dir = PathBuf::from(value);
        } else if let Some(value) = option_value(args, &mut i, "--global")? {
            config.script.global_object = value;
        } else if let Some(value) = option_value(args, &mut i, "--hook")? {
            config.script.hook_name = value;
        } else if let Some(value) = option_value(args, &mut i, "--pending")? {
            config.script.pending_name = value;
        } else if args[i].starts_with('-') {
            return Err(CommandError::Usage(format!("unknown option {}", args[i])));
        } else if input.is_none() {
            input = Some(PathBuf::from(&args[i]));
        } else {
            return Err(CommandError::Usage(format!("unexpected argument {}", args[i])));
        }
        i += 1;
    }

    config.script.validate()?;

    Ok(EmitArgs {
        input: input.ok_or_else(|| CommandError::Usage("missing table file".to_owned()))?,
        trait_path: trait_path
            .ok_or_else(|| CommandError::Usage("missing --trait <path>".to_owned()))?,
        config,
    })
}

/// Write `table`'s registration script to its place in the documentation tree.
///
/// Returns the path written.
#[tracing::instrument(level = "debug", skip_all, fields(trait_path = %trait_path))]
pub fn emit_fragment(
    table: &ImplementorTable,
    trait_path: &TraitPath,
    config: &EmitConfig,
) -> Result<PathBuf> {
    config.script.validate()?;
    let path = config.out_dir.join(trait_path.fragment_path());
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }

    fs::write(&path, render_script(table, &config.script)).map_err(CommandError::io(&path))?;
    tracing::info!(path = %path.display(), packages = table.len(), "wrote implementor fragment");
    Ok(path)
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(CommandError::io(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn parses_full_command() {
        let parsed = parse_emit_args(&args(&[
            "t.json",
            "--trait",
            "core::default::Default",
            "--out-dir=doc",
        ]))
        .unwrap();

        assert_eq!(parsed.input, PathBuf::from("t.json"));
        assert_eq!(parsed.trait_path.to_string(), "core::default::Default");
        assert_eq!(parsed.config.out_dir, PathBuf::from("doc"));
    }

    #[test]
    fn out_dir_defaults_to_current() {
        let parsed = parse_emit_args(&args(&["t.json", "--trait=a::B"])).unwrap();
        assert_eq!(parsed.config.out_dir, PathBuf::from("."));
    }

    #[test]
    fn trait_is_required() {
        let err = parse_emit_args(&args(&["t.json"])).unwrap_err();
        assert_eq!(err.to_string(), "missing --trait <path>");
    }

    #[test]
    fn bad_trait_path_reported() {
        let err = parse_emit_args(&args(&["t.json", "--trait", "a::"])).unwrap_err();
        assert!(matches!(err, CommandError::Table(_)));
    }

    #[test]
    fn script_names_from_flags() {
        let parsed = parse_emit_args(&args(&[
            "t.json",
            "--trait=a::B",
            "--global",
            "globalThis",
            "--hook=registerImplementors",
            "--pending",
            "pendingImplementors",
        ]))
        .unwrap();

        assert_eq!(parsed.config.script.global_object, "globalThis");
        assert_eq!(parsed.config.script.hook_name, "registerImplementors");
        assert_eq!(parsed.config.script.pending_name, "pendingImplementors");
    }

    #[test]
    fn script_name_must_be_identifier() {
        let err = parse_emit_args(&args(&["t.json", "--trait=a::B", "--hook", "a.b"])).unwrap_err();
        assert_eq!(err.to_string(), "hook name `a.b` is not a valid JS identifier");
    }

    #[test]
    fn unknown_option_rejected() {
        let err = parse_emit_args(&args(&["t.json", "--force"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown option --force");
    }
}
