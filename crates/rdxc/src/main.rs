//! rdx command-line interface.

use rdxc::commands::{
    builtin_fragment, emit_fragment, parse_builtin_args, parse_emit_args, parse_simulate_args,
    read_table, show_table, simulate,
};
use std::path::Path;

fn main() {
    rdxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let rest = &args[2..];
    let result = match args[1].as_str() {
        "show" => {
            let Some(path) = rest.first() else {
                eprintln!("Usage: rdx show <table.json>");
                std::process::exit(1);
            };
            show_table(Path::new(path))
        }
        "emit" => parse_emit_args(rest).and_then(|emit| {
            let table = read_table(&emit.input)?;
            let written = emit_fragment(&table, &emit.trait_path, &emit.config)?;
            Ok(format!("wrote {}\n", written.display()))
        }),
        "builtin" => parse_builtin_args(rest)
            .and_then(|(trait_path, format)| builtin_fragment(&trait_path, format)),
        "simulate" => parse_simulate_args(rest).and_then(|sim| {
            simulate(&sim.inputs, &sim.options, rdx_registrar::global())
        }),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("rdx - implementor fragment tools");
    println!();
    println!("Usage: rdx <command> [options]");
    println!();
    println!("Commands:");
    println!("  show <table.json>                          List packages and implementor counts");
    println!("  emit <table.json> --trait <path> [--out-dir <dir>]");
    println!("       [--global <name>] [--hook <name>] [--pending <name>]");
    println!("                                             Write the registration script");
    println!("  builtin [--trait <path>] [--json|--script] Print a generated fragment");
    println!("  simulate [--hook-first] [--local <pkg>] [--trait <path>] <table.json>...");
    println!("                                             Simulate page-load handoff");
    println!();
    println!("Set RDX_LOG (e.g. RDX_LOG=debug) for trace output.");
}
