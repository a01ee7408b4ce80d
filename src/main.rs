//! ORGE installer CLI entrypoint.
//!
//! This binary is invoked by the build system with one platform staging
//! command per packaging run. It derives the install plan from the typed
//! arguments, executes it against the platform's metadata editor, and exits
//! non-zero on the first failure. Progress lines and the one-line failure
//! diagnostic both go to standard output, which is what the invoking build
//! system captures.

use clap::Parser;
use orge_installer::cli::{Cli, Command, SourcesArgs};
use orge_installer::error::Result;
use orge_installer::relink::{ElfEditor, MachOEditor, NoopEditor};
use orge_installer::{linux, macos, pipeline, sources, windows};
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let exit_code = exit_code_for_run_result(run(&cli, &mut stdout), &mut stdout);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Linux(args) => pipeline::execute(&linux::plan(args)?, &ElfEditor, out),
        Command::Macos(args) => pipeline::execute(&macos::plan(args)?, &MachOEditor, out),
        Command::Windows(args) => pipeline::execute(&windows::plan(args), &NoopEditor, out),
        Command::Sources(args) => print_sources(args, out),
    }
}

fn print_sources(args: &SourcesArgs, out: &mut dyn Write) -> Result<()> {
    for path in sources::list_sources(&args.root, &args.extension)? {
        writeln!(out, "{path}")?;
    }
    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, out: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_line(out, format!("error: {err}"));
            1
        }
    }
}

fn write_line(out: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort diagnostics; ignore write failures.
    }
}
