// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing output: fatal errors and listings.
//!
//! Errors go to stderr, colored when it is a terminal. Non-fatal warnings
//! are logged through `tracing`. Listings for `--list-extensions` and
//! `--list-commands` go to stdout.

use std::io::{self, IsTerminal, Write};

use crate::commands::CommandCatalog;
use crate::extension::Extension;

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {msg}\x1b[0m");
    } else {
        let _ = writeln!(writer, "Error: {msg}");
    }
}

/// One `- name (version)` line per extension.
pub fn write_extensions<W: Write>(writer: &mut W, extensions: &[Extension]) -> io::Result<()> {
    if extensions.is_empty() {
        return writeln!(writer, "No extensions installed.");
    }
    writeln!(writer, "Installed extensions:")?;
    for extension in extensions {
        writeln!(writer, "- {} ({})", extension.name(), extension.version())?;
    }
    Ok(())
}

/// `/<name>  <description>` per command, names padded to a common width.
pub fn write_commands<W: Write>(writer: &mut W, catalog: &CommandCatalog) -> io::Result<()> {
    let width = catalog.names().map(str::len).max().unwrap_or(0) + 1;
    for command in catalog {
        writeln!(
            writer,
            "{:<width$}  {}",
            command.full_name(),
            command.description
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
