// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::commands::{ActionResult, CommandKind, CommandSource, SlashCommand};
use crate::extension::ExtensionConfig;
use std::collections::BTreeMap;
use std::path::PathBuf;

fn render<F: FnOnce(&mut Vec<u8>)>(f: F) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_plain_text_when_not_terminal() {
    let output = render(|buf| write_error(buf, "something went wrong", false));
    assert_eq!(output, "Error: something went wrong\n");
}

#[test]
fn error_with_ansi_when_terminal() {
    let output = render(|buf| write_error(buf, "something went wrong", true));
    assert_eq!(output, "\x1b[31mError: something went wrong\x1b[0m\n");
}

#[test]
fn multi_line_error_keeps_lines() {
    let output = render(|buf| write_error(buf, "Error in a.json: bad\nPlease fix", false));
    assert_eq!(output, "Error: Error in a.json: bad\nPlease fix\n");
}

fn extension(name: &str, version: &str) -> Extension {
    Extension {
        config: ExtensionConfig {
            name: name.into(),
            version: version.into(),
            context_file_name: None,
            mcp_servers: BTreeMap::new(),
            exclude_tools: Vec::new(),
        },
        path: PathBuf::from("/ext").join(name),
        context_files: Vec::new(),
    }
}

#[test]
fn extension_listing() {
    let output = render(|buf| {
        write_extensions(buf, &[extension("alpha", "1.0.0"), extension("beta", "0.2.0")]).unwrap()
    });
    assert_eq!(
        output,
        "Installed extensions:\n- alpha (1.0.0)\n- beta (0.2.0)\n"
    );
}

#[test]
fn empty_extension_listing() {
    let output = render(|buf| write_extensions(buf, &[]).unwrap());
    assert_eq!(output, "No extensions installed.\n");
}

#[test]
fn command_listing_aligns_descriptions() {
    let catalog = CommandCatalog::from(vec![
        SlashCommand::new("help", "Show help", CommandKind::BuiltIn, CommandSource::BuiltIn, |_| {
            ActionResult::Quit
        }),
        SlashCommand::new("git:commit", "Commit", CommandKind::File, CommandSource::User, |_| {
            ActionResult::Quit
        }),
    ]);
    let output = render(|buf| write_commands(buf, &catalog).unwrap());
    assert_eq!(output, "/help        Show help\n/git:commit  Commit\n");
}
