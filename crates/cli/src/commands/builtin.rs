// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commands compiled into the binary.

use async_trait::async_trait;

use super::{ActionResult, CommandKind, CommandLoader, CommandSource, LoaderError, SlashCommand};

struct Builtin {
    name: &'static str,
    description: &'static str,
    action: fn(&str) -> ActionResult,
}

/// All built-in commands, in alphabetical order.
static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "about",
        description: "Show version info",
        action: about,
    },
    Builtin {
        name: "clear",
        description: "Clear the screen and conversation history",
        action: |_| ActionResult::ClearHistory,
    },
    Builtin {
        name: "help",
        description: "For help on promptline",
        action: help,
    },
    Builtin {
        name: "quit",
        description: "Exit the cli",
        action: |_| ActionResult::Quit,
    },
];

fn about(_args: &str) -> ActionResult {
    ActionResult::Message(format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ))
}

fn help(_args: &str) -> ActionResult {
    let mut text = String::from("Built-in commands:");
    for builtin in BUILTINS {
        text.push_str(&format!("\n  /{:<8} {}", builtin.name, builtin.description));
    }
    ActionResult::Message(text)
}

/// Loads the built-in commands. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinCommandLoader;

impl BuiltinCommandLoader {
    pub fn commands() -> Vec<SlashCommand> {
        BUILTINS
            .iter()
            .map(|b| {
                SlashCommand::new(
                    b.name,
                    b.description,
                    CommandKind::BuiltIn,
                    CommandSource::BuiltIn,
                    b.action,
                )
            })
            .collect()
    }
}

#[async_trait]
impl CommandLoader for BuiltinCommandLoader {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn load_commands(&self) -> Result<Vec<SlashCommand>, LoaderError> {
        Ok(Self::commands())
    }
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
