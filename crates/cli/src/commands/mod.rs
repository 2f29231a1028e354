// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Slash commands and the service that aggregates them.
//!
//! This module provides:
//! - [`SlashCommand`] - A named, invokable command with its provenance
//! - [`CommandLoader`] - A provider of commands from one source
//! - [`CommandService`] - Fans out to every loader and publishes one catalog
//! - [`CommandCatalog`] - Read-only snapshot of the published commands

mod builtin;
mod catalog;
mod file;
mod loader;
mod service;

pub use builtin::BuiltinCommandLoader;
pub use catalog::CommandCatalog;
pub use file::{FileCommandLoader, ARGS_PLACEHOLDER};
pub use loader::{CommandLoader, LoaderError};
pub use service::{CommandService, Diagnostics, TracingDiagnostics};

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::extension::Extension;

/// Directory holding custom command files, under `.gemini/` or an extension.
pub const COMMANDS_DIR: &str = "commands";

/// How a command behaves when invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    /// Implemented in the binary
    BuiltIn,
    /// Prompt template read from a command file
    File,
}

/// Which provider a command came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandSource {
    BuiltIn,
    User,
    Project,
    /// Provided by the named extension
    Extension(String),
}

impl fmt::Display for CommandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn => f.write_str("built-in"),
            Self::User => f.write_str("user"),
            Self::Project => f.write_str("project"),
            Self::Extension(name) => write!(f, "extension:{name}"),
        }
    }
}

/// Outcome of running a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionResult {
    /// Text to show the user
    Message(String),
    /// Prompt to send to the model
    SubmitPrompt(String),
    ClearHistory,
    Quit,
}

/// Command body, called with the text following the command name.
pub type CommandAction = Arc<dyn Fn(&str) -> ActionResult + Send + Sync>;

/// A named unit of functionality reachable as `/<name>`.
#[derive(Clone)]
pub struct SlashCommand {
    /// Command name without the leading `/` (e.g., "git:commit")
    pub name: String,
    pub description: String,
    pub kind: CommandKind,
    pub source: CommandSource,
    action: CommandAction,
}

impl SlashCommand {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: CommandKind,
        source: CommandSource,
        action: impl Fn(&str) -> ActionResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            source,
            action: Arc::new(action),
        }
    }

    /// Full command with leading slash.
    pub fn full_name(&self) -> String {
        format!("/{}", self.name)
    }

    /// Run the command with `args`.
    pub fn execute(&self, args: &str) -> ActionResult {
        (self.action)(args)
    }
}

impl fmt::Debug for SlashCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlashCommand")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("kind", &self.kind)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Built-ins, then extension command files, then user and project files.
///
/// Later loaders override earlier ones, so a project command replaces a
/// built-in of the same name.
pub fn default_loaders(
    extensions: &[Extension],
    home: Option<&Path>,
    cwd: &Path,
) -> Vec<Arc<dyn CommandLoader>> {
    vec![
        Arc::new(BuiltinCommandLoader),
        Arc::new(FileCommandLoader::for_extensions(extensions)),
        Arc::new(FileCommandLoader::for_workspace(home, cwd)),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
