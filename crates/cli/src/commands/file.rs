// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Custom commands defined in TOML files.
//!
//! Every `*.toml` file below a commands directory becomes one command. The
//! path relative to the directory names it, with `/` replaced by `:`, so
//! `git/commit.toml` is `/git:commit`.
//!
//! ```toml
//! description = "Write a commit message"
//! prompt = "Write a commit message for: {{args}}"
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{
    ActionResult, CommandKind, CommandLoader, CommandSource, LoaderError, SlashCommand,
    COMMANDS_DIR,
};
use crate::extension::Extension;
use crate::settings::GEMINI_DIR;

/// Replaced by the invocation arguments in a command prompt.
pub const ARGS_PLACEHOLDER: &str = "{{args}}";

#[derive(Debug, Deserialize)]
struct CommandFile {
    prompt: String,
    #[serde(default)]
    description: Option<String>,
}

/// Loads command files from an ordered list of directories.
///
/// Later directories override earlier ones when names collide, since the
/// service keeps the last command registered under a name.
#[derive(Clone, Debug)]
pub struct FileCommandLoader {
    name: String,
    dirs: Vec<(PathBuf, CommandSource)>,
}

impl FileCommandLoader {
    pub fn new(name: impl Into<String>, dirs: Vec<(PathBuf, CommandSource)>) -> Self {
        Self {
            name: name.into(),
            dirs,
        }
    }

    /// User commands from `~/.gemini/commands`, then project commands from
    /// `<cwd>/.gemini/commands`.
    pub fn for_workspace(home: Option<&Path>, cwd: &Path) -> Self {
        let mut dirs = Vec::new();
        if let Some(home) = home {
            dirs.push((home.join(GEMINI_DIR).join(COMMANDS_DIR), CommandSource::User));
        }
        let project = cwd.join(GEMINI_DIR).join(COMMANDS_DIR);
        if !dirs.iter().any(|(dir, _)| *dir == project) {
            dirs.push((project, CommandSource::Project));
        }
        Self::new("files", dirs)
    }

    /// Commands shipped in each extension's `commands/` directory.
    pub fn for_extensions(extensions: &[Extension]) -> Self {
        let dirs = extensions
            .iter()
            .map(|e| {
                (
                    e.commands_dir(),
                    CommandSource::Extension(e.name().to_string()),
                )
            })
            .collect();
        Self::new("extensions", dirs)
    }

    pub fn dirs(&self) -> &[(PathBuf, CommandSource)] {
        &self.dirs
    }

    async fn load_dir(
        &self,
        dir: &Path,
        source: &CommandSource,
    ) -> Result<Vec<SlashCommand>, LoaderError> {
        let scan_dir = dir.to_path_buf();
        let files = tokio::task::spawn_blocking(move || scan_command_files(&scan_dir))
            .await
            .map_err(|e| LoaderError::Provider(format!("command file scan failed: {e}")))??;

        let mut commands = Vec::new();
        for path in files {
            let Some(name) = command_name(dir, &path) else {
                continue;
            };
            match read_command_file(&path).await {
                Ok(file) => {
                    debug!(name = %name, path = %path.display(), "Loaded command file");
                    commands.push(file_command(name, file, source.clone()));
                }
                Err(message) => {
                    warn!(path = %path.display(), "Skipping command file: {message}");
                }
            }
        }
        Ok(commands)
    }
}

#[async_trait]
impl CommandLoader for FileCommandLoader {
    fn name(&self) -> &str {
        &self.name
    }

    /// Commands from every directory that could be scanned. A directory that
    /// fails is logged and skipped.
    async fn load_commands(&self) -> Result<Vec<SlashCommand>, LoaderError> {
        let mut commands = Vec::new();
        for (dir, source) in &self.dirs {
            match self.load_dir(dir, source).await {
                Ok(found) => commands.extend(found),
                Err(e) => warn!(%source, "Skipping commands directory: {e}"),
            }
        }
        Ok(commands)
    }
}

/// Sorted `*.toml` files below `dir`. Blocks on filesystem access.
///
/// A missing directory has no commands; one that exists but cannot be
/// listed is an error.
fn scan_command_files(dir: &Path) -> Result<Vec<PathBuf>, LoaderError> {
    let io_error = |source: std::io::Error| LoaderError::Io {
        path: dir.to_path_buf(),
        source,
    };
    if !dir.try_exists().map_err(io_error)? {
        return Ok(Vec::new());
    }
    std::fs::read_dir(dir).map_err(io_error)?;

    let pattern = format!("{}/**/*.toml", glob::Pattern::escape(&dir.to_string_lossy()));
    let entries = glob::glob(&pattern).map_err(|source| LoaderError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable command path");
                None
            }
        })
        .collect();
    files.sort();
    Ok(files)
}

async fn read_command_file(path: &Path) -> Result<CommandFile, String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| e.to_string())?;
    toml::from_str(&content).map_err(|e| e.to_string())
}

/// `git/commit.toml` under `dir` becomes `git:commit`.
fn command_name(dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?.with_extension("");
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    (!parts.is_empty()).then(|| parts.join(":"))
}

fn file_command(name: String, file: CommandFile, source: CommandSource) -> SlashCommand {
    let description = file
        .description
        .unwrap_or_else(|| format!("Custom command from {name}"));
    let template = file.prompt;
    SlashCommand::new(name, description, CommandKind::File, source, move |args| {
        ActionResult::SubmitPrompt(expand_prompt(&template, args))
    })
}

/// Substitute `{{args}}`, or append non-empty arguments after a blank line.
pub(crate) fn expand_prompt(template: &str, args: &str) -> String {
    let args = args.trim();
    if template.contains(ARGS_PLACEHOLDER) {
        template.replace(ARGS_PLACEHOLDER, args)
    } else if args.is_empty() {
        template.to_string()
    } else {
        format!("{template}\n\n{args}")
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
