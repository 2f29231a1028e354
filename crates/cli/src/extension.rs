// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extension discovery.
//!
//! An extension is a directory under `.gemini/extensions/` containing a
//! `gemini-extension.json` manifest. Workspace extensions are found before
//! user extensions, and the first extension with a given name wins.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::settings::io::{dirs_in, parse_json5_or_json};
use crate::settings::GEMINI_DIR;

/// Directory holding extensions inside [`GEMINI_DIR`].
pub const EXTENSIONS_DIR: &str = "extensions";

/// Manifest file name inside an extension directory.
pub const EXTENSION_MANIFEST: &str = "gemini-extension.json";

/// Context file used when the manifest does not name one.
pub const DEFAULT_CONTEXT_FILE: &str = "GEMINI.md";

/// Extension request that disables every extension.
pub const NO_EXTENSIONS: &str = "none";

#[derive(Debug, thiserror::Error)]
pub enum ExtensionError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid extension manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Contents of `gemini-extension.json`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionConfig {
    pub name: String,
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_file_name: Option<String>,

    /// External tool server definitions, passed through untouched
    #[serde(default)]
    pub mcp_servers: BTreeMap<String, serde_json::Value>,

    #[serde(default)]
    pub exclude_tools: Vec<String>,
}

/// A discovered extension.
#[derive(Clone, Debug, PartialEq)]
pub struct Extension {
    pub config: ExtensionConfig,
    /// Extension directory
    pub path: PathBuf,
    /// Context files that exist on disk
    pub context_files: Vec<PathBuf>,
}

impl Extension {
    /// Load an extension from its directory.
    pub fn load(dir: &Path) -> Result<Self, ExtensionError> {
        let manifest = dir.join(EXTENSION_MANIFEST);
        let content = std::fs::read_to_string(&manifest).map_err(|source| ExtensionError::Io {
            path: manifest.clone(),
            source,
        })?;
        let config: ExtensionConfig =
            parse_json5_or_json(&content).map_err(|source| ExtensionError::Parse {
                path: manifest.clone(),
                source,
            })?;

        let context_file = dir.join(
            config
                .context_file_name
                .as_deref()
                .unwrap_or(DEFAULT_CONTEXT_FILE),
        );
        let context_files = if context_file.is_file() {
            vec![context_file]
        } else {
            Vec::new()
        };

        Ok(Self {
            config,
            path: dir.to_path_buf(),
            context_files,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// Directory of custom command files shipped with the extension.
    pub fn commands_dir(&self) -> PathBuf {
        self.path.join(crate::commands::COMMANDS_DIR)
    }
}

/// Source of installed extensions for a working directory.
pub trait ExtensionSource: Send + Sync {
    fn load(&self, cwd: &Path) -> Vec<Extension>;
}

/// Discovers extensions in the workspace and the user's home.
#[derive(Clone, Debug, Default)]
pub struct ExtensionLoader {
    home: Option<PathBuf>,
}

impl ExtensionLoader {
    pub fn new(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    fn roots(&self, cwd: &Path) -> Vec<PathBuf> {
        let mut roots = vec![cwd.join(GEMINI_DIR).join(EXTENSIONS_DIR)];
        if let Some(home) = &self.home {
            let user = home.join(GEMINI_DIR).join(EXTENSIONS_DIR);
            if !roots.contains(&user) {
                roots.push(user);
            }
        }
        roots
    }
}

impl ExtensionSource for ExtensionLoader {
    fn load(&self, cwd: &Path) -> Vec<Extension> {
        let mut seen = HashSet::new();
        let mut extensions = Vec::new();

        for dir in self.roots(cwd).iter().flat_map(|root| dirs_in(root)) {
            match Extension::load(&dir) {
                Ok(extension) => {
                    if seen.insert(extension.name().to_string()) {
                        tracing::debug!(
                            name = extension.name(),
                            path = %dir.display(),
                            "Discovered extension"
                        );
                        extensions.push(extension);
                    }
                }
                Err(e) => tracing::warn!("Skipping extension: {e}"),
            }
        }

        extensions
    }
}

/// Keep the extensions requested with `--extensions`.
///
/// An empty request keeps everything and `none` disables every extension.
/// Names match case-insensitively; unknown names are reported and ignored.
pub fn filter_active(extensions: Vec<Extension>, requested: &[String]) -> Vec<Extension> {
    if requested.is_empty() {
        return extensions;
    }
    if matches!(requested, [only] if only.eq_ignore_ascii_case(NO_EXTENSIONS)) {
        return Vec::new();
    }

    let wanted: Vec<String> = requested.iter().map(|n| n.to_lowercase()).collect();
    for name in &wanted {
        if !extensions.iter().any(|e| e.name().to_lowercase() == *name) {
            tracing::warn!("Extension not found: {name}");
        }
    }

    extensions
        .into_iter()
        .filter(|e| wanted.contains(&e.name().to_lowercase()))
        .collect()
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
