// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-file settings loading with precedence.
//!
//! Loads settings from every scope and merges them with correct precedence:
//! 1. User (~/.gemini/settings.json) - lowest priority
//! 2. Workspace (.gemini/settings.json) - medium priority
//! 3. System (/etc/gemini-cli/settings.json) - highest priority

use super::schema::Settings;
use super::scope::SettingScope;
use super::{GEMINI_DIR, SETTINGS_FILE};
use crate::env::{Platform, GEMINI_CLI_SYSTEM_SETTINGS_PATH};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default system settings location.
pub const DEFAULT_SYSTEM_SETTINGS_PATH: &str = "/etc/gemini-cli/settings.json";

/// A settings file that exists but could not be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsFileError {
    pub scope: SettingScope,
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for SettingsFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error in {}: {}", self.path.display(), self.message)
    }
}

/// Result of loading every settings scope.
#[derive(Clone, Debug, Default)]
pub struct LoadedSettings {
    /// All readable files merged in precedence order
    pub merged: Settings,
    /// Files that exist but failed to read or parse
    pub errors: Vec<SettingsFileError>,
}

impl LoadedSettings {
    /// Whether every existing settings file loaded cleanly.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Source of merged settings for a working directory.
pub trait SettingsSource: Send + Sync {
    /// Load and merge settings that apply to `cwd`.
    fn load(&self, cwd: &Path) -> LoadedSettings;

    /// Path of the user settings file, named in authentication errors.
    fn user_settings_path(&self) -> PathBuf;
}

/// Paths to search for settings files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsPaths {
    /// User settings (~/.gemini/settings.json)
    pub user: Option<PathBuf>,
    /// Workspace settings (.gemini/settings.json)
    pub workspace: Option<PathBuf>,
    /// System settings
    pub system: Option<PathBuf>,
}

impl SettingsPaths {
    /// Resolve settings paths for a working directory.
    ///
    /// When `cwd` is the home directory the workspace file is the user file,
    /// so it is only loaded once, as user settings.
    pub fn resolve(home: Option<&Path>, cwd: &Path, system: PathBuf) -> Self {
        let user = home.map(|h| h.join(GEMINI_DIR).join(SETTINGS_FILE));
        let workspace = cwd.join(GEMINI_DIR).join(SETTINGS_FILE);
        let workspace = (user.as_ref() != Some(&workspace)).then_some(workspace);

        Self {
            user,
            workspace,
            system: Some(system),
        }
    }

    /// Configured paths in precedence order (lowest to highest).
    pub fn in_precedence_order(&self) -> impl Iterator<Item = (SettingScope, &Path)> {
        SettingScope::all().iter().filter_map(move |scope| {
            let path = match scope {
                SettingScope::User => self.user.as_deref(),
                SettingScope::Workspace => self.workspace.as_deref(),
                SettingScope::System => self.system.as_deref(),
            };
            path.map(|p| (*scope, p))
        })
    }
}

/// Loads and merges settings from multiple files.
pub struct SettingsLoader {
    paths: SettingsPaths,
}

impl SettingsLoader {
    /// Create a new settings loader.
    pub fn new(paths: SettingsPaths) -> Self {
        Self { paths }
    }

    /// Load and merge all settings files.
    ///
    /// Missing files are skipped. Files that cannot be checked, read, or
    /// parsed are reported in [`LoadedSettings::errors`] and contribute
    /// nothing to the merged view.
    pub fn load(&self) -> LoadedSettings {
        let mut loaded = LoadedSettings::default();

        for (scope, path) in self.paths.in_precedence_order() {
            match path.try_exists() {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    loaded.errors.push(SettingsFileError {
                        scope,
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    });
                    continue;
                }
            }
            match Settings::load(path) {
                Ok(file_settings) => {
                    tracing::debug!(%scope, path = %path.display(), "Loaded settings");
                    loaded.merged.merge(file_settings);
                }
                Err(e) => loaded.errors.push(SettingsFileError {
                    scope,
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }),
            }
        }

        loaded
    }
}

/// Settings read from the filesystem locations of every scope.
#[derive(Clone, Debug)]
pub struct FileSettingsSource {
    home: Option<PathBuf>,
    system_path: PathBuf,
}

impl FileSettingsSource {
    /// Create a source with explicit home and system settings locations.
    pub fn new(home: Option<PathBuf>, system_path: PathBuf) -> Self {
        Self { home, system_path }
    }

    /// Resolve locations from `HOME` and `GEMINI_CLI_SYSTEM_SETTINGS_PATH`.
    pub fn from_platform(platform: &dyn Platform) -> Self {
        let system_path = platform
            .var(GEMINI_CLI_SYSTEM_SETTINGS_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSTEM_SETTINGS_PATH));
        Self::new(platform.home_dir(), system_path)
    }
}

impl SettingsSource for FileSettingsSource {
    fn load(&self, cwd: &Path) -> LoadedSettings {
        let paths = SettingsPaths::resolve(self.home.as_deref(), cwd, self.system_path.clone());
        SettingsLoader::new(paths).load()
    }

    fn user_settings_path(&self) -> PathBuf {
        match &self.home {
            Some(home) => home.join(GEMINI_DIR).join(SETTINGS_FILE),
            None => Path::new("~").join(GEMINI_DIR).join(SETTINGS_FILE),
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
