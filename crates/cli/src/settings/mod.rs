// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings files and their merged view.
//!
//! Settings come from three scopes, merged with precedence
//! user < workspace < system:
//!
//! - user: `~/.gemini/settings.json`
//! - workspace: `<cwd>/.gemini/settings.json`
//! - system: `GEMINI_CLI_SYSTEM_SETTINGS_PATH` or `/etc/gemini-cli/settings.json`

pub mod io;
pub mod loader;
pub mod schema;
pub mod scope;

pub use loader::{
    FileSettingsSource, LoadedSettings, SettingsFileError, SettingsLoader, SettingsPaths,
    SettingsSource,
};
pub use schema::{
    CheckpointingSettings, FileFilteringSettings, Settings, SettingsError, TelemetrySettings,
};
pub use scope::SettingScope;

/// Name of the per-user and per-project configuration directory.
pub const GEMINI_DIR: &str = ".gemini";

/// Settings file name inside [`GEMINI_DIR`].
pub const SETTINGS_FILE: &str = "settings.json";
