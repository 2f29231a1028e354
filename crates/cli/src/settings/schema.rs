// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings file schema.

use super::io::parse_json5_or_json;
use crate::auth::AuthType;
use crate::config::{ApprovalMode, TelemetryTarget};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Failure to read or parse one settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Telemetry section of a settings file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<TelemetryTarget>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otlp_endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_prompts: Option<bool>,
}

impl TelemetrySettings {
    fn merge(&mut self, other: Self) {
        if other.enabled.is_some() {
            self.enabled = other.enabled;
        }
        if other.target.is_some() {
            self.target = other.target;
        }
        if other.otlp_endpoint.is_some() {
            self.otlp_endpoint = other.otlp_endpoint;
        }
        if other.log_prompts.is_some() {
            self.log_prompts = other.log_prompts;
        }
    }
}

/// Checkpointing section of a settings file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// File filtering section of a settings file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileFilteringSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respect_git_ignore: Option<bool>,
}

/// Full settings file schema.
///
/// This is permissive - unknown fields are kept in `extra` so newer settings
/// files still load.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Model identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Run tools inside a sandbox
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<bool>,

    /// Sandbox image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox_image: Option<String>,

    /// Authentication method used when no credential variable is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_auth_type: Option<AuthType>,

    /// Tool approval mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_mode: Option<ApprovalMode>,

    /// Tools that must never be offered to the model
    #[serde(default)]
    pub exclude_tools: Vec<String>,

    /// External tool servers allowed to start
    #[serde(default, rename = "allowMCPServers")]
    pub allow_mcp_servers: Vec<String>,

    #[serde(default)]
    pub telemetry: TelemetrySettings,

    #[serde(default)]
    pub checkpointing: CheckpointingSettings,

    #[serde(default)]
    pub file_filtering: FileFilteringSettings,

    /// IDE integration mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ide_mode: Option<bool>,

    /// Capture unknown fields for forward compatibility
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Settings {
    /// Load settings from a JSON/JSON5 file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse settings from a JSON/JSON5 string.
    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        Ok(parse_json5_or_json(content)?)
    }

    /// Merge another settings file on top of this one.
    ///
    /// Set scalars override, non-empty lists replace, and the telemetry
    /// section merges field by field.
    pub fn merge(&mut self, other: Self) {
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.sandbox.is_some() {
            self.sandbox = other.sandbox;
        }
        if other.sandbox_image.is_some() {
            self.sandbox_image = other.sandbox_image;
        }
        if other.selected_auth_type.is_some() {
            self.selected_auth_type = other.selected_auth_type;
        }
        if other.approval_mode.is_some() {
            self.approval_mode = other.approval_mode;
        }
        if !other.exclude_tools.is_empty() {
            self.exclude_tools = other.exclude_tools;
        }
        if !other.allow_mcp_servers.is_empty() {
            self.allow_mcp_servers = other.allow_mcp_servers;
        }
        self.telemetry.merge(other.telemetry);
        if other.checkpointing.enabled.is_some() {
            self.checkpointing = other.checkpointing;
        }
        if other.file_filtering.respect_git_ignore.is_some() {
            self.file_filtering = other.file_filtering;
        }
        if other.ide_mode.is_some() {
            self.ide_mode = other.ide_mode;
        }

        for (key, value) in other.extra {
            self.extra.insert(key, value);
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
