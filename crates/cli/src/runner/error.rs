// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced by the prompt runner.

use std::path::Path;

use crate::engine::EngineError;
use crate::env::GEMINI_API_KEY;
use crate::settings::SettingsFileError;

/// Fatal runner failures, worded for direct display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// Settings files could not be used.
    #[error("{0}")]
    Configuration(String),

    /// No usable authentication method.
    #[error("{0}")]
    Authentication(String),

    /// No prompt or question to run.
    #[error("{0}")]
    Input(String),

    /// The execution engine failed.
    #[error("Failed to execute prompt: {0}")]
    Execution(String),
}

impl RunError {
    /// One diagnostic naming every broken settings file.
    pub fn invalid_settings(errors: &[SettingsFileError]) -> Self {
        let mut lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
        lines.push("Please fix the settings file(s) and try again.".to_string());
        Self::Configuration(lines.join("\n"))
    }

    /// No credential variable and no configured method.
    pub fn missing_auth(settings_path: &Path) -> Self {
        Self::Authentication(format!(
            "Please set an Auth method in your {} or specify the {GEMINI_API_KEY} \
             environment variable before running.",
            settings_path.display()
        ))
    }
}

impl From<EngineError> for RunError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Auth(_) => Self::Authentication(err.to_string()),
            EngineError::Initialization(_) | EngineError::Execution(_) => {
                Self::Execution(err.to_string())
            }
        }
    }
}
