// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment access.
//!
//! All environment variables, the working directory, and terminal detection
//! go through the [`Platform`] trait so the runner and loaders can be driven
//! by a [`FixedPlatform`] in tests instead of the real process state.

use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::PathBuf;

/// `GEMINI_API_KEY`: API key for the Gemini API.
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
/// `GOOGLE_GENAI_USE_VERTEXAI`: Select Vertex AI authentication.
pub const GOOGLE_GENAI_USE_VERTEXAI: &str = "GOOGLE_GENAI_USE_VERTEXAI";
/// `GOOGLE_GENAI_USE_GCA`: Select Google account login.
pub const GOOGLE_GENAI_USE_GCA: &str = "GOOGLE_GENAI_USE_GCA";
/// `CLOUD_SHELL`: Set when running inside Cloud Shell.
pub const CLOUD_SHELL: &str = "CLOUD_SHELL";
/// `GOOGLE_CLOUD_PROJECT`: Vertex AI project.
pub const GOOGLE_CLOUD_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";
/// `GOOGLE_CLOUD_LOCATION`: Vertex AI location.
pub const GOOGLE_CLOUD_LOCATION: &str = "GOOGLE_CLOUD_LOCATION";
/// `GOOGLE_API_KEY`: Vertex AI express mode key.
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
/// `GEMINI_MODEL`: Model override below the command line.
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
/// `GEMINI_SANDBOX`: Enable sandboxing (`true`, `1`, or a sandbox command).
pub const GEMINI_SANDBOX: &str = "GEMINI_SANDBOX";
/// `GEMINI_SANDBOX_IMAGE`: Sandbox image reference.
pub const GEMINI_SANDBOX_IMAGE: &str = "GEMINI_SANDBOX_IMAGE";
/// `GEMINI_CLI_SYSTEM_SETTINGS_PATH`: System settings file override.
pub const GEMINI_CLI_SYSTEM_SETTINGS_PATH: &str = "GEMINI_CLI_SYSTEM_SETTINGS_PATH";
/// `DEBUG`: Enable debug mode.
pub const DEBUG: &str = "DEBUG";
/// `TERM_PROGRAM`: Terminal host, used for IDE mode detection.
pub const TERM_PROGRAM: &str = "TERM_PROGRAM";
/// `HOME`: User's home directory.
pub const HOME: &str = "HOME";

/// Proxy variables in lookup order.
pub const PROXY_VARS: &[&str] = &["HTTPS_PROXY", "https_proxy", "HTTP_PROXY", "http_proxy"];

/// Process-level state the runner depends on.
pub trait Platform: Send + Sync {
    /// Look up an environment variable. Empty values count as unset.
    fn var(&self, name: &str) -> Option<String>;

    /// Current working directory.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Whether stdin is attached to an interactive terminal.
    fn stdin_is_terminal(&self) -> bool;

    /// User's home directory from `HOME`.
    fn home_dir(&self) -> Option<PathBuf> {
        self.var(HOME).map(PathBuf::from)
    }

    /// Boolean-ish variable: `1` or `true` (any case).
    fn flag(&self, name: &str) -> bool {
        self.var(name)
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
    }
}

/// The real process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemPlatform;

impl Platform for SystemPlatform {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn stdin_is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }
}

/// A platform with fixed variables, working directory, and terminal state.
#[derive(Clone, Debug, Default)]
pub struct FixedPlatform {
    vars: HashMap<String, String>,
    cwd: PathBuf,
    terminal: bool,
}

impl FixedPlatform {
    /// Create a platform rooted at `cwd` with no variables and no terminal.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            vars: HashMap::new(),
            cwd: cwd.into(),
            terminal: false,
        }
    }

    /// Set an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Set whether stdin reports as a terminal.
    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }
}

impl Platform for FixedPlatform {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn stdin_is_terminal(&self) -> bool {
        self.terminal
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
