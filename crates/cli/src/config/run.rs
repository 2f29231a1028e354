// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The per-run configuration value object.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::approval::ApprovalMode;
use super::telemetry::{TelemetryConfig, TelemetryOverrides};
use super::tool_name::ToolName;
use crate::env::{
    Platform, DEBUG, GEMINI_MODEL, GEMINI_SANDBOX, GEMINI_SANDBOX_IMAGE, PROXY_VARS, TERM_PROGRAM,
};
use crate::extension::Extension;
use crate::settings::Settings;

/// Model used when neither flags, environment, nor settings choose one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Command-line overrides for a run.
///
/// `None` and empty values defer to the environment and settings.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub model: Option<String>,
    pub prompt_interactive: Option<String>,
    pub sandbox: Option<bool>,
    pub sandbox_image: Option<String>,
    pub debug: bool,
    pub all_files: bool,
    pub show_memory_usage: bool,
    pub approval_mode: Option<ApprovalMode>,
    pub telemetry: TelemetryOverrides,
    pub checkpointing: bool,
    pub experimental_acp: bool,
    pub allowed_mcp_server_names: Vec<String>,
    pub extensions: Vec<String>,
    pub list_extensions: bool,
    pub ide_mode: Option<bool>,
    pub proxy: Option<String>,
}

/// Everything the execution engine needs for one run.
///
/// Built once per run (and once more by the non-interactive restriction
/// pass). The engine takes it by value and only hands out shared references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub session_id: String,
    pub cwd: PathBuf,
    pub model: String,
    pub sandbox: bool,
    pub sandbox_image: Option<String>,
    pub debug: bool,
    /// Prompt text the engine can fall back to when asked for a question
    pub question: Option<String>,
    /// Whether the question came from `--prompt-interactive`
    pub prompt_interactive: bool,
    pub all_files: bool,
    pub show_memory_usage: bool,
    pub respect_git_ignore: bool,
    /// Names of active extensions
    pub extensions: Vec<String>,
    pub allowed_mcp_server_names: Vec<String>,
    /// Tool names the engine must not offer, without duplicates
    pub exclude_tools: Vec<String>,
    pub approval_mode: ApprovalMode,
    pub telemetry: TelemetryConfig,
    pub checkpointing: bool,
    pub proxy: Option<String>,
    pub experimental_acp: bool,
    pub list_extensions: bool,
    pub ide_mode: bool,
}

impl RunConfig {
    /// Merge flags, environment, settings, and active extensions.
    ///
    /// Precedence is flags > environment > settings > defaults. Approval
    /// defaults to [`ApprovalMode::Yolo`]; a fresh session id is generated.
    pub fn resolve(
        options: &RunOptions,
        settings: &Settings,
        extensions: &[Extension],
        platform: &dyn Platform,
        prompt: &str,
        cwd: &Path,
    ) -> Self {
        let model = options
            .model
            .clone()
            .or_else(|| platform.var(GEMINI_MODEL))
            .or_else(|| settings.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let sandbox = options
            .sandbox
            .or_else(|| platform.var(GEMINI_SANDBOX).map(|v| sandbox_enabled(&v)))
            .or(settings.sandbox)
            .unwrap_or(false);
        let sandbox_image = options
            .sandbox_image
            .clone()
            .or_else(|| platform.var(GEMINI_SANDBOX_IMAGE))
            .or_else(|| settings.sandbox_image.clone());

        let trimmed = prompt.trim();
        let question = options
            .prompt_interactive
            .clone()
            .or_else(|| (!trimmed.is_empty()).then(|| trimmed.to_string()));

        let allowed_mcp_server_names = if options.allowed_mcp_server_names.is_empty() {
            settings.allow_mcp_servers.clone()
        } else {
            options.allowed_mcp_server_names.clone()
        };

        let exclude_tools = unique(
            settings.exclude_tools.iter().cloned().chain(
                extensions
                    .iter()
                    .flat_map(|e| e.config.exclude_tools.iter().cloned()),
            ),
        );

        let ide_mode = options.ide_mode.or(settings.ide_mode).unwrap_or(false)
            && platform.var(TERM_PROGRAM).as_deref() == Some("vscode")
            && !sandbox;

        let proxy = options
            .proxy
            .clone()
            .or_else(|| PROXY_VARS.iter().find_map(|name| platform.var(name)));

        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            cwd: cwd.to_path_buf(),
            model,
            sandbox,
            sandbox_image,
            debug: options.debug || platform.flag(DEBUG),
            question,
            prompt_interactive: options.prompt_interactive.is_some(),
            all_files: options.all_files,
            show_memory_usage: options.show_memory_usage,
            respect_git_ignore: settings.file_filtering.respect_git_ignore.unwrap_or(true),
            extensions: extensions.iter().map(|e| e.name().to_string()).collect(),
            allowed_mcp_server_names,
            exclude_tools,
            approval_mode: options
                .approval_mode
                .or(settings.approval_mode)
                .unwrap_or(ApprovalMode::Yolo),
            telemetry: TelemetryConfig::resolve(&options.telemetry, &settings.telemetry),
            checkpointing: options.checkpointing
                || settings.checkpointing.enabled.unwrap_or(false),
            proxy,
            experimental_acp: options.experimental_acp,
            list_extensions: options.list_extensions,
            ide_mode,
        }
    }

    /// Copy of this configuration that can no longer shell out or write files.
    ///
    /// Destructive tools are added to the exclusion list and approval is
    /// forced to [`ApprovalMode::Yolo`], so the remaining tools run without
    /// confirmation. Everything else, including the session id, is kept.
    pub fn restricted(&self) -> Self {
        let exclude_tools = unique(
            self.exclude_tools
                .iter()
                .cloned()
                .chain(ToolName::DESTRUCTIVE.iter().map(|t| t.as_str().to_string())),
        );
        Self {
            exclude_tools,
            approval_mode: ApprovalMode::Yolo,
            ..self.clone()
        }
    }

    /// Whether `tool` is excluded from this run.
    pub fn is_tool_excluded(&self, tool: &str) -> bool {
        self.exclude_tools.iter().any(|t| t == tool)
    }
}

/// `GEMINI_SANDBOX` accepts booleans or a sandbox command name.
fn sandbox_enabled(value: &str) -> bool {
    !(value == "0" || value.eq_ignore_ascii_case("false"))
}

/// Collect names, dropping repeats and keeping first-seen order.
fn unique(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
