// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt runner: from settings and credentials to one engine execution.
//!
//! This module provides:
//! - [`PromptRunner`] - Loads settings, extensions, and auth, then runs one prompt
//! - [`restrict_for_non_interactive`] - Strips destructive tools before headless runs
//! - [`RunError`] - Fatal runner failures

mod error;
mod restrict;

pub use error::RunError;
pub use restrict::restrict_for_non_interactive;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::auth::{select_auth_type, AuthValidator, EnvAuthValidator};
use crate::config::{RunConfig, RunOptions};
use crate::engine::{Engine, EngineSession};
use crate::env::Platform;
use crate::extension::{filter_active, Extension, ExtensionLoader, ExtensionSource};
use crate::settings::{FileSettingsSource, SettingsSource};

/// Returned after an interactive run finishes.
pub const INTERACTIVE_COMPLETE: &str = "Interactive session completed.";

/// Returned after a non-interactive run finishes.
pub const NON_INTERACTIVE_COMPLETE: &str = "Prompt executed successfully.";

/// Random hex token tying together the logs of one execution.
pub fn correlation_id() -> String {
    format!("{:016x}", fastrand::u64(..))
}

/// Runs a single prompt against an execution engine.
///
/// Collaborators are injected so each step can be replaced in tests:
/// ```ignore
/// let runner = PromptRunner::new(platform, engine)
///     .with_options(options);
/// let message = runner.generate("hello", false).await?;
/// ```
pub struct PromptRunner {
    platform: Arc<dyn Platform>,
    settings: Arc<dyn SettingsSource>,
    extensions: Arc<dyn ExtensionSource>,
    validator: Arc<dyn AuthValidator>,
    engine: Arc<dyn Engine>,
    options: RunOptions,
}

impl PromptRunner {
    /// Create a runner using the filesystem and environment behind `platform`.
    pub fn new(platform: Arc<dyn Platform>, engine: Arc<dyn Engine>) -> Self {
        Self {
            settings: Arc::new(FileSettingsSource::from_platform(&*platform)),
            extensions: Arc::new(ExtensionLoader::new(platform.home_dir())),
            validator: Arc::new(EnvAuthValidator::new(Arc::clone(&platform))),
            platform,
            engine,
            options: RunOptions::default(),
        }
    }

    pub fn with_settings_source(mut self, settings: Arc<dyn SettingsSource>) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_extension_source(mut self, extensions: Arc<dyn ExtensionSource>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_auth_validator(mut self, validator: Arc<dyn AuthValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Apply command-line overrides.
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the command-line overrides.
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    fn cwd(&self) -> Result<PathBuf, RunError> {
        self.platform.current_dir().map_err(|e| {
            RunError::Configuration(format!("Cannot determine working directory: {e}"))
        })
    }

    /// Discover installed extensions for the current directory.
    pub fn list_extensions(&self) -> Result<Vec<Extension>, RunError> {
        Ok(self.extensions.load(&self.cwd()?))
    }

    /// Run `prompt` once.
    ///
    /// Interactive execution is used when `interactive` is set or stdin is a
    /// terminal; otherwise the session first goes through
    /// [`restrict_for_non_interactive`]. Returns a confirmation message.
    pub async fn generate(&self, prompt: &str, interactive: bool) -> Result<String, RunError> {
        let cwd = self.cwd()?;

        let loaded = self.settings.load(&cwd);
        if !loaded.is_valid() {
            return Err(RunError::invalid_settings(&loaded.errors));
        }
        let settings = loaded.merged;

        let extensions = filter_active(self.extensions.load(&cwd), &self.options.extensions);

        let auth = select_auth_type(&*self.platform, &settings)
            .ok_or_else(|| RunError::missing_auth(&self.settings.user_settings_path()))?;
        debug!(%auth, "Using authentication method");
        if let Some(message) = self.validator.validate(auth) {
            return Err(RunError::Authentication(message));
        }

        let config = RunConfig::resolve(
            &self.options,
            &settings,
            &extensions,
            &*self.platform,
            prompt,
            &cwd,
        );
        let mut session = self.engine.create_session(config);
        session.initialize().await?;
        session.refresh_auth(auth).await?;

        if interactive || self.platform.stdin_is_terminal() {
            let question = resolve_question(prompt, &*session)?;
            debug!(%question, "Interactive prompt");
            self.engine
                .run_interactive(&*session, &question, &correlation_id())
                .await
                .map_err(|e| RunError::Execution(e.to_string()))?;
            return Ok(INTERACTIVE_COMPLETE.to_string());
        }

        if prompt.trim().is_empty() {
            return Err(RunError::Input(
                "No input provided via stdin or as a prompt argument.".to_string(),
            ));
        }

        let session = restrict_for_non_interactive(&*self.engine, session, auth).await?;
        self.engine
            .run_non_interactive(&*session, prompt, &correlation_id())
            .await
            .map_err(|e| RunError::Execution(e.to_string()))?;
        Ok(NON_INTERACTIVE_COMPLETE.to_string())
    }
}

/// The trimmed prompt, or the session's own question when the prompt is blank.
fn resolve_question(prompt: &str, session: &dyn EngineSession) -> Result<String, RunError> {
    let trimmed = prompt.trim();
    if !trimmed.is_empty() {
        return Ok(trimmed.to_string());
    }
    session
        .question()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            RunError::Input(
                "No question provided. Pass a prompt or use --prompt-interactive.".to_string(),
            )
        })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
