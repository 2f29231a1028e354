// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! An engine that reports what it would run instead of calling a model.

use std::io::Write;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{Engine, EngineError, EngineSession};
use crate::auth::AuthType;
use crate::config::RunConfig;

/// Session state for [`DryRunEngine`].
#[derive(Debug)]
pub struct DryRunSession {
    config: RunConfig,
    initialized: bool,
    auth: Option<AuthType>,
}

impl DryRunSession {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            initialized: false,
            auth: None,
        }
    }
}

#[async_trait]
impl EngineSession for DryRunSession {
    fn config(&self) -> &RunConfig {
        &self.config
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    async fn initialize(&mut self) -> Result<(), EngineError> {
        if !self.initialized {
            tracing::debug!(session = %self.config.session_id, "Initialized dry-run session");
            self.initialized = true;
        }
        Ok(())
    }

    async fn refresh_auth(&mut self, auth: AuthType) -> Result<(), EngineError> {
        self.auth = Some(auth);
        Ok(())
    }
}

/// Writes a plain-text report of the effective configuration and prompt.
///
/// An injected failure message makes every execution fail, which exercises
/// the caller's error path without a real backend.
pub struct DryRunEngine {
    output: Mutex<Box<dyn Write + Send>>,
    failure: Option<String>,
}

impl DryRunEngine {
    /// Report to stdout.
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    /// Report to an arbitrary writer.
    pub fn with_writer(output: Box<dyn Write + Send>) -> Self {
        Self {
            output: Mutex::new(output),
            failure: None,
        }
    }

    /// Fail every execution with `message`.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    fn report(
        &self,
        mode: &str,
        session: &dyn EngineSession,
        prompt: &str,
        prompt_id: &str,
    ) -> Result<(), EngineError> {
        if !session.is_initialized() {
            return Err(EngineError::Execution("session is not initialized".into()));
        }
        if let Some(message) = &self.failure {
            return Err(EngineError::Execution(message.clone()));
        }

        let config = session.config();
        let mut out = self.output.lock();
        write_report(&mut *out, mode, config, prompt, prompt_id)
            .map_err(|e| EngineError::Execution(format!("failed to write report: {e}")))
    }
}

fn write_report(
    out: &mut dyn Write,
    mode: &str,
    config: &RunConfig,
    prompt: &str,
    prompt_id: &str,
) -> std::io::Result<()> {
    writeln!(out, "mode: {mode}")?;
    writeln!(out, "session: {}", config.session_id)?;
    writeln!(out, "prompt-id: {prompt_id}")?;
    writeln!(out, "model: {}", config.model)?;
    writeln!(out, "approval-mode: {}", config.approval_mode.display_name())?;
    writeln!(out, "sandbox: {}", config.sandbox)?;
    writeln!(out, "extensions: {}", config.extensions.join(", "))?;
    writeln!(out, "excluded-tools: {}", config.exclude_tools.join(", "))?;
    writeln!(out, "prompt: {prompt}")?;
    out.flush()
}

#[async_trait]
impl Engine for DryRunEngine {
    fn create_session(&self, config: RunConfig) -> Box<dyn EngineSession> {
        Box::new(DryRunSession::new(config))
    }

    async fn run_non_interactive(
        &self,
        session: &dyn EngineSession,
        prompt: &str,
        prompt_id: &str,
    ) -> Result<(), EngineError> {
        self.report("non-interactive", session, prompt, prompt_id)
    }

    async fn run_interactive(
        &self,
        session: &dyn EngineSession,
        prompt: &str,
        prompt_id: &str,
    ) -> Result<(), EngineError> {
        self.report("interactive", session, prompt, prompt_id)
    }
}

#[cfg(test)]
#[path = "dry_run_tests.rs"]
mod tests;
