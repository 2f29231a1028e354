// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The prompt execution engine seam.
//!
//! The runner never talks to a model directly. It creates an
//! [`EngineSession`] from a [`RunConfig`], initializes it, refreshes its
//! authentication, and hands it back to the [`Engine`] for interactive or
//! non-interactive execution.

mod dry_run;

pub use dry_run::DryRunEngine;

use async_trait::async_trait;

use crate::auth::AuthType;
use crate::config::{ApprovalMode, RunConfig};

/// Errors reported by an execution engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("initialization failed: {0}")]
    Initialization(String),

    #[error("authentication refresh failed: {0}")]
    Auth(String),

    #[error("{0}")]
    Execution(String),
}

/// Configuration-bound engine state for one run.
#[async_trait]
pub trait EngineSession: Send + Sync {
    /// The configuration this session was created from.
    fn config(&self) -> &RunConfig;

    /// Whether [`initialize`](Self::initialize) has completed.
    fn is_initialized(&self) -> bool;

    /// Prepare tools and context. Calling it again is a no-op.
    async fn initialize(&mut self) -> Result<(), EngineError>;

    /// Acquire credentials for `auth`.
    async fn refresh_auth(&mut self, auth: AuthType) -> Result<(), EngineError>;

    fn approval_mode(&self) -> ApprovalMode {
        self.config().approval_mode
    }

    fn session_id(&self) -> &str {
        &self.config().session_id
    }

    /// Question to ask when the caller supplied no prompt.
    fn question(&self) -> Option<&str> {
        self.config().question.as_deref()
    }
}

/// Creates sessions and executes prompts against them.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Create an uninitialized session owning `config`.
    fn create_session(&self, config: RunConfig) -> Box<dyn EngineSession>;

    /// Run a single prompt to completion without user interaction.
    async fn run_non_interactive(
        &self,
        session: &dyn EngineSession,
        prompt: &str,
        prompt_id: &str,
    ) -> Result<(), EngineError>;

    /// Start an interactive conversation seeded with `prompt`.
    async fn run_interactive(
        &self,
        session: &dyn EngineSession,
        prompt: &str,
        prompt_id: &str,
    ) -> Result<(), EngineError>;
}
