// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The command provider capability.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use super::SlashCommand;

/// Provider-specific trouble while producing commands.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid command file pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("did not finish within {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Provider(String),
}

/// Asynchronously produces the commands of one source.
#[async_trait]
pub trait CommandLoader: Send + Sync {
    /// Identity used in diagnostics.
    fn name(&self) -> &str;

    async fn load_commands(&self) -> Result<Vec<SlashCommand>, LoaderError>;
}
