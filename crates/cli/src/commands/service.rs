// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent aggregation of command loaders into one catalog.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use parking_lot::RwLock;
use tracing::{debug, warn};

use super::{CommandCatalog, CommandLoader, LoaderError, SlashCommand};

/// Channel for non-fatal failures.
pub trait Diagnostics: Send + Sync {
    fn report(&self, message: &str, detail: &str);
}

/// Reports failures as `tracing` warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, message: &str, detail: &str) {
        warn!(detail, "{message}");
    }
}

/// Owns an ordered list of loaders and publishes the merged result.
///
/// The catalog starts empty. Each [`load`](Self::load) runs every loader
/// concurrently, waits for all of them to settle, and replaces the catalog
/// wholesale. Failed loaders are reported through [`Diagnostics`] and
/// contribute nothing.
///
/// Commands are merged in registration order: a name keeps the position
/// where it was first seen and the content of the last loader that
/// produced it.
pub struct CommandService {
    loaders: Vec<Arc<dyn CommandLoader>>,
    diagnostics: Arc<dyn Diagnostics>,
    loader_timeout: Option<Duration>,
    catalog: RwLock<CommandCatalog>,
}

impl CommandService {
    pub fn new(loaders: Vec<Arc<dyn CommandLoader>>) -> Self {
        Self {
            loaders,
            diagnostics: Arc::new(TracingDiagnostics),
            loader_timeout: None,
            catalog: RwLock::new(CommandCatalog::default()),
        }
    }

    /// Create a service and load it once.
    pub async fn create(loaders: Vec<Arc<dyn CommandLoader>>) -> Self {
        let service = Self::new(loaders);
        service.load().await;
        service
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Treat a loader that has not settled after `timeout` as failed.
    pub fn with_loader_timeout(mut self, timeout: Duration) -> Self {
        self.loader_timeout = Some(timeout);
        self
    }

    /// Run every loader and publish the merged catalog.
    pub async fn load(&self) {
        let results = join_all(self.loaders.iter().map(|l| self.run_loader(l.as_ref()))).await;

        let mut merged: Vec<SlashCommand> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for (loader, result) in self.loaders.iter().zip(results) {
            match result {
                Ok(commands) => {
                    debug!(loader = loader.name(), count = commands.len(), "Loader settled");
                    for command in commands {
                        match positions.get(&command.name) {
                            Some(&index) => merged[index] = command,
                            None => {
                                positions.insert(command.name.clone(), merged.len());
                                merged.push(command);
                            }
                        }
                    }
                }
                Err(err) => self.diagnostics.report(
                    &format!("Command loader '{}' failed", loader.name()),
                    &err.to_string(),
                ),
            }
        }

        *self.catalog.write() = CommandCatalog::from(merged);
    }

    /// The most recently published catalog. Empty before the first load.
    pub fn commands(&self) -> CommandCatalog {
        self.catalog.read().clone()
    }

    async fn run_loader(
        &self,
        loader: &dyn CommandLoader,
    ) -> Result<Vec<SlashCommand>, LoaderError> {
        match self.loader_timeout {
            Some(limit) => tokio::time::timeout(limit, loader.load_commands())
                .await
                .unwrap_or(Err(LoaderError::Timeout(limit))),
            None => loader.load_commands().await,
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
