// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Published command catalog.

use std::ops::Deref;
use std::sync::Arc;

use super::SlashCommand;

/// Immutable snapshot of the commands published by a
/// [`CommandService`](super::CommandService).
///
/// Cloning is cheap and shares the snapshot. There is no way to change a
/// snapshot once published:
///
/// ```compile_fail
/// use promptline::commands::CommandService;
///
/// let service = CommandService::new(Vec::new());
/// let mut catalog = service.commands();
/// catalog[0] = catalog[0].clone();
/// ```
#[derive(Clone, Debug)]
pub struct CommandCatalog {
    commands: Arc<[SlashCommand]>,
}

impl CommandCatalog {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlashCommand> {
        self.commands.iter()
    }

    /// Look up a command by name, without the leading `/`.
    pub fn get(&self, name: &str) -> Option<&SlashCommand> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Command names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name.as_str())
    }
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::from(Vec::new())
    }
}

impl From<Vec<SlashCommand>> for CommandCatalog {
    fn from(commands: Vec<SlashCommand>) -> Self {
        Self {
            commands: commands.into(),
        }
    }
}

impl Deref for CommandCatalog {
    type Target = [SlashCommand];

    fn deref(&self) -> &Self::Target {
        &self.commands
    }
}

impl<'a> IntoIterator for &'a CommandCatalog {
    type Item = &'a SlashCommand;
    type IntoIter = std::slice::Iter<'a, SlashCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
