// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings scope definitions.

use std::fmt;

/// Where a settings file lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingScope {
    /// Per-user settings (`~/.gemini/settings.json`)
    User,
    /// Project settings (`<cwd>/.gemini/settings.json`)
    Workspace,
    /// Machine-wide settings, which override everything else
    System,
}

impl SettingScope {
    /// Return all scopes in precedence order (lowest to highest).
    pub fn all() -> &'static [SettingScope] {
        &[Self::User, Self::Workspace, Self::System]
    }

    /// Lowercase label used in diagnostics.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Workspace => "workspace",
            Self::System => "system",
        }
    }
}

impl fmt::Display for SettingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
