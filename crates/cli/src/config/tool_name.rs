// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in tool names for type-safe tool identification.

use std::fmt;

/// Built-in tools the execution engine can offer to the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolName {
    // Filesystem reads
    ReadFile,
    ReadManyFiles,
    ListDirectory,
    Glob,
    SearchFileContent,

    // Destructive
    Shell,
    Edit,
    WriteFile,

    // Network
    WebFetch,
    WebSearch,

    // Other
    SaveMemory,
}

impl ToolName {
    /// Tools that can run commands or change files.
    pub const DESTRUCTIVE: [ToolName; 3] = [Self::Shell, Self::Edit, Self::WriteFile];

    /// Get the name the engine registers the tool under.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReadFile => "read_file",
            Self::ReadManyFiles => "read_many_files",
            Self::ListDirectory => "list_directory",
            Self::Glob => "glob",
            Self::SearchFileContent => "search_file_content",
            Self::Shell => "run_shell_command",
            Self::Edit => "replace",
            Self::WriteFile => "write_file",
            Self::WebFetch => "web_fetch",
            Self::WebSearch => "google_web_search",
            Self::SaveMemory => "save_memory",
        }
    }

    /// Whether the tool can shell out or modify files.
    pub const fn is_destructive(&self) -> bool {
        matches!(self, Self::Shell | Self::Edit | Self::WriteFile)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "tool_name_tests.rs"]
mod tests;
