// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Approval mode enum matching the `--approval-mode` flag.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How tool calls are confirmed.
///
/// - `Default`: Confirm every potentially destructive tool call
/// - `AutoEdit`: Auto-approve file edits, confirm everything else
/// - `Yolo`: Auto-approve every tool call
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApprovalMode {
    /// Confirm destructive tool calls
    #[default]
    Default,
    /// Auto-approve file edits
    AutoEdit,
    /// Auto-approve everything
    Yolo,
}

impl ApprovalMode {
    /// Check if this mode approves all tool calls without prompting.
    pub fn approves_all(&self) -> bool {
        matches!(self, Self::Yolo)
    }

    /// Display name used in reports and logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AutoEdit => "auto edit",
            Self::Yolo => "yolo",
        }
    }
}

#[cfg(test)]
#[path = "approval_tests.rs"]
mod tests;
