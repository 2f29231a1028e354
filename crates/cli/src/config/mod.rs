// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration handed to the execution engine.
//!
//! This module provides:
//! - [`RunConfig`] - Merged configuration from flags, environment, and settings
//! - [`RunOptions`] - Command-line overrides
//! - [`ApprovalMode`] - Tool approval policy
//! - [`ToolName`] - Built-in tool identifiers

mod approval;
mod run;
mod telemetry;
mod tool_name;

pub use approval::ApprovalMode;
pub use run::{RunConfig, RunOptions, DEFAULT_MODEL};
pub use telemetry::{
    TelemetryConfig, TelemetryOverrides, TelemetryTarget, DEFAULT_OTLP_ENDPOINT,
};
pub use tool_name::ToolName;
