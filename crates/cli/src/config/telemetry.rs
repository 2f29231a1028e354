// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Telemetry configuration resolved from flags and settings.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::settings::TelemetrySettings;

/// Default OTLP collector endpoint.
pub const DEFAULT_OTLP_ENDPOINT: &str = "http://localhost:4317";

/// Where telemetry is exported.
#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryTarget {
    /// Local collector
    #[default]
    Local,
    /// Google Cloud
    Gcp,
}

/// Effective telemetry settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub target: TelemetryTarget,
    pub otlp_endpoint: String,
    pub log_prompts: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            target: TelemetryTarget::Local,
            otlp_endpoint: DEFAULT_OTLP_ENDPOINT.to_string(),
            log_prompts: true,
        }
    }
}

/// Command-line telemetry overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TelemetryOverrides {
    pub enabled: Option<bool>,
    pub target: Option<TelemetryTarget>,
    pub otlp_endpoint: Option<String>,
    pub log_prompts: Option<bool>,
}

impl TelemetryConfig {
    /// Resolve each field from flags, then settings, then defaults.
    pub fn resolve(overrides: &TelemetryOverrides, settings: &TelemetrySettings) -> Self {
        let defaults = Self::default();
        Self {
            enabled: overrides
                .enabled
                .or(settings.enabled)
                .unwrap_or(defaults.enabled),
            target: overrides
                .target
                .or(settings.target)
                .unwrap_or(defaults.target),
            otlp_endpoint: overrides
                .otlp_endpoint
                .clone()
                .or_else(|| settings.otlp_endpoint.clone())
                .unwrap_or(defaults.otlp_endpoint),
            log_prompts: overrides
                .log_prompts
                .or(settings.log_prompts)
                .unwrap_or(defaults.log_prompts),
        }
    }
}

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod tests;
