// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Authentication method selection and validation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::env::{
    Platform, CLOUD_SHELL, GEMINI_API_KEY, GOOGLE_API_KEY, GOOGLE_CLOUD_LOCATION,
    GOOGLE_CLOUD_PROJECT, GOOGLE_GENAI_USE_GCA, GOOGLE_GENAI_USE_VERTEXAI,
};
use crate::settings::Settings;

/// Supported authentication methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthType {
    /// Personal Google account login
    #[serde(rename = "oauth-personal")]
    LoginWithGoogle,
    /// Gemini API key
    #[serde(rename = "gemini-api-key")]
    UseGemini,
    /// Vertex AI credentials
    #[serde(rename = "vertex-ai")]
    UseVertexAi,
    /// Ambient Cloud Shell credentials
    #[serde(rename = "cloud-shell")]
    CloudShell,
}

impl AuthType {
    /// Settings-file identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoginWithGoogle => "oauth-personal",
            Self::UseGemini => "gemini-api-key",
            Self::UseVertexAi => "vertex-ai",
            Self::CloudShell => "cloud-shell",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick exactly one authentication method.
///
/// Credential variables are checked first, in order:
/// `GEMINI_API_KEY`, `GOOGLE_GENAI_USE_VERTEXAI`, `GOOGLE_GENAI_USE_GCA`,
/// `CLOUD_SHELL`. Without any of them the settings' `selectedAuthType` is
/// used. Returns `None` when nothing selects a method.
pub fn select_auth_type(platform: &dyn Platform, settings: &Settings) -> Option<AuthType> {
    if platform.var(GEMINI_API_KEY).is_some() {
        Some(AuthType::UseGemini)
    } else if platform.flag(GOOGLE_GENAI_USE_VERTEXAI) {
        Some(AuthType::UseVertexAi)
    } else if platform.flag(GOOGLE_GENAI_USE_GCA) {
        Some(AuthType::LoginWithGoogle)
    } else if platform.flag(CLOUD_SHELL) {
        Some(AuthType::CloudShell)
    } else {
        settings.selected_auth_type
    }
}

/// Checks that a selected method has what it needs to authenticate.
pub trait AuthValidator: Send + Sync {
    /// Returns a user-facing message when `auth` cannot be used, `None` otherwise.
    fn validate(&self, auth: AuthType) -> Option<String>;
}

/// Validates authentication methods against environment credentials.
#[derive(Clone)]
pub struct EnvAuthValidator {
    platform: Arc<dyn Platform>,
}

impl EnvAuthValidator {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self { platform }
    }
}

impl AuthValidator for EnvAuthValidator {
    fn validate(&self, auth: AuthType) -> Option<String> {
        match auth {
            AuthType::LoginWithGoogle | AuthType::CloudShell => None,
            AuthType::UseGemini => self.platform.var(GEMINI_API_KEY).is_none().then(|| {
                format!(
                    "{GEMINI_API_KEY} environment variable not found. \
                     Add that to your environment and try again."
                )
            }),
            AuthType::UseVertexAi => {
                let has_project = self.platform.var(GOOGLE_CLOUD_PROJECT).is_some()
                    && self.platform.var(GOOGLE_CLOUD_LOCATION).is_some();
                let has_express_key = self.platform.var(GOOGLE_API_KEY).is_some();
                (!has_project && !has_express_key).then(|| {
                    format!(
                        "When using Vertex AI, you must specify either:\n\
                         - {GOOGLE_CLOUD_PROJECT} and {GOOGLE_CLOUD_LOCATION} environment variables.\n\
                         - {GOOGLE_API_KEY} environment variable (if using express mode).\n\
                         Update your environment and try again."
                    )
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
