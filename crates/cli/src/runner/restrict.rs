// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool restriction for non-interactive runs.

use tracing::debug;

use super::RunError;
use crate::auth::AuthType;
use crate::engine::{Engine, EngineSession};

/// Make sure a non-interactive run cannot shell out, edit, or write files
/// unless full auto-approval was already granted.
///
/// A session that already approves everything is only initialized (if it
/// was not yet) and returned unchanged. Any other session is replaced by a
/// new one built from [`RunConfig::restricted`](crate::config::RunConfig::restricted),
/// initialized and authenticated with `auth`.
pub async fn restrict_for_non_interactive(
    engine: &dyn Engine,
    mut session: Box<dyn EngineSession>,
    auth: AuthType,
) -> Result<Box<dyn EngineSession>, RunError> {
    if session.approval_mode().approves_all() {
        if !session.is_initialized() {
            session.initialize().await?;
        }
        return Ok(session);
    }

    let restricted = session.config().restricted();
    debug!(
        excluded = ?restricted.exclude_tools,
        "Restricting tools for non-interactive run"
    );

    let mut restricted_session = engine.create_session(restricted);
    restricted_session.initialize().await?;
    restricted_session.refresh_auth(auth).await?;
    Ok(restricted_session)
}
