// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing helpers shared by settings and extension manifests.

use std::path::{Path, PathBuf};

/// Parse content as JSON5, falling back to strict JSON on parse failure.
///
/// JSON5 supports comments and trailing commas, making config files more readable.
/// The strict JSON error is the one reported, since it carries line and column.
pub fn parse_json5_or_json<T: serde::de::DeserializeOwned>(
    content: &str,
) -> Result<T, serde_json::Error> {
    json5::from_str(content).or_else(|_| serde_json::from_str(content))
}

/// Iterate over subdirectories of a directory.
///
/// Silently skips entries that can't be read. Returns an empty iterator if the
/// directory doesn't exist or can't be read.
pub fn dirs_in(dir: &Path) -> impl Iterator<Item = PathBuf> {
    let mut dirs: Vec<PathBuf> = std::fs::read_dir(dir)
        .into_iter()
        .flatten()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs.into_iter()
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
