// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::env::FixedPlatform;
use std::fs;

fn write_settings(dir: &Path, content: &str) -> PathBuf {
    let gemini = dir.join(GEMINI_DIR);
    fs::create_dir_all(&gemini).unwrap();
    let path = gemini.join(SETTINGS_FILE);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_settings_paths_resolve() {
    let home = Path::new("/home/user");
    let cwd = Path::new("/home/user/project");

    let paths = SettingsPaths::resolve(Some(home), cwd, PathBuf::from("/etc/gemini-cli/s.json"));

    assert_eq!(
        paths.user,
        Some(PathBuf::from("/home/user/.gemini/settings.json"))
    );
    assert_eq!(
        paths.workspace,
        Some(PathBuf::from("/home/user/project/.gemini/settings.json"))
    );
    assert_eq!(paths.system, Some(PathBuf::from("/etc/gemini-cli/s.json")));
}

#[test]
fn test_settings_paths_skip_workspace_in_home() {
    let home = Path::new("/home/user");
    let paths = SettingsPaths::resolve(Some(home), home, PathBuf::from("/etc/s.json"));

    assert!(paths.user.is_some());
    assert!(paths.workspace.is_none());
}

#[test]
fn test_precedence_order() {
    let paths = SettingsPaths::resolve(
        Some(Path::new("/h")),
        Path::new("/w"),
        PathBuf::from("/etc/s.json"),
    );
    let scopes: Vec<_> = paths.in_precedence_order().map(|(s, _)| s).collect();
    assert_eq!(
        scopes,
        vec![
            SettingScope::User,
            SettingScope::Workspace,
            SettingScope::System
        ]
    );
}

#[test]
fn test_loader_no_files() {
    let temp = tempfile::tempdir().unwrap();
    let paths = SettingsPaths::resolve(
        Some(temp.path()),
        &temp.path().join("project"),
        temp.path().join("system.json"),
    );

    let loaded = SettingsLoader::new(paths).load();

    assert!(loaded.is_valid());
    assert_eq!(loaded.merged, Settings::default());
}

#[test]
fn test_loader_reports_paths_it_cannot_check() {
    let temp = tempfile::tempdir().unwrap();
    let user_path = write_settings(temp.path(), r#"{"model": "user-model"}"#);
    // A regular file where the workspace directory should be makes the
    // metadata lookup fail with something other than "not found".
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let workspace_path = blocker.join(SETTINGS_FILE);

    let paths = SettingsPaths {
        user: Some(user_path),
        workspace: Some(workspace_path.clone()),
        system: None,
    };
    let loaded = SettingsLoader::new(paths).load();

    assert!(!loaded.is_valid());
    assert_eq!(loaded.errors.len(), 1);
    assert_eq!(loaded.errors[0].scope, SettingScope::Workspace);
    assert_eq!(loaded.errors[0].path, workspace_path);
    assert_eq!(loaded.merged.model.as_deref(), Some("user-model"));
}

#[test]
fn test_loader_precedence() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let system = tempfile::tempdir().unwrap();

    write_settings(
        home.path(),
        r#"{"model": "user-model", "sandbox": true, "excludeTools": ["a"]}"#,
    );
    write_settings(work.path(), r#"{"model": "workspace-model"}"#);
    let system_path = system.path().join("settings.json");
    fs::write(&system_path, r#"{"excludeTools": ["system-only"]}"#).unwrap();

    let paths = SettingsPaths::resolve(Some(home.path()), work.path(), system_path);
    let loaded = SettingsLoader::new(paths).load();

    assert!(loaded.is_valid());
    assert_eq!(loaded.merged.model.as_deref(), Some("workspace-model"));
    assert_eq!(loaded.merged.sandbox, Some(true));
    assert_eq!(loaded.merged.exclude_tools, vec!["system-only"]);
}

#[test]
fn test_loader_collects_every_error() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();

    let user_path = write_settings(home.path(), "{ broken");
    let workspace_path = write_settings(work.path(), r#"{"model": 7}"#);

    let paths = SettingsPaths::resolve(
        Some(home.path()),
        work.path(),
        home.path().join("no-system.json"),
    );
    let loaded = SettingsLoader::new(paths).load();

    assert_eq!(loaded.errors.len(), 2);
    assert_eq!(loaded.errors[0].scope, SettingScope::User);
    assert_eq!(loaded.errors[0].path, user_path);
    assert_eq!(loaded.errors[1].scope, SettingScope::Workspace);
    assert_eq!(loaded.errors[1].path, workspace_path);
    assert!(loaded.errors[1]
        .to_string()
        .starts_with(&format!("Error in {}: ", workspace_path.display())));
}

#[test]
fn test_loader_keeps_valid_files_next_to_broken_ones() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();

    write_settings(home.path(), r#"{"model": "user-model"}"#);
    write_settings(work.path(), "not json at all");

    let paths = SettingsPaths::resolve(Some(home.path()), work.path(), PathBuf::from("/nope"));
    let loaded = SettingsLoader::new(paths).load();

    assert!(!loaded.is_valid());
    assert_eq!(loaded.merged.model.as_deref(), Some("user-model"));
}

#[test]
fn test_file_source_from_platform() {
    let work = tempfile::tempdir().unwrap();
    let system = tempfile::tempdir().unwrap();
    let system_path = system.path().join("system.json");
    fs::write(&system_path, r#"{"model": "from-system"}"#).unwrap();

    let platform = FixedPlatform::new(work.path())
        .with_var("HOME", "/home/nobody")
        .with_var(
            GEMINI_CLI_SYSTEM_SETTINGS_PATH,
            system_path.to_string_lossy(),
        );
    let source = FileSettingsSource::from_platform(&platform);

    assert_eq!(
        source.user_settings_path(),
        PathBuf::from("/home/nobody/.gemini/settings.json")
    );
    let loaded = source.load(work.path());
    assert_eq!(loaded.merged.model.as_deref(), Some("from-system"));
}

#[test]
fn test_file_source_without_home() {
    let source = FileSettingsSource::new(None, PathBuf::from(DEFAULT_SYSTEM_SETTINGS_PATH));
    assert_eq!(
        source.user_settings_path(),
        PathBuf::from("~/.gemini/settings.json")
    );
}
