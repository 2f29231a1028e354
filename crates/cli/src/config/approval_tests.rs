// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[test]
fn test_default_mode() {
    assert_eq!(ApprovalMode::default(), ApprovalMode::Default);
}

#[parameterized(
    default = { ApprovalMode::Default, false },
    auto_edit = { ApprovalMode::AutoEdit, false },
    yolo = { ApprovalMode::Yolo, true },
)]
fn approves_all(mode: ApprovalMode, expected: bool) {
    assert_eq!(mode.approves_all(), expected);
}

#[parameterized(
    default = { "\"default\"", ApprovalMode::Default },
    auto_edit = { "\"autoEdit\"", ApprovalMode::AutoEdit },
    yolo = { "\"yolo\"", ApprovalMode::Yolo },
)]
fn deserializes_settings_values(json: &str, expected: ApprovalMode) {
    let mode: ApprovalMode = serde_json::from_str(json).unwrap();
    assert_eq!(mode, expected);
}

#[test]
fn parses_flag_values() {
    assert_eq!(
        ApprovalMode::from_str("auto-edit", true).unwrap(),
        ApprovalMode::AutoEdit
    );
    assert!(ApprovalMode::from_str("plan", true).is_err());
}

#[test]
fn display_names() {
    assert_eq!(ApprovalMode::Yolo.display_name(), "yolo");
    assert_eq!(ApprovalMode::AutoEdit.display_name(), "auto edit");
}
