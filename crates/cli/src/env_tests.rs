// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[test]
fn fixed_platform_returns_set_vars() {
    let platform = FixedPlatform::new("/work").with_var(GEMINI_API_KEY, "secret");
    assert_eq!(platform.var(GEMINI_API_KEY).as_deref(), Some("secret"));
    assert_eq!(platform.var(GOOGLE_API_KEY), None);
}

#[test]
fn fixed_platform_treats_empty_as_unset() {
    let platform = FixedPlatform::new("/work").with_var(GEMINI_API_KEY, "");
    assert_eq!(platform.var(GEMINI_API_KEY), None);
}

#[test]
fn fixed_platform_reports_cwd_and_terminal() {
    let platform = FixedPlatform::new("/work").with_terminal(true);
    assert_eq!(platform.current_dir().unwrap(), PathBuf::from("/work"));
    assert!(platform.stdin_is_terminal());
    assert!(!FixedPlatform::new("/work").stdin_is_terminal());
}

#[test]
fn home_dir_comes_from_home_var() {
    let platform = FixedPlatform::new("/work").with_var(HOME, "/home/user");
    assert_eq!(platform.home_dir(), Some(PathBuf::from("/home/user")));
    assert_eq!(FixedPlatform::new("/work").home_dir(), None);
}

#[parameterized(
    one = { "1", true },
    lower_true = { "true", true },
    upper_true = { "TRUE", true },
    zero = { "0", false },
    word = { "docker", false },
)]
fn flag_parsing(value: &str, expected: bool) {
    let platform = FixedPlatform::new("/work").with_var(DEBUG, value);
    assert_eq!(platform.flag(DEBUG), expected);
}

#[test]
fn flag_is_false_when_unset() {
    assert!(!FixedPlatform::new("/work").flag(DEBUG));
}
