// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! promptline
//!
//! A command-line front end that runs a single prompt against an assistant
//! execution engine. It resolves settings, extensions, and authentication,
//! builds a run configuration, and strips destructive tools from headless
//! runs unless full auto-approval was granted. Slash commands from built-in,
//! extension, user, and project sources are merged by [`commands::CommandService`].
//!
//! The bundled engine is a dry run: it reports the effective configuration
//! instead of calling a model.

pub mod auth;
#[doc(hidden)]
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod env;
pub mod extension;
#[doc(hidden)]
pub mod logging;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod runner;
pub mod settings;
