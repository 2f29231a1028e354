// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! promptline binary entry point.

use std::sync::Arc;

use clap::Parser;

use promptline::cli::Cli;
use promptline::commands::{default_loaders, CommandService};
use promptline::config::RunOptions;
use promptline::engine::{DryRunEngine, Engine};
use promptline::env::{Platform, SystemPlatform, DEBUG};
use promptline::extension::filter_active;
use promptline::logging;
use promptline::output_diagnostic::{print_error, write_commands, write_extensions};
use promptline::runner::{PromptRunner, RunError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let platform: Arc<dyn Platform> = Arc::new(SystemPlatform);
    logging::init(cli.debug || platform.flag(DEBUG));

    if let Err(e) = run(cli, platform).await {
        print_error(e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, platform: Arc<dyn Platform>) -> Result<(), RunError> {
    let engine = match &cli.dry_run_failure {
        Some(message) => DryRunEngine::stdout().with_failure(message.clone()),
        None => DryRunEngine::stdout(),
    };
    let engine: Arc<dyn Engine> = Arc::new(engine);
    let runner =
        PromptRunner::new(Arc::clone(&platform), engine).with_options(RunOptions::from(&cli));

    if cli.list_extensions {
        let extensions = runner.list_extensions()?;
        return write_extensions(&mut std::io::stdout(), &extensions).map_err(output_error);
    }

    if cli.list_commands {
        let cwd = platform.current_dir().map_err(|e| {
            RunError::Configuration(format!("Cannot determine working directory: {e}"))
        })?;
        let extensions = filter_active(runner.list_extensions()?, &cli.extensions);
        let home = platform.home_dir();
        let service =
            CommandService::create(default_loaders(&extensions, home.as_deref(), &cwd)).await;
        return write_commands(&mut std::io::stdout(), &service.commands()).map_err(output_error);
    }

    let prompt = cli
        .read_prompt(platform.stdin_is_terminal(), tokio::io::stdin())
        .await
        .map_err(|e| RunError::Input(format!("Failed to read stdin: {e}")))?;
    let message = runner.generate(&prompt, cli.interactive_hint()).await?;
    println!("{message}");
    Ok(())
}

fn output_error(e: std::io::Error) -> RunError {
    RunError::Execution(format!("failed to write output: {e}"))
}
