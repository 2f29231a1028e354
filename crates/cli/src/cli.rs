// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing matching the Gemini CLI's interface.

use clap::Parser;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::config::{ApprovalMode, RunOptions, TelemetryOverrides, TelemetryTarget};

/// Run a prompt against an assistant engine
#[derive(Parser, Debug, Clone)]
#[command(name = "promptline", version, about = "Run a prompt against an assistant engine")]
pub struct Cli {
    /// The prompt to send (positional or via --prompt)
    #[arg(value_name = "PROMPT")]
    pub query: Option<String>,

    /// Model to use
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Prompt to run non-interactively; appended to stdin input if any
    #[arg(short = 'p', long)]
    pub prompt: Option<String>,

    /// Run the prompt and continue in interactive mode
    #[arg(short = 'i', long, value_name = "PROMPT")]
    pub prompt_interactive: Option<String>,

    /// Run in a sandbox
    #[arg(short = 's', long)]
    pub sandbox: bool,

    /// Sandbox image URI
    #[arg(long)]
    pub sandbox_image: Option<String>,

    /// Enable debug output
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Include all files in context
    #[arg(short = 'a', long)]
    pub all_files: bool,

    /// Show memory usage in the status bar
    #[arg(long)]
    pub show_memory_usage: bool,

    /// Automatically accept all actions
    #[arg(short = 'y', long, conflicts_with = "approval_mode")]
    pub yolo: bool,

    /// Approval mode for tool calls
    #[arg(long, value_enum)]
    pub approval_mode: Option<ApprovalMode>,

    /// Enable telemetry
    #[arg(long)]
    pub telemetry: bool,

    /// Telemetry destination
    #[arg(long, value_enum)]
    pub telemetry_target: Option<TelemetryTarget>,

    /// OTLP endpoint for telemetry
    #[arg(long)]
    pub telemetry_otlp_endpoint: Option<String>,

    /// Include prompts in telemetry logs
    #[arg(long)]
    pub telemetry_log_prompts: bool,

    /// Enable checkpointing of file edits
    #[arg(short = 'c', long)]
    pub checkpointing: bool,

    /// Start the agent in ACP mode
    #[arg(long)]
    pub experimental_acp: bool,

    /// Allowed MCP server names (comma separated or repeated)
    #[arg(long, value_delimiter = ',')]
    pub allowed_mcp_server_names: Vec<String>,

    /// Extensions to use; defaults to all (comma separated or repeated)
    #[arg(short = 'e', long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// List all available extensions and exit
    #[arg(short = 'l', long)]
    pub list_extensions: bool,

    /// List all available slash commands and exit
    #[arg(long)]
    pub list_commands: bool,

    /// Enable IDE integration
    #[arg(long)]
    pub ide_mode: bool,

    /// Proxy for outgoing requests
    #[arg(long)]
    pub proxy: Option<String>,

    /// Make the engine fail every execution with this message
    #[arg(long, hide = true, value_name = "MESSAGE")]
    pub dry_run_failure: Option<String>,
}

impl Cli {
    /// Effective approval mode flag; `--yolo` is shorthand for `--approval-mode yolo`.
    pub fn approval_mode(&self) -> Option<ApprovalMode> {
        if self.yolo {
            Some(ApprovalMode::Yolo)
        } else {
            self.approval_mode
        }
    }

    /// Whether the caller asked for an interactive session.
    pub fn interactive_hint(&self) -> bool {
        self.prompt_interactive.is_some()
    }

    /// Prompt given on the command line: `--prompt` wins over the positional query.
    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt.as_deref().or(self.query.as_deref())
    }

    /// Build the prompt from the command line and, when not a terminal, stdin.
    ///
    /// Piped input comes first, followed by the command-line prompt after a
    /// blank line.
    pub async fn read_prompt<R>(
        &self,
        stdin_is_terminal: bool,
        mut stdin: R,
    ) -> std::io::Result<String>
    where
        R: AsyncRead + Unpin,
    {
        let arg = self.prompt_text().unwrap_or_default().to_string();
        if stdin_is_terminal {
            return Ok(arg);
        }

        let mut piped = String::new();
        stdin.read_to_string(&mut piped).await?;
        let piped = piped.trim_end();
        Ok(match (piped.is_empty(), arg.is_empty()) {
            (true, _) => arg,
            (false, true) => piped.to_string(),
            (false, false) => format!("{piped}\n\n{arg}"),
        })
    }
}

fn flag(set: bool) -> Option<bool> {
    set.then_some(true)
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            model: cli.model.clone(),
            prompt_interactive: cli.prompt_interactive.clone(),
            sandbox: flag(cli.sandbox),
            sandbox_image: cli.sandbox_image.clone(),
            debug: cli.debug,
            all_files: cli.all_files,
            show_memory_usage: cli.show_memory_usage,
            approval_mode: cli.approval_mode(),
            telemetry: TelemetryOverrides {
                enabled: flag(cli.telemetry),
                target: cli.telemetry_target,
                otlp_endpoint: cli.telemetry_otlp_endpoint.clone(),
                log_prompts: flag(cli.telemetry_log_prompts),
            },
            checkpointing: cli.checkpointing,
            experimental_acp: cli.experimental_acp,
            allowed_mcp_server_names: cli.allowed_mcp_server_names.clone(),
            extensions: cli.extensions.clone(),
            list_extensions: cli.list_extensions,
            ide_mode: flag(cli.ide_mode),
            proxy: cli.proxy.clone(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
