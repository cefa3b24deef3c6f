use std::{process::Stdio, time::Duration};

use tokio::time;
use tracing::{debug, warn};

use crate::lib::{errors::CommandError, telemetry::CommandSpan};

use super::command::{ClaudeCommand, CommandExecutionResult};

/// What happens to the child's standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect stdout and stderr into the result.
    Capture,
    /// Hand the terminal to the child.
    Inherit,
}

/// Run `command` once and report the outcome.
///
/// Spawn failures and timeouts come back as a failed result. On timeout the
/// child is killed.
pub async fn execute(
    command: &ClaudeCommand,
    mode: OutputMode,
    timeout: Option<Duration>,
) -> CommandExecutionResult {
    let span = CommandSpan::start(command.kind(), &command.display());
    debug!(
        target: "ui_gen::claude",
        run_id = %span.run_id(),
        program = command.program(),
        mode = ?mode,
        timeout_secs = timeout.map(|limit| limit.as_secs()),
        "Spawning claude command"
    );

    let result = match run(command, mode, timeout).await {
        Ok(result) => result,
        Err(err) => {
            warn!(
                target: "ui_gen::claude",
                run_id = %span.run_id(),
                reason = %err,
                "claude command did not complete"
            );
            CommandExecutionResult::failed(command, err.to_string())
        }
    };
    span.finish(result.success, result.exit_code);
    result
}

async fn run(
    command: &ClaudeCommand,
    mode: OutputMode,
    timeout: Option<Duration>,
) -> Result<CommandExecutionResult, CommandError> {
    let mut process = command.to_tokio();
    match mode {
        OutputMode::Capture => {
            process
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
        }
        OutputMode::Inherit => {
            process
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }
    }

    let child = process.spawn().map_err(|source| CommandError::Spawn {
        program: command.program().to_string(),
        source,
    })?;

    let waiting = child.wait_with_output();
    let output = match timeout {
        Some(limit) => time::timeout(limit, waiting)
            .await
            .map_err(|_| CommandError::Timeout {
                command: command.display(),
                duration_secs: limit.as_secs(),
            })?,
        None => waiting.await,
    }
    .map_err(|source| CommandError::Wait {
        command: command.display(),
        source,
    })?;

    let success = output.status.success();
    let exit_code = output.status.code();
    let stdout = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
    let mut stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
    if !success && stderr.is_empty() {
        stderr = match exit_code {
            Some(code) => format!("`{}` exited with status {code}", command.program()),
            None => format!("`{}` was terminated by a signal", command.program()),
        };
    }

    Ok(CommandExecutionResult {
        success,
        command: command.display(),
        output: stdout,
        error: stderr,
        exit_code,
    })
}
