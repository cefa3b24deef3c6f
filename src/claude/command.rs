//! `claude` command lines and their execution results.
use std::fmt;

use serde::Serialize;
use tokio::process::Command;

/// A program plus its argument vector, never passed through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudeCommand {
    kind: &'static str,
    program: String,
    args: Vec<String>,
}

impl ClaudeCommand {
    pub fn new(kind: &'static str, program: impl Into<String>) -> Self {
        Self {
            kind,
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Short label used in telemetry (`mcp_add`, `generate`, ...).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn argv(&self) -> &[String] {
        &self.args
    }

    /// Shell-quoted rendering for display and logs.
    pub fn display(&self) -> String {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shell_words::join(words)
    }

    pub(crate) fn to_tokio(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command.kill_on_drop(true);
        command
    }
}

impl fmt::Display for ClaudeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Outcome of one `claude` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandExecutionResult {
    /// True only when the process ran and exited with status 0.
    pub success: bool,
    pub command: String,
    pub output: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl CommandExecutionResult {
    pub(crate) fn failed(command: &ClaudeCommand, error: impl Into<String>) -> Self {
        Self {
            success: false,
            command: command.display(),
            output: String::new(),
            error: error.into(),
            exit_code: None,
        }
    }
}
