//! Rendering of `claude` command results for the terminal.
use crate::claude::CommandExecutionResult;

/// Formats a [`CommandExecutionResult`] for humans.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultFormatter {
    verbose: bool,
}

impl ResultFormatter {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Verbose output lists every field. Otherwise only stdout on success and
    /// stderr on failure are shown.
    pub fn format(&self, result: &CommandExecutionResult) -> String {
        if self.verbose {
            return format!(
                "Successful: {}\nCommand: {}\nOutput: {}\nError: {}",
                result.success,
                result.command,
                result.output.trim_end(),
                result.error.trim_end()
            );
        }

        if result.success {
            result.output.trim_end().to_string()
        } else {
            result.error.trim_end().to_string()
        }
    }
}
