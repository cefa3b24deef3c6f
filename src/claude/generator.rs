//! Generation commands that hand an MCP prompt to `claude`.
use clap::ValueEnum;

use crate::server::config::ClaudeSection;

use super::command::ClaudeCommand;

/// Message printed for the not yet available automatic mode.
pub const AUTO_MODE_MESSAGE: &str = "Auto mode is under development. Stay tuned!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GenerationMode {
    #[default]
    Manual,
    Auto,
}

/// Inputs for a manual generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub server_name: String,
    pub server_prompt: String,
    pub user_prompt: String,
    /// Falls back to `[claude] allowed_tools` when `None`.
    pub allowed_tools: Option<String>,
}

impl GenerationRequest {
    /// Slash command that selects the MCP prompt, followed by the user text.
    pub fn prompt_text(&self) -> String {
        format!(
            "/{}:{} (MCP) {}",
            self.server_name, self.server_prompt, self.user_prompt
        )
    }
}

/// `claude "/SERVER:PROMPT (MCP) USER" --allowedTools TOOLS`.
pub fn manual_generation(claude: &ClaudeSection, request: &GenerationRequest) -> ClaudeCommand {
    let allowed_tools = request
        .allowed_tools
        .as_deref()
        .unwrap_or(&claude.allowed_tools);
    ClaudeCommand::new("generate", &claude.binary)
        .arg(request.prompt_text())
        .args(["--allowedTools", allowed_tools])
}
