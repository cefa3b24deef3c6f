//! `claude mcp` registration commands.
use std::path::Path;

use crate::{lib::errors::CommandError, server::config::ClaudeSection};

use super::command::ClaudeCommand;

/// `claude mcp add NAME -- PYTHON PATH`. The script must exist.
pub fn add_mcp_server(
    claude: &ClaudeSection,
    server_name: &str,
    server_path: &Path,
) -> Result<ClaudeCommand, CommandError> {
    if !server_path.exists() {
        return Err(CommandError::ServerPathMissing {
            path: server_path.to_path_buf(),
        });
    }
    Ok(ClaudeCommand::new("mcp_add", &claude.binary)
        .args(["mcp", "add", server_name, "--"])
        .arg(&claude.python)
        .arg(server_path.to_string_lossy()))
}

pub fn remove_mcp_server(claude: &ClaudeSection, server_name: &str) -> ClaudeCommand {
    ClaudeCommand::new("mcp_remove", &claude.binary).args(["mcp", "remove", server_name])
}

pub fn list_mcp_servers(claude: &ClaudeSection) -> ClaudeCommand {
    ClaudeCommand::new("mcp_list", &claude.binary).args(["mcp", "list"])
}
