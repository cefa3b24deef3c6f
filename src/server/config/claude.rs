use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_CLAUDE_BINARY: &str = "claude";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PYTHON: &str = "python";
pub const DEFAULT_ALLOWED_TOOLS: &str =
    "Bash,Edit,Replace,Bash(docker*),url,Bash(ls),Bash(cp),Bash(npm),Bash(next),Read,List";

const MAX_TIMEOUT_SECS: u64 = 3600;

/// How `claude` is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudeSection {
    pub binary: String,
    /// Upper bound for captured `claude mcp` commands.
    pub timeout_secs: u64,
    /// Interpreter used to launch registered MCP server scripts.
    pub python: String,
    /// Default `--allowedTools` for manual generation.
    pub allowed_tools: String,
}

impl Default for ClaudeSection {
    fn default() -> Self {
        Self {
            binary: DEFAULT_CLAUDE_BINARY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            python: DEFAULT_PYTHON.to_string(),
            allowed_tools: DEFAULT_ALLOWED_TOOLS.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawClaudeSection {
    pub binary: Option<String>,
    pub timeout_secs: Option<u64>,
    pub python: Option<String>,
    pub allowed_tools: Option<String>,
}

pub fn parse_claude_section(
    raw: Option<RawClaudeSection>,
    path: &Path,
) -> Result<ClaudeSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let binary = non_empty(raw.binary, DEFAULT_CLAUDE_BINARY, "claude.binary", path)?;
    let python = non_empty(raw.python, DEFAULT_PYTHON, "claude.python", path)?;
    let allowed_tools = non_empty(
        raw.allowed_tools,
        DEFAULT_ALLOWED_TOOLS,
        "claude.allowed_tools",
        path,
    )?;

    let timeout_secs = raw.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if !(1..=MAX_TIMEOUT_SECS).contains(&timeout_secs) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "claude.timeout_secs",
            message: format!("Use a value between 1 and {MAX_TIMEOUT_SECS} seconds"),
        });
    }

    Ok(ClaudeSection {
        binary,
        timeout_secs,
        python,
        allowed_tools,
    })
}

fn non_empty(
    value: Option<String>,
    default: &str,
    field: &'static str,
    path: &Path,
) -> Result<String, ConfigError> {
    match value {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "Value must not be empty".into(),
        }),
        Some(value) => Ok(value.trim().to_string()),
    }
}
