//! Claude Code subprocess integration.
pub mod command;
pub mod executor;
pub mod generator;
pub mod registry;

pub use command::{ClaudeCommand, CommandExecutionResult};
pub use executor::{execute, OutputMode};
pub use generator::{manual_generation, GenerationMode, GenerationRequest, AUTO_MODE_MESSAGE};
pub use registry::{add_mcp_server, list_mcp_servers, remove_mcp_server};
