//! MCP prompt server startup and request handling.
mod prompt_handler;
mod server_info;
mod startup;

pub use prompt_handler::PromptServer;
pub use server_info::build_instructions;
pub use startup::{build_prompt_server, run_server, RuntimeExit};
