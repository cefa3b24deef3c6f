//! Configuration and the MCP prompt server.
pub mod config;
pub mod runtime;
