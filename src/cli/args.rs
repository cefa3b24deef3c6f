//! CLI argument definitions and `ServeProfile` construction.
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};

use crate::{
    claude::GenerationMode,
    prompts::{CatalogKind, Target},
    server::config::ConfigSource,
};

use super::{build_launch_args, resolve_config_path, ServeProfile, TransportMode};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    RunServer(ServeProfile),
    Cli(CliInvocation),
}

/// A one-shot command plus the global options it runs with.
#[derive(Debug, Clone)]
pub struct CliInvocation {
    pub command: CliCommand,
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Manage MCP server registrations in Claude Code.
    Mcp(McpArgs),
    /// Generate user interfaces via Claude Code.
    Generate(GenerateArgs),
    /// Inspect the prompt taxonomy and compose prompts.
    Prompts(PromptsArgs),
    /// Run the MCP prompt server.
    Serve(ServeArgs),
}

/// `mcp` command container.
#[derive(Debug, Clone, Args)]
#[command(
    about = "Manage MCP server integration with Claude Code",
    long_about = "Manage MCP server integration with Claude Code.\n\nSubcommands:\n  add-server     Register a new MCP server.\n  remove-server  Remove a registered MCP server.\n  list-servers   List registered MCP servers."
)]
pub struct McpArgs {
    #[command(subcommand)]
    pub command: McpCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum McpCommand {
    /// Register a new MCP server with Claude Code.
    AddServer(AddServerArgs),
    /// Remove an MCP server from Claude Code.
    RemoveServer(RemoveServerArgs),
    /// List all MCP servers registered in Claude Code.
    ListServers,
}

#[derive(Debug, Clone, Args)]
pub struct AddServerArgs {
    /// Unique identifier for the MCP server.
    #[arg(long)]
    pub server_name: String,
    /// Path to the Python script that launches the MCP server.
    #[arg(long)]
    pub server_path: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct RemoveServerArgs {
    /// Identifier of the MCP server to remove.
    #[arg(long)]
    pub server_name: String,
}

/// Arguments for `generate`.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// `manual` drives Claude Code with an explicit server prompt.
    #[arg(long, value_enum, default_value_t = GenerationMode::Manual)]
    pub mode: GenerationMode,
    /// MCP server that provides the prompt (required in manual mode).
    #[arg(long)]
    pub server_name: Option<String>,
    /// Prompt name on that server (required in manual mode).
    #[arg(long)]
    pub server_prompt: Option<String>,
    /// Extra user text appended to the prompt.
    #[arg(long, default_value = "")]
    pub user_prompt: String,
    /// Comma-separated tools Claude may use (defaults to `[claude] allowed_tools`).
    #[arg(long)]
    pub allowed_tools: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct PromptsArgs {
    #[command(subcommand)]
    pub command: PromptsCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PromptsCommand {
    /// List tags, optionally for one category.
    Tags {
        #[arg(long)]
        category: Option<String>,
    },
    /// List catalog prompts.
    List {
        #[arg(long, value_enum)]
        catalog: Option<CatalogKind>,
    },
    /// Print one composed catalog prompt.
    Show {
        name: String,
        #[arg(long, value_enum)]
        catalog: Option<CatalogKind>,
    },
    /// Compose an ad-hoc prompt from `Category.TAG` names.
    Compose {
        #[arg(long, value_enum, default_value_t = Target::Frontend)]
        target: Target,
        #[arg(required = true)]
        tags: Vec<String>,
    },
}

/// Arguments for `serve`.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Select stdio (default) or tcp.
    #[arg(long, value_enum, default_value_t = TransportMode::Stdio)]
    pub transport: TransportMode,
    /// Catalog to serve (overrides `[prompts] catalog`).
    #[arg(long, value_enum)]
    pub catalog: Option<CatalogKind>,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ui-gen",
    author,
    version,
    about = "Compose UI generation prompts and drive Claude Code",
    long_about = None
)]
pub struct UiGenArgs {
    /// Print full command results and debug logs.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
    /// Path to ui-gen.toml (overrides UI_GEN_CONFIG_PATH).
    #[arg(long = "config", global = true)]
    pub config_override: Option<PathBuf>,
    #[command(subcommand)]
    pub command: CliCommand,
}

impl UiGenArgs {
    /// Parse CLI args into either server launch mode or one-shot command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        validate_command(&self.command)?;
        let (config_path, config_source) = resolve_config_path(self.config_override)?;

        match self.command {
            CliCommand::Serve(args) => {
                let launch_args = build_launch_args(args.transport, &config_path, args.catalog);
                Ok(ParsedCommand::RunServer(ServeProfile {
                    config_path,
                    config_source,
                    transport: args.transport,
                    catalog: args.catalog,
                    launch_args,
                }))
            }
            command => Ok(ParsedCommand::Cli(CliInvocation {
                command,
                config_path,
                config_source,
                verbose: self.verbose,
            })),
        }
    }
}

fn validate_command(command: &CliCommand) -> Result<()> {
    match command {
        CliCommand::Mcp(mcp) => match &mcp.command {
            McpCommand::AddServer(args) => require_name("--server-name", &args.server_name)?,
            McpCommand::RemoveServer(args) => require_name("--server-name", &args.server_name)?,
            McpCommand::ListServers => {}
        },
        CliCommand::Generate(args) if args.mode == GenerationMode::Manual => {
            require_name("--server-name", args.server_name.as_deref().unwrap_or(""))?;
            require_name("--server-prompt", args.server_prompt.as_deref().unwrap_or(""))?;
        }
        CliCommand::Generate(_) | CliCommand::Prompts(_) | CliCommand::Serve(_) => {}
    }

    Ok(())
}

fn require_name(flag: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{flag} is required and must not be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(anyhow!("{flag} must not contain whitespace"));
    }
    Ok(())
}
