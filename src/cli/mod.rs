//! CLI entrypoint module structure.
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde_json::json;

use crate::{
    claude::{
        self, add_mcp_server, list_mcp_servers, manual_generation, remove_mcp_server,
        GenerationMode, GenerationRequest, OutputMode, AUTO_MODE_MESSAGE,
    },
    prompts::{
        component::{builtin_components, parse_component},
        library::builtin_composer,
        Category, CatalogKind, PromptCatalog, Target,
    },
    server::config::AppConfig,
};

pub mod args;
pub mod format;
pub mod profile;

pub use args::{
    CliCommand, CliInvocation, GenerateArgs, McpCommand, ParsedCommand, PromptsCommand,
    UiGenArgs,
};
pub use format::ResultFormatter;
pub use profile::{build_launch_args, resolve_config_path, ServeProfile, TransportMode};

/// What a one-shot command prints and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliReport {
    pub text: String,
    pub success: bool,
}

impl CliReport {
    fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }
}

/// Execute CLI command mode and return a user-facing result payload.
pub async fn execute_cli_command(
    invocation: CliInvocation,
    config: &AppConfig,
) -> Result<CliReport> {
    let formatter = ResultFormatter::new(invocation.verbose);
    let timeout = Some(Duration::from_secs(config.claude.timeout_secs));

    match invocation.command {
        CliCommand::Mcp(mcp) => {
            let command = match mcp.command {
                McpCommand::AddServer(args) => {
                    add_mcp_server(&config.claude, &args.server_name, &args.server_path)?
                }
                McpCommand::RemoveServer(args) => {
                    remove_mcp_server(&config.claude, &args.server_name)
                }
                McpCommand::ListServers => list_mcp_servers(&config.claude),
            };
            let result = claude::execute(&command, OutputMode::Capture, timeout).await;
            Ok(CliReport {
                text: formatter.format(&result),
                success: result.success,
            })
        }
        CliCommand::Generate(args) => generate(args, config, formatter).await,
        CliCommand::Prompts(prompts) => run_prompts_command(prompts.command, config),
        CliCommand::Serve(_) => Err(anyhow!("`serve` runs the MCP server, not a CLI command")),
    }
}

async fn generate(
    args: GenerateArgs,
    config: &AppConfig,
    formatter: ResultFormatter,
) -> Result<CliReport> {
    if args.mode == GenerationMode::Auto {
        return Ok(CliReport::ok(AUTO_MODE_MESSAGE));
    }

    let request = GenerationRequest {
        server_name: args
            .server_name
            .ok_or_else(|| anyhow!("--server-name is required in manual mode"))?,
        server_prompt: args
            .server_prompt
            .ok_or_else(|| anyhow!("--server-prompt is required in manual mode"))?,
        user_prompt: args.user_prompt,
        allowed_tools: args.allowed_tools,
    };
    let command = manual_generation(&config.claude, &request);
    // The session is interactive; the user decides when it ends.
    let result = claude::execute(&command, OutputMode::Inherit, None).await;
    Ok(CliReport {
        text: formatter.format(&result),
        success: result.success,
    })
}

fn run_prompts_command(command: PromptsCommand, config: &AppConfig) -> Result<CliReport> {
    match command {
        PromptsCommand::Tags { category } => list_tags(category.as_deref()),
        PromptsCommand::List { catalog } => {
            let catalog = load_catalog(catalog, config)?;
            let entries: Vec<_> = catalog
                .iter()
                .map(|entry| {
                    json!({
                        "name": entry.name,
                        "description": entry.description,
                        "target": entry.target,
                    })
                })
                .collect();
            Ok(CliReport::ok(serde_json::to_string_pretty(&entries)?))
        }
        PromptsCommand::Show { name, catalog } => {
            let catalog = load_catalog(catalog, config)?;
            let entry = catalog.get(&name).ok_or_else(|| {
                let available: Vec<_> = catalog.names().collect();
                anyhow!(
                    "unknown prompt `{name}`; available: {}",
                    available.join(", ")
                )
            })?;
            Ok(CliReport::ok(entry.text.clone()))
        }
        PromptsCommand::Compose { target, tags } => {
            compose_tags(target, &tags, config).map(CliReport::ok)
        }
    }
}

fn list_tags(category: Option<&str>) -> Result<CliReport> {
    let categories: Vec<Category> = match category {
        Some(raw) => {
            let category = Category::BUILTIN
                .into_iter()
                .find(|category| category.name().eq_ignore_ascii_case(raw.trim()))
                .ok_or_else(|| {
                    let known: Vec<_> = Category::BUILTIN.iter().map(Category::name).collect();
                    anyhow!("unknown category `{raw}`; expected one of: {}", known.join(", "))
                })?;
            vec![category]
        }
        None => Category::BUILTIN.to_vec(),
    };

    let components = builtin_components();
    let payload: Vec<_> = categories
        .into_iter()
        .map(|category| {
            let tags: Vec<_> = components
                .iter()
                .filter(|component| component.category() == category)
                .map(|component| component.name())
                .collect();
            json!({ "category": category.name(), "tags": tags })
        })
        .collect();
    Ok(CliReport::ok(serde_json::to_string_pretty(&payload)?))
}

fn load_catalog(kind: Option<CatalogKind>, config: &AppConfig) -> Result<PromptCatalog> {
    let kind = kind.unwrap_or(config.prompts.catalog);
    let composer = builtin_composer(&config.prompts.separator)
        .context("failed to register built-in prompt stores")?;
    kind.build(&composer)
        .with_context(|| format!("failed to compose the `{kind}` prompt catalog"))
}

/// Compose `Category.TAG` names against the built-in library.
pub fn compose_tags(target: Target, tags: &[String], config: &AppConfig) -> Result<String> {
    let components = tags
        .iter()
        .map(|raw| parse_component(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let composer = builtin_composer(&config.prompts.separator)
        .context("failed to register built-in prompt stores")?;
    Ok(composer.compose(target, &components)?)
}
