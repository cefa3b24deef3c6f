use crate::{cli::ServeProfile, prompts::CatalogKind, server::config::AppConfig};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(
    profile: &ServeProfile,
    config: &AppConfig,
    catalog: CatalogKind,
    prompt_count: usize,
) -> String {
    let source = config
        .source_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());
    format!(
        "Serving {prompt_count} UI generation prompts from the `{catalog}` catalog over {transport} (config: {source}). Use prompts/list to discover them and prompts/get to fetch one.",
        transport = profile.transport.as_str(),
    )
}
