use std::path::Path;

use serde::Deserialize;

use crate::{
    lib::errors::ConfigError,
    prompts::{CatalogKind, PromptComposer},
};

/// Composition settings for the built-in library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptsSection {
    pub separator: String,
    pub catalog: CatalogKind,
}

impl Default for PromptsSection {
    fn default() -> Self {
        Self {
            separator: PromptComposer::DEFAULT_SEPARATOR.to_string(),
            catalog: CatalogKind::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawPromptsSection {
    pub separator: Option<String>,
    pub catalog: Option<String>,
}

pub fn parse_prompts_section(
    raw: Option<RawPromptsSection>,
    path: &Path,
) -> Result<PromptsSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    // An empty separator is allowed and concatenates fragments directly.
    let separator = raw
        .separator
        .unwrap_or_else(|| PromptComposer::DEFAULT_SEPARATOR.to_string());
    let catalog = match raw.catalog {
        None => CatalogKind::default(),
        Some(name) => CatalogKind::parse(&name).ok_or_else(|| ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "prompts.catalog",
            message: format!("Unknown catalog `{name}`; use `default` or `builtin`"),
        })?,
    };
    Ok(PromptsSection { separator, catalog })
}
