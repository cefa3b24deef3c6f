//! Named prompts composed ahead of time and served over MCP.
mod builtin;

use std::{collections::HashSet, fmt};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lib::errors::CatalogError;

use super::{
    component::{PromptComponent, Target},
    composer::PromptComposer,
};

pub use builtin::{builtin_catalog, default_catalog};

/// One composed prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptEntry {
    pub name: String,
    pub description: String,
    pub target: Target,
    pub text: String,
}

/// Ordered, name-unique collection of composed prompts.
#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    entries: Vec<PromptEntry>,
}

impl PromptCatalog {
    pub fn get(&self, name: &str) -> Option<&PromptEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PromptEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PromptCatalog {
    type Item = &'a PromptEntry;
    type IntoIter = std::slice::Iter<'a, PromptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Fluent builder that composes each prompt as it is added.
///
/// The first failure is kept and reported by [`PromptCatalogBuilder::build`];
/// later additions are ignored once an error has been recorded.
pub struct PromptCatalogBuilder<'a> {
    composer: &'a PromptComposer,
    entries: Vec<PromptEntry>,
    seen: HashSet<String>,
    error: Option<CatalogError>,
}

impl<'a> PromptCatalogBuilder<'a> {
    pub fn new(composer: &'a PromptComposer) -> Self {
        Self {
            composer,
            entries: Vec::new(),
            seen: HashSet::new(),
            error: None,
        }
    }

    pub fn add_frontend_generation_prompt(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        components: &[PromptComponent],
    ) -> Self {
        self.add_generation_prompt(Target::Frontend, name.into(), description.into(), components)
    }

    pub fn add_backend_generation_prompt(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        components: &[PromptComponent],
    ) -> Self {
        self.add_generation_prompt(Target::Backend, name.into(), description.into(), components)
    }

    pub fn build(self) -> Result<PromptCatalog, CatalogError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(PromptCatalog {
                entries: self.entries,
            }),
        }
    }

    fn add_generation_prompt(
        mut self,
        target: Target,
        name: String,
        description: String,
        components: &[PromptComponent],
    ) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.compose_entry(target, name, description, components) {
            Ok(entry) => {
                debug!(
                    target: "ui_gen::prompts",
                    prompt = %entry.name,
                    prompt_target = %target,
                    components = components.len(),
                    "Composed catalog prompt"
                );
                self.seen.insert(entry.name.clone());
                self.entries.push(entry);
            }
            Err(err) => self.error = Some(err),
        }
        self
    }

    fn compose_entry(
        &self,
        target: Target,
        name: String,
        description: String,
        components: &[PromptComponent],
    ) -> Result<PromptEntry, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.seen.contains(&name) {
            return Err(CatalogError::DuplicateName { name });
        }
        let text = self
            .composer
            .compose(target, components)
            .map_err(|source| CatalogError::Compose {
                name: name.clone(),
                source,
            })?;
        Ok(PromptEntry {
            name,
            description,
            target,
            text,
        })
    }
}

/// Which built-in catalog to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// A single `frontend_generation` prompt.
    Default,
    /// Next.js-oriented prompt collection.
    #[default]
    Builtin,
}

impl CatalogKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Default => "default",
            CatalogKind::Builtin => "builtin",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "default" => Some(CatalogKind::Default),
            "builtin" => Some(CatalogKind::Builtin),
            _ => None,
        }
    }

    pub fn build(self, composer: &PromptComposer) -> Result<PromptCatalog, CatalogError> {
        match self {
            CatalogKind::Default => default_catalog(composer),
            CatalogKind::Builtin => builtin_catalog(composer),
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
