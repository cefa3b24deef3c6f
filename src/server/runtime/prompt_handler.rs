use std::{future::Future, sync::Arc};

use rmcp::{
    handler::server::ServerHandler,
    model::{
        ErrorData, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptMessage, PromptMessageRole, ServerCapabilities,
        ServerInfo,
    },
    service::RequestContext,
    RoleServer,
};
use serde_json::json;
use tracing::{debug, warn};

use crate::{lib::errors::PROMPT_NOT_FOUND_ERROR, prompts::PromptCatalog};

/// MCP server exposing a [`PromptCatalog`] through `prompts/list` and `prompts/get`.
#[derive(Clone)]
pub struct PromptServer {
    catalog: Arc<PromptCatalog>,
    instructions: Arc<String>,
}

impl PromptServer {
    pub fn new(catalog: PromptCatalog, instructions: String) -> Self {
        Self {
            catalog: Arc::new(catalog),
            instructions: Arc::new(instructions),
        }
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    fn list(&self) -> ListPromptsResult {
        let prompts = self
            .catalog
            .iter()
            .map(|entry| Prompt::new(entry.name.clone(), Some(entry.description.clone()), None))
            .collect();
        ListPromptsResult::with_all_items(prompts)
    }

    fn get(&self, name: &str) -> Result<GetPromptResult, ErrorData> {
        let Some(entry) = self.catalog.get(name) else {
            warn!(
                target: "ui_gen::runtime",
                prompt = name,
                "Requested prompt is not in the catalog"
            );
            return Err(prompt_not_found(name, &self.catalog));
        };
        Ok(GetPromptResult {
            description: Some(entry.description.clone()),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                entry.text.clone(),
            )],
        })
    }
}

fn prompt_not_found(name: &str, catalog: &PromptCatalog) -> ErrorData {
    let available: Vec<&str> = catalog.names().collect();
    PROMPT_NOT_FOUND_ERROR
        .builder()
        .retryable(false)
        .details(json!({ "available": available }))
        .with_context_field("prompt", json!(name))
        .build()
        .unwrap_or_else(|err| ErrorData::internal_error(err.to_string(), None))
}

impl ServerHandler for PromptServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_prompts().build(),
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListPromptsResult, ErrorData>> + Send + '_ {
        async move {
            debug!(
                target: "ui_gen::runtime",
                prompts = self.catalog.len(),
                "prompts/list requested"
            );
            Ok(self.list())
        }
    }

    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<GetPromptResult, ErrorData>> + Send + '_ {
        async move {
            debug!(
                target: "ui_gen::runtime",
                prompt = %request.name,
                "prompts/get requested"
            );
            self.get(&request.name)
        }
    }
}
