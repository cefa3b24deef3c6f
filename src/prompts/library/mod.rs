//! Built-in fragment library.
//!
//! Every tag has a frontend fragment. Backend fragments exist for the task
//! contexts and the tech constraints that have a server side.
mod modality;
mod output_control;
mod refinement;
mod task_context;
mod tech_constraint;

use std::sync::Arc;

use tracing::debug;

use crate::lib::errors::PromptError;

use super::{
    component::{Category, PromptTag},
    composer::PromptComposer,
    store::{FragmentStore, PromptStore},
};

fn build_store<T: PromptTag>(
    frontend: &[(T, &str)],
    backend: &[(T, &str)],
) -> Result<PromptStore, PromptError> {
    let store = PromptStore::new(T::CATEGORY);
    for (tag, text) in frontend {
        store.register_frontend(*tag, text.trim())?;
    }
    for (tag, text) in backend {
        store.register_backend(*tag, text.trim())?;
    }
    Ok(store)
}

/// Fresh stores for every built-in category, filled with the library text.
pub fn builtin_stores() -> Result<Vec<PromptStore>, PromptError> {
    Ok(vec![
        build_store(task_context::FRONTEND, task_context::BACKEND)?,
        build_store(modality::FRONTEND, &[])?,
        build_store(tech_constraint::FRONTEND, tech_constraint::BACKEND)?,
        build_store(output_control::FRONTEND, &[])?,
        build_store(refinement::FRONTEND, &[])?,
    ])
}

/// Create, fill and register one store per built-in category.
pub fn register_builtin_stores(composer: &PromptComposer) -> Result<(), PromptError> {
    for store in builtin_stores()? {
        let category = store.declared_category();
        composer.register_store(category, Arc::new(store))?;
    }
    debug!(
        target: "ui_gen::prompts",
        categories = Category::BUILTIN.len(),
        "Registered built-in prompt stores"
    );
    Ok(())
}

/// A new composer with every built-in store registered.
pub fn builtin_composer(separator: &str) -> Result<PromptComposer, PromptError> {
    let composer = PromptComposer::with_separator(separator);
    register_builtin_stores(&composer)?;
    Ok(composer)
}
