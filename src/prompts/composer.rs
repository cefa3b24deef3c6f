//! Category registry and prompt assembly.
use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use crate::lib::errors::PromptError;

use super::{
    component::{Category, PromptComponent, Target},
    store::FragmentStore,
};

/// Maps each category to its store and joins fragments in request order.
#[derive(Debug)]
pub struct PromptComposer {
    separator: String,
    stores: Mutex<HashMap<Category, Arc<dyn FragmentStore>>>,
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptComposer {
    pub const DEFAULT_SEPARATOR: &'static str = " ";

    pub fn new() -> Self {
        Self::with_separator(Self::DEFAULT_SEPARATOR)
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            stores: Mutex::new(HashMap::new()),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Register `store` for `category`, returning the store it replaced.
    pub fn register_store(
        &self,
        category: Category,
        store: Arc<dyn FragmentStore>,
    ) -> Result<Option<Arc<dyn FragmentStore>>, PromptError> {
        let declared = store.declared_category();
        if declared != category {
            return Err(PromptError::StoreCategoryMismatch { category, declared });
        }
        let previous = self.lock().insert(category, store);
        if previous.is_some() {
            debug!(
                target: "ui_gen::prompts",
                category = %category,
                "Replaced previously registered prompt store"
            );
        }
        Ok(previous)
    }

    pub fn unregister_store(&self, category: Category) -> Option<Arc<dyn FragmentStore>> {
        self.lock().remove(&category)
    }

    /// Snapshot of the registry. Later registrations do not affect it.
    pub fn registered_stores(&self) -> BTreeMap<Category, Arc<dyn FragmentStore>> {
        self.lock()
            .iter()
            .map(|(category, store)| (*category, Arc::clone(store)))
            .collect()
    }

    pub fn store(&self, category: Category) -> Option<Arc<dyn FragmentStore>> {
        self.lock().get(&category).cloned()
    }

    /// Resolve every component in order and join the fragments.
    ///
    /// The registry is snapshotted up front and its lock released; each
    /// fragment lookup then takes only its store's lock. Any miss fails the
    /// call without returning partial text.
    pub fn compose(
        &self,
        target: Target,
        components: &[PromptComponent],
    ) -> Result<String, PromptError> {
        let stores = self.lock().clone();
        let mut fragments = Vec::with_capacity(components.len());
        for component in components {
            let category = component.category();
            let store = stores
                .get(&category)
                .ok_or(PromptError::StoreNotRegistered { category })?;
            fragments.push(store.get(target, *component)?);
        }
        Ok(fragments.join(&self.separator))
    }

    pub fn compose_frontend(&self, components: &[PromptComponent]) -> Result<String, PromptError> {
        self.compose(Target::Frontend, components)
    }

    pub fn compose_backend(&self, components: &[PromptComponent]) -> Result<String, PromptError> {
        self.compose(Target::Backend, components)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Category, Arc<dyn FragmentStore>>> {
        self.stores.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::prompts::{
        component::{Modality, OutputControl, PromptTag, TaskContext},
        store::PromptStore,
    };

    fn composer_with(stores: &[(Category, Arc<PromptStore>)]) -> PromptComposer {
        let composer = PromptComposer::new();
        for (category, store) in stores {
            composer
                .register_store(*category, Arc::clone(store) as Arc<dyn FragmentStore>)
                .expect("register store");
        }
        composer
    }

    fn modality_store() -> Arc<PromptStore> {
        let store = PromptStore::new(Category::MODALITY);
        store.register_frontend(Modality::Text, "A").expect("text");
        store.register_frontend(Modality::Image, "B").expect("image");
        Arc::new(store)
    }

    #[test]
    fn empty_request_composes_empty_string() {
        let composer = PromptComposer::new();
        assert_eq!(composer.compose_frontend(&[]), Ok(String::new()));
        assert_eq!(composer.compose_backend(&[]), Ok(String::new()));
    }

    #[test]
    fn fragments_follow_input_order_and_repeat() {
        let composer = composer_with(&[(Category::MODALITY, modality_store())]);
        let text = Modality::Text.component();
        let image = Modality::Image.component();

        assert_eq!(composer.compose_frontend(&[text, image]), Ok("A B".into()));
        assert_eq!(composer.compose_frontend(&[image, text]), Ok("B A".into()));
        assert_eq!(composer.compose_frontend(&[text, text]), Ok("A A".into()));
    }

    #[test]
    fn custom_separator_is_used() {
        let composer = PromptComposer::with_separator("\n\n");
        composer
            .register_store(Category::MODALITY, modality_store())
            .expect("register");
        assert_eq!(
            composer.compose_frontend(&[Modality::Text.component(), Modality::Image.component()]),
            Ok("A\n\nB".into())
        );
    }

    #[test]
    fn missing_store_names_the_category() {
        let composer = composer_with(&[(Category::MODALITY, modality_store())]);
        let result = composer.compose_frontend(&[
            Modality::Text.component(),
            OutputControl::WithTests.component(),
        ]);
        assert_eq!(
            result,
            Err(PromptError::StoreNotRegistered {
                category: Category::OUTPUT_CONTROL
            })
        );
    }

    #[test]
    fn missing_fragment_fails_whole_composition() {
        let composer = composer_with(&[(Category::MODALITY, modality_store())]);
        let result =
            composer.compose_frontend(&[Modality::Text.component(), Modality::Sketch.component()]);
        assert!(matches!(result, Err(PromptError::FragmentNotFound { .. })));

        let backend = composer.compose_backend(&[Modality::Text.component()]);
        assert!(matches!(backend, Err(PromptError::FragmentNotFound { .. })));
    }

    #[test]
    fn store_must_declare_its_category() {
        let composer = PromptComposer::new();
        let result = composer.register_store(Category::TASK_CONTEXT, modality_store());
        assert!(matches!(
            result,
            Err(PromptError::StoreCategoryMismatch {
                category: Category::TASK_CONTEXT,
                declared: Category::MODALITY,
            })
        ));
        assert!(composer.registered_stores().is_empty());
    }

    #[test]
    fn re_registering_replaces_and_returns_previous() {
        let composer = composer_with(&[(Category::MODALITY, modality_store())]);
        let replacement = PromptStore::new(Category::MODALITY);
        replacement
            .register_frontend(Modality::Text, "Z")
            .expect("register");

        let previous = composer
            .register_store(Category::MODALITY, Arc::new(replacement))
            .expect("replace");
        assert!(previous.is_some());
        assert_eq!(
            composer.compose_frontend(&[Modality::Text.component()]),
            Ok("Z".into())
        );
    }

    #[test]
    fn unregister_is_idempotent_and_snapshots_are_detached() {
        let composer = composer_with(&[(Category::MODALITY, modality_store())]);
        let snapshot = composer.registered_stores();

        assert!(composer.unregister_store(Category::MODALITY).is_some());
        assert!(composer.unregister_store(Category::MODALITY).is_none());
        assert_eq!(snapshot.len(), 1);
        assert!(composer.registered_stores().is_empty());
    }

    #[test]
    fn store_mutations_are_visible_to_later_compositions() {
        let store = modality_store();
        let composer = composer_with(&[(Category::MODALITY, Arc::clone(&store))]);
        store.register_frontend(Modality::Text, "C").expect("overwrite");
        assert_eq!(
            composer.compose_frontend(&[Modality::Text.component()]),
            Ok("C".into())
        );
    }

    #[test]
    fn concurrent_writers_lose_no_updates() {
        let tasks = Arc::new(PromptStore::new(Category::TASK_CONTEXT));
        let modalities = Arc::new(PromptStore::new(Category::MODALITY));
        let composer = composer_with(&[
            (Category::TASK_CONTEXT, Arc::clone(&tasks)),
            (Category::MODALITY, Arc::clone(&modalities)),
        ]);

        thread::scope(|scope| {
            for tag in TaskContext::ALL {
                let tasks = &tasks;
                scope.spawn(move || {
                    tasks
                        .register_frontend(*tag, format!("task:{tag}"))
                        .expect("task register");
                });
            }
            for tag in Modality::ALL {
                let modalities = &modalities;
                scope.spawn(move || {
                    modalities
                        .register_frontend(*tag, format!("input:{tag}"))
                        .expect("modality register");
                });
            }
            scope.spawn(|| {
                let _ = composer.compose_frontend(&[TaskContext::UiGeneration.component()]);
            });
        });

        assert_eq!(tasks.len(Target::Frontend), TaskContext::ALL.len());
        assert_eq!(modalities.len(Target::Frontend), Modality::ALL.len());

        let request: Vec<PromptComponent> = TaskContext::ALL
            .iter()
            .map(|tag| tag.component())
            .chain(Modality::ALL.iter().map(|tag| tag.component()))
            .collect();
        let composed = composer.compose_frontend(&request).expect("compose");
        let expected: Vec<String> = TaskContext::ALL
            .iter()
            .map(|tag| format!("task:{tag}"))
            .chain(Modality::ALL.iter().map(|tag| format!("input:{tag}")))
            .collect();
        assert_eq!(composed, expected.join(" "));
    }
}
