//! Per-category fragment storage.
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::lib::errors::PromptError;

use super::component::{Category, PromptComponent, Target};

/// Repository of fragments for a single category.
///
/// Implementations hold one mapping per [`Target`] and must reject tags from
/// any category other than [`FragmentStore::declared_category`].
pub trait FragmentStore: Send + Sync + fmt::Debug {
    fn declared_category(&self) -> Category;

    /// Insert or overwrite the fragment for `(target, component)`.
    fn register(
        &self,
        target: Target,
        component: PromptComponent,
        fragment: String,
    ) -> Result<(), PromptError>;

    fn get(&self, target: Target, component: PromptComponent) -> Result<String, PromptError>;

    /// Drop the fragment if present. Removing a missing fragment is a no-op.
    fn remove(&self, target: Target, component: PromptComponent) -> Option<String>;

    /// Snapshot of every fragment registered for `target`.
    fn list(&self, target: Target) -> BTreeMap<PromptComponent, String>;
}

#[derive(Debug, Default)]
struct Fragments {
    frontend: HashMap<PromptComponent, String>,
    backend: HashMap<PromptComponent, String>,
}

impl Fragments {
    fn side(&self, target: Target) -> &HashMap<PromptComponent, String> {
        match target {
            Target::Frontend => &self.frontend,
            Target::Backend => &self.backend,
        }
    }

    fn side_mut(&mut self, target: Target) -> &mut HashMap<PromptComponent, String> {
        match target {
            Target::Frontend => &mut self.frontend,
            Target::Backend => &mut self.backend,
        }
    }
}

/// In-memory [`FragmentStore`] guarded by a single mutex.
#[derive(Debug)]
pub struct PromptStore {
    category: Category,
    fragments: Mutex<Fragments>,
}

impl PromptStore {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            fragments: Mutex::new(Fragments::default()),
        }
    }

    pub fn register_frontend(
        &self,
        component: impl Into<PromptComponent>,
        fragment: impl Into<String>,
    ) -> Result<(), PromptError> {
        self.register(Target::Frontend, component.into(), fragment.into())
    }

    pub fn register_backend(
        &self,
        component: impl Into<PromptComponent>,
        fragment: impl Into<String>,
    ) -> Result<(), PromptError> {
        self.register(Target::Backend, component.into(), fragment.into())
    }

    pub fn len(&self, target: Target) -> usize {
        self.lock().side(target).len()
    }

    pub fn is_empty(&self) -> bool {
        let fragments = self.lock();
        fragments.frontend.is_empty() && fragments.backend.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Fragments> {
        // Every critical section is a single map operation, so a panic while
        // holding the lock cannot leave the maps half-updated.
        self.fragments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn check_category(&self, component: PromptComponent) -> Result<(), PromptError> {
        if component.category() == self.category {
            Ok(())
        } else {
            Err(PromptError::CategoryMismatch {
                expected: self.category,
                component,
            })
        }
    }
}

impl FragmentStore for PromptStore {
    fn declared_category(&self) -> Category {
        self.category
    }

    fn register(
        &self,
        target: Target,
        component: PromptComponent,
        fragment: String,
    ) -> Result<(), PromptError> {
        self.check_category(component)?;
        if fragment.trim().is_empty() {
            return Err(PromptError::EmptyFragment { target, component });
        }
        self.lock().side_mut(target).insert(component, fragment);
        Ok(())
    }

    fn get(&self, target: Target, component: PromptComponent) -> Result<String, PromptError> {
        self.check_category(component)?;
        self.lock()
            .side(target)
            .get(&component)
            .cloned()
            .ok_or(PromptError::FragmentNotFound { target, component })
    }

    fn remove(&self, target: Target, component: PromptComponent) -> Option<String> {
        if component.category() != self.category {
            return None;
        }
        self.lock().side_mut(target).remove(&component)
    }

    fn list(&self, target: Target) -> BTreeMap<PromptComponent, String> {
        self.lock()
            .side(target)
            .iter()
            .map(|(component, fragment)| (*component, fragment.clone()))
            .collect()
    }
}
