//! Prompt taxonomy, fragment stores and composition.
pub mod catalog;
pub mod component;
pub mod composer;
pub mod library;
pub mod store;

pub use catalog::{CatalogKind, PromptCatalog, PromptCatalogBuilder, PromptEntry};
pub use component::{
    Category, Modality, OutputControl, PromptComponent, PromptTag, Refinement, Target, TaskContext,
    TechConstraint,
};
pub use composer::PromptComposer;
pub use store::{FragmentStore, PromptStore};
