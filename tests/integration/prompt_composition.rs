use std::{sync::Arc, thread};

use ui_gen::{
    lib::errors::PromptError,
    prompts::{
        library::builtin_composer, Category, FragmentStore, Modality, PromptComponent,
        PromptComposer, PromptStore, Target, TaskContext, TechConstraint,
    },
};

fn minimal_composer() -> PromptComposer {
    let composer = PromptComposer::new();

    let task_context = PromptStore::new(Category::TASK_CONTEXT);
    task_context
        .register_frontend(TaskContext::UiGeneration, "Generate a UI.")
        .expect("register task context");
    let modality = PromptStore::new(Category::MODALITY);
    modality
        .register_frontend(Modality::Image, "Input is an image.")
        .expect("register modality");

    composer
        .register_store(Category::TASK_CONTEXT, Arc::new(task_context))
        .expect("task context store");
    composer
        .register_store(Category::MODALITY, Arc::new(modality))
        .expect("modality store");
    composer
}

#[test]
fn composes_tags_across_categories() {
    let composer = minimal_composer();
    let text = composer
        .compose_frontend(&[TaskContext::UiGeneration.into(), Modality::Image.into()])
        .expect("compose");
    assert_eq!(text, "Generate a UI. Input is an image.");

    let repeated = composer
        .compose_frontend(&[Modality::Image.into(), Modality::Image.into()])
        .expect("compose");
    assert_eq!(repeated, "Input is an image. Input is an image.");
    assert_eq!(composer.compose_frontend(&[]).expect("empty"), "");
}

#[test]
fn missing_backend_fragment_names_the_tag() {
    let composer = minimal_composer();
    let error = composer
        .compose_backend(&[TaskContext::UiGeneration.into()])
        .expect_err("no backend fragment");
    assert_eq!(
        error,
        PromptError::FragmentNotFound {
            target: Target::Backend,
            component: TaskContext::UiGeneration.into(),
        }
    );
}

#[test]
fn unregistered_category_fails_without_partial_text() {
    let composer = minimal_composer();
    let error = composer
        .compose_frontend(&[TaskContext::UiGeneration.into(), TechConstraint::NextJs.into()])
        .expect_err("tech constraint store missing");
    assert_eq!(
        error,
        PromptError::StoreNotRegistered {
            category: Category::TECH_CONSTRAINT
        }
    );
}

#[test]
fn custom_separator_joins_builtin_fragments() {
    let composer = builtin_composer("\n\n").expect("library");
    let parts: Vec<PromptComponent> = vec![TaskContext::UiGeneration.into(), Modality::Image.into()];
    let joined = composer.compose_frontend(&parts).expect("compose");
    let first = composer.compose_frontend(&parts[..1]).expect("first");
    let second = composer.compose_frontend(&parts[1..]).expect("second");
    assert_eq!(joined, format!("{first}\n\n{second}"));
}

#[test]
fn concurrent_writers_to_two_categories_lose_no_updates() {
    let composer = PromptComposer::new();
    let task_context = Arc::new(PromptStore::new(Category::TASK_CONTEXT));
    let modality = Arc::new(PromptStore::new(Category::MODALITY));
    composer
        .register_store(Category::TASK_CONTEXT, task_context.clone())
        .expect("task context store");
    composer
        .register_store(Category::MODALITY, modality.clone())
        .expect("modality store");

    thread::scope(|scope| {
        for &tag in TaskContext::ALL {
            let store = Arc::clone(&task_context);
            scope.spawn(move || {
                store
                    .register_frontend(tag, format!("task {tag}"))
                    .expect("register task context");
            });
        }
        for &tag in Modality::ALL {
            let store = Arc::clone(&modality);
            scope.spawn(move || {
                store
                    .register_frontend(tag, format!("input {tag}"))
                    .expect("register modality");
            });
        }
        for _ in 0..4 {
            let composer = &composer;
            scope.spawn(move || {
                for _ in 0..100 {
                    // Either fragment may still be missing; a success is whole.
                    if let Ok(text) = composer
                        .compose_frontend(&[TaskContext::UiGeneration.into(), Modality::Image.into()])
                    {
                        assert_eq!(text, "task UI_GENERATION input IMAGE");
                    }
                }
            });
        }
    });

    assert_eq!(task_context.len(Target::Frontend), TaskContext::ALL.len());
    assert_eq!(modality.len(Target::Frontend), Modality::ALL.len());
    assert_eq!(modality.list(Target::Frontend).len(), Modality::ALL.len());
    let text = composer
        .compose_frontend(&[TaskContext::UiFormBuilder.into(), Modality::JsonSchema.into()])
        .expect("compose after writers finish");
    assert_eq!(text, "task UI_FORM_BUILDER input JSON_SCHEMA");
}
