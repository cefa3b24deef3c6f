use crate::prompts::component::Modality;

pub(super) const FRONTEND: &[(Modality, &str)] = &[
    (
        Modality::Text,
        "The requirements are given as a plain-text description. Treat every stated requirement as mandatory and ask for nothing that is not described.",
    ),
    (Modality::Image, include_str!("fragments/image.md")),
    (
        Modality::Sketch,
        "The input is a hand-drawn sketch or whiteboard wireframe. Infer the layout grid, component types, and hierarchy from it, and replace rough strokes with clean production components.",
    ),
    (
        Modality::MarkdownSpec,
        "The input is a Markdown specification. Each heading describes a screen or section and each list describes its elements and behaviors; implement them in the order given.",
    ),
    (
        Modality::JsonSchema,
        "The input is a JSON Schema. Derive field names, types, required flags, enums, and validation constraints directly from it without renaming anything.",
    ),
    (
        Modality::Html,
        "The input is existing HTML markup. Preserve its structure and content while converting it into the target stack's components.",
    ),
    (
        Modality::YamlUiConfig,
        "The input is a YAML UI configuration. Each entry describes a component, its props, and its children; render the tree exactly as configured.",
    ),
    (
        Modality::DslUiLang,
        "The input is written in a UI description DSL. Parse each declaration into the corresponding component and keep the declared nesting and ordering.",
    ),
];
