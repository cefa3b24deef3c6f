use crate::prompts::component::TaskContext;

pub(super) const FRONTEND: &[(TaskContext, &str)] = &[
    (TaskContext::UiGeneration, include_str!("fragments/ui_generation.md")),
    (
        TaskContext::UiFixBugs,
        "You are debugging an existing user interface. Reproduce every reported defect, fix the root cause in the component that owns it, and leave unrelated markup and styling untouched.",
    ),
    (
        TaskContext::UiThemeGen,
        "Generate a complete design theme: color palette, typography scale, spacing tokens, radii, shadows, and light and dark variants, exposed as reusable tokens that every component consumes.",
    ),
    (
        TaskContext::UiA11yReview,
        "Audit the interface for accessibility. Check ARIA roles and labels, keyboard navigation, focus order, color contrast, and screen reader output against WCAG 2.1 AA, then report and fix every violation.",
    ),
    (
        TaskContext::UiComponentLibGen,
        "Build a reusable component library. Each component must have a documented props interface, sensible defaults, variants, and consistent styling so it can be composed into any page.",
    ),
    (
        TaskContext::UiSpecToCode,
        "Translate the provided specification into working UI code. Every screen, field, state, and interaction described in the spec must be implemented, and nothing outside the spec may be invented.",
    ),
    (
        TaskContext::UiTestGen,
        "Write automated tests for the user interface. Cover rendering, user interactions, loading and error states, and edge cases with unit and integration tests that run in CI without manual steps.",
    ),
    (
        TaskContext::UiRefactor,
        "Refactor the existing UI code for clarity and maintainability while preserving its visible behavior exactly. Remove dead code, untangle state, and split oversized components.",
    ),
    (
        TaskContext::UiMigration,
        "Migrate the existing interface to the target framework. Preserve layout, behavior, and data flow screen by screen, replacing framework-specific APIs with their idiomatic equivalents.",
    ),
    (
        TaskContext::UiDocGen,
        "Produce developer documentation for the UI: component overviews, props tables, usage examples, and setup instructions that a new team member can follow without help.",
    ),
    (
        TaskContext::UiAutomationWidget,
        "Build an internal dashboard or admin panel: data tables, filters, bulk actions, status widgets, and forms wired to the backend for day-to-day operational work.",
    ),
    (
        TaskContext::UiErrorBoundaryGen,
        "Add error boundaries around every independently failing region of the interface, with user-friendly fallback screens, retry actions, and error reporting hooks.",
    ),
    (
        TaskContext::UiI18nGen,
        "Internationalize the interface. Extract every user-visible string into locale files, wire a translation provider, and support locale switching, pluralization, and right-to-left layouts.",
    ),
    (
        TaskContext::UiFormBuilder,
        "Generate forms from the provided schema. Derive fields, labels, input types, validation rules, and error messages from the schema, and submit the exact payload it describes.",
    ),
];

pub(super) const BACKEND: &[(TaskContext, &str)] = &[
    (
        TaskContext::UiGeneration,
        include_str!("fragments/ui_generation_backend.md"),
    ),
    (
        TaskContext::UiFixBugs,
        "Trace each reported UI defect to the API and fix any backend cause: wrong status codes, malformed payloads, or missing fields.",
    ),
    (
        TaskContext::UiThemeGen,
        "Serve theme tokens and per-user theme preferences from an endpoint so the UI can load and persist them.",
    ),
    (
        TaskContext::UiA11yReview,
        "Make sure every API error and status message is plain text suitable for screen readers and carries no markup.",
    ),
    (
        TaskContext::UiComponentLibGen,
        "Provide typed response schemas the component library can bind to directly without ad-hoc mapping.",
    ),
    (
        TaskContext::UiSpecToCode,
        "Implement the endpoints the specification requires with request and response schemas that match it field for field.",
    ),
    (
        TaskContext::UiTestGen,
        "Write API tests that exercise every endpoint the UI calls, including validation failures and error responses.",
    ),
    (
        TaskContext::UiRefactor,
        "Keep endpoint paths and payloads unchanged while the UI is refactored so no request starts failing.",
    ),
    (
        TaskContext::UiMigration,
        "Keep the API contract stable during the migration so old and new frontends can run against the same backend.",
    ),
    (
        TaskContext::UiDocGen,
        "Document every endpoint the UI consumes with its method, path, request schema, response schema, and error codes.",
    ),
    (
        TaskContext::UiAutomationWidget,
        "Expose paginated, filterable, and sortable list endpoints plus bulk action endpoints for the dashboard widgets.",
    ),
    (
        TaskContext::UiErrorBoundaryGen,
        "Return structured error bodies with stable codes and messages so the UI can render precise fallback screens.",
    ),
    (
        TaskContext::UiI18nGen,
        "Accept a locale on every request and return localized messages and locale-aware formatting for dates and numbers.",
    ),
    (
        TaskContext::UiFormBuilder,
        "Validate form submissions server-side against the same schema used to generate the form and return field-level errors.",
    ),
];
