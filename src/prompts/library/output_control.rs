use crate::prompts::component::OutputControl;

pub(super) const FRONTEND: &[(OutputControl, &str)] = &[
    (
        OutputControl::StrictCompliance,
        include_str!("fragments/strict_compliance.md"),
    ),
    (
        OutputControl::CopyPasteReady,
        "Output code that can be pasted into a project and run immediately, with no placeholders left to fill in.",
    ),
    (
        OutputControl::NoImports,
        "Do not include import statements; assume every dependency is already in scope.",
    ),
    (
        OutputControl::FullModule,
        "Output complete modules including imports, styles, types, and any setup required to use them.",
    ),
    (
        OutputControl::SnippetOnly,
        "Output only the minimal code snippet that answers the request, without surrounding boilerplate.",
    ),
    (
        OutputControl::Explainable,
        "After the code, explain the main decisions and how the pieces fit together in a short section.",
    ),
    (
        OutputControl::NoComments,
        "Do not write comments in the generated code.",
    ),
    (
        OutputControl::WithTests,
        "Include unit tests for every component and utility alongside the implementation.",
    ),
    (
        OutputControl::A11yEnforced,
        "Every element must be accessible: semantic markup, labelled controls, keyboard support, and WCAG AA contrast.",
    ),
    (
        OutputControl::TypeAnnotated,
        "Annotate every prop, parameter, return value, and state variable with an explicit type.",
    ),
    (
        OutputControl::PerformanceSafe,
        "Avoid unnecessary re-renders and heavy dependencies; memoize expensive work and lazy-load what is not needed up front.",
    ),
    (
        OutputControl::ExtractVariables,
        "Extract repeated values such as colors, sizes, and labels into named variables or constants.",
    ),
    (
        OutputControl::MobileResponsive,
        "The layout must work on mobile, tablet, and desktop widths using a mobile-first approach.",
    ),
    (
        OutputControl::DarkModeSupported,
        "Support light and dark color schemes, following the system preference with a manual toggle.",
    ),
    (
        OutputControl::IntegrationReady,
        "Expose clear props and callbacks so the output can be wired into an existing application without modification.",
    ),
];
