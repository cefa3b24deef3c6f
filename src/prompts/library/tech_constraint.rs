use crate::prompts::component::TechConstraint;

pub(super) const FRONTEND: &[(TechConstraint, &str)] = &[
    (
        TechConstraint::React,
        "Use React with functional components and hooks only. No class components.",
    ),
    (TechConstraint::NextJs, include_str!("fragments/nextjs.md")),
    (
        TechConstraint::Vue,
        "Use Vue 3 single-file components with the Composition API and `<script setup>`.",
    ),
    (
        TechConstraint::Svelte,
        "Use Svelte components with reactive declarations and stores for shared state.",
    ),
    (
        TechConstraint::Tailwind,
        "Style exclusively with Tailwind CSS utility classes. Do not write custom CSS files or inline styles.",
    ),
    (
        TechConstraint::ChakraUi,
        "Build the interface with Chakra UI components and its theme tokens; do not mix in another component library.",
    ),
    (
        TechConstraint::MaterialUi,
        "Build the interface with Material UI components and a single `createTheme` configuration.",
    ),
    (
        TechConstraint::Storybook,
        "Provide a Storybook story for every component covering its default state and each variant.",
    ),
    (
        TechConstraint::TypeScript,
        "Write all code in TypeScript with `strict` mode enabled. Never use `any`.",
    ),
    (
        TechConstraint::Flutter,
        "Use Flutter with Dart. Compose the UI from stateless and stateful widgets and follow Material 3 guidelines.",
    ),
    (
        TechConstraint::ReactNative,
        "Use React Native with functional components. Use only core primitives and platform-safe APIs that run on iOS and Android.",
    ),
    (
        TechConstraint::AntDesign,
        "Build the interface with Ant Design components and configure styling through its theme tokens.",
    ),
    (
        TechConstraint::Bootstrap,
        "Use Bootstrap 5 layout utilities and components. Do not depend on jQuery.",
    ),
    (
        TechConstraint::WebComponents,
        "Implement standards-based Web Components using custom elements and shadow DOM without a framework runtime.",
    ),
    (
        TechConstraint::PyQt,
        "Use PyQt6 widgets and layouts for a desktop interface, with signals and slots for every interaction.",
    ),
    (
        TechConstraint::AndroidJetpack,
        "Use Kotlin with Jetpack Compose. Hoist state into ViewModels and keep composables stateless where possible.",
    ),
    (
        TechConstraint::NoFramework,
        "Use plain HTML, CSS, and vanilla JavaScript. Do not add any framework or build step.",
    ),
];

pub(super) const BACKEND: &[(TechConstraint, &str)] = &[
    (
        TechConstraint::NextJs,
        "Implement server-side logic as Next.js Route Handlers under `/app/api`, typed end to end with TypeScript.",
    ),
    (
        TechConstraint::TypeScript,
        "Write all server code in TypeScript with `strict` mode and share request and response types with the frontend.",
    ),
    (
        TechConstraint::NoFramework,
        "Serve the API from a minimal HTTP server without a web framework, returning JSON with explicit content types.",
    ),
];
