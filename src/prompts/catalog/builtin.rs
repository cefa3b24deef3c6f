use crate::{
    lib::errors::CatalogError,
    prompts::{
        component::{
            Modality::*, OutputControl::*, PromptComponent, Refinement::*, TaskContext::*,
            TechConstraint::*,
        },
        composer::PromptComposer,
    },
};

use super::{PromptCatalog, PromptCatalogBuilder};

macro_rules! components {
    ($($tag:expr),* $(,)?) => {
        &[$(PromptComponent::from($tag)),*]
    };
}

/// Single prompt for building a UI from screenshots and an API contract.
pub fn default_catalog(composer: &PromptComposer) -> Result<PromptCatalog, CatalogError> {
    PromptCatalogBuilder::new(composer)
        .add_frontend_generation_prompt(
            "frontend_generation",
            "Returns setup instructions for building a UI from images and api_contract",
            components![UiGeneration, Image, Text, NextJs, StrictCompliance],
        )
        .build()
}

/// Next.js prompt collection covering generation, audits and refinements.
pub fn builtin_catalog(composer: &PromptComposer) -> Result<PromptCatalog, CatalogError> {
    PromptCatalogBuilder::new(composer)
        .add_frontend_generation_prompt(
            "screenshot_text_to_compiled_ui",
            "Generate strictly compiled Next.js components taking layout from screenshots and functionality from text descriptions",
            components![
                UiGeneration, Image, Text, NextJs, React, Tailwind, TypeScript,
                StrictCompliance, CopyPasteReady, TypeAnnotated, FullModule,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_image_to_component",
            "Generate Next.js React components from UI images/screenshots with Tailwind CSS styling",
            components![
                UiGeneration, Image, NextJs, React, Tailwind, TypeScript,
                CopyPasteReady, TypeAnnotated, MobileResponsive,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_sketch_to_component",
            "Convert hand-drawn sketches and wireframes to Next.js components",
            components![
                UiGeneration, Sketch, NextJs, React, Tailwind, TypeScript,
                CopyPasteReady, MobileResponsive,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_spec_to_component",
            "Build Next.js components from markdown specifications and requirements",
            components![
                UiSpecToCode, MarkdownSpec, NextJs, React, Tailwind, TypeScript,
                FullModule, WithTests, TypeAnnotated,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_component_library",
            "Generate reusable Next.js component libraries with Storybook integration",
            components![
                UiComponentLibGen, Text, NextJs, React, Tailwind, TypeScript, Storybook,
                FullModule, WithTests, TypeAnnotated, A11yEnforced,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_form_builder",
            "Generate dynamic forms from JSON schemas with validation and Next.js integration",
            components![
                UiFormBuilder, JsonSchema, NextJs, React, Tailwind, TypeScript,
                CopyPasteReady, TypeAnnotated, A11yEnforced,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_accessibility_audit",
            "Audit and improve accessibility of Next.js components for WCAG compliance",
            components![
                UiA11yReview, Html, NextJs, React, Tailwind,
                A11yEnforced, Explainable, FixA11y,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_performance_optimizer",
            "Optimize Next.js components for performance and bundle size",
            components![
                UiRefactor, Text, NextJs, React, TypeScript,
                PerformanceSafe, TypeAnnotated, ReduceBundleSize, ApplyBestPractices,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_responsive_enhancer",
            "Add responsive design capabilities to existing Next.js components",
            components![
                UiGeneration, Html, NextJs, Tailwind,
                MobileResponsive, CopyPasteReady, AddResponsiveness, FixVisualLayout,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_theme_generator",
            "Generate comprehensive design systems and themes for Next.js applications",
            components![
                UiThemeGen, Text, NextJs, Tailwind, TypeScript,
                FullModule, DarkModeSupported, ExtractVariables,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_test_generator",
            "Generate comprehensive test suites for Next.js components",
            components![
                UiTestGen, Text, NextJs, React, TypeScript,
                WithTests, TypeAnnotated, A11yEnforced,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_error_boundary",
            "Generate robust error boundaries for Next.js applications",
            components![
                UiErrorBoundaryGen, Text, NextJs, React, TypeScript,
                FullModule, TypeAnnotated, Explainable,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_i18n_setup",
            "Set up internationalization for Next.js applications",
            components![
                UiI18nGen, Text, NextJs, React, TypeScript,
                FullModule, IntegrationReady, TypeAnnotated,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_migration_assistant",
            "Migrate UI components to Next.js from other frameworks",
            components![
                UiMigration, Html, NextJs, React, Tailwind, TypeScript,
                CopyPasteReady, TypeAnnotated,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_doc_generator",
            "Generate comprehensive documentation and Storybook stories for Next.js components",
            components![
                UiDocGen, Text, NextJs, Storybook, TypeScript,
                FullModule, Explainable, TypeAnnotated,
            ],
        )
        .add_frontend_generation_prompt(
            "nextjs_automation_dashboard",
            "Generate admin panels and automation dashboards with Next.js",
            components![
                UiAutomationWidget, JsonSchema, NextJs, React, Tailwind, TypeScript,
                FullModule, IntegrationReady, TypeAnnotated,
            ],
        )
        .build()
}
