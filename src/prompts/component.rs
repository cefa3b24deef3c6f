//! Prompt component taxonomy.
//!
//! Every tag belongs to exactly one [`Category`]. Each built-in category is a
//! Rust enum implementing [`PromptTag`]; stores and the composer only see the
//! type-erased [`PromptComponent`], so a new category is a new `Category`
//! constant plus a new tag enum.
use std::{fmt, str::FromStr};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::lib::errors::TagParseError;

/// Named grouping of related tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(&'static str);

impl Category {
    pub const TASK_CONTEXT: Category = Category("TaskContext");
    pub const MODALITY: Category = Category("Modality");
    pub const TECH_CONSTRAINT: Category = Category("TechConstraint");
    pub const OUTPUT_CONTROL: Category = Category("OutputControl");
    pub const REFINEMENT: Category = Category("Refinement");

    /// Categories shipped with the crate, in prompt-assembly order.
    pub const BUILTIN: [Category; 5] = [
        Category::TASK_CONTEXT,
        Category::MODALITY,
        Category::TECH_CONSTRAINT,
        Category::OUTPUT_CONTROL,
        Category::REFINEMENT,
    ];

    /// Declare a category. Categories compare by name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Assembly track a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Frontend,
    Backend,
}

impl Target {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Target::Frontend => "frontend",
            Target::Backend => "backend",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-erased tag: a category plus the tag name inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PromptComponent {
    category: Category,
    name: &'static str,
}

impl PromptComponent {
    pub const fn new(category: Category, name: &'static str) -> Self {
        Self { category, name }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for PromptComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.name)
    }
}

/// Implemented by every tag enum.
pub trait PromptTag: Copy + Into<PromptComponent> + 'static {
    /// Category every value of this type belongs to.
    const CATEGORY: Category;

    /// All tags of this category, in declaration order.
    fn all() -> &'static [Self];

    fn name(&self) -> &'static str;

    fn component(self) -> PromptComponent {
        self.into()
    }
}

macro_rules! prompt_tags {
    (
        $(#[$meta:meta])*
        $name:ident in $category:expr => {
            $( $(#[$vmeta:meta])* $variant:ident = $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl PromptTag for $name {
            const CATEGORY: Category = $category;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn name(&self) -> &'static str {
                self.as_str()
            }
        }

        impl From<$name> for PromptComponent {
            fn from(tag: $name) -> Self {
                PromptComponent::new($category, tag.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TagParseError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|tag| tag.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| TagParseError::Unknown {
                        input: raw.to_string(),
                    })
            }
        }
    };
}

prompt_tags! {
    /// Primary intent of the generation task.
    TaskContext in Category::TASK_CONTEXT => {
        /// Standard UI components (forms, buttons, navbars).
        UiGeneration = "UI_GENERATION",
        UiFixBugs = "UI_FIX_BUGS",
        UiThemeGen = "UI_THEME_GEN",
        /// Accessibility audit (ARIA, WCAG).
        UiA11yReview = "UI_A11Y_REVIEW",
        UiComponentLibGen = "UI_COMPONENT_LIB_GEN",
        /// Specs (Markdown, Figma) to code.
        UiSpecToCode = "UI_SPEC_TO_CODE",
        UiTestGen = "UI_TEST_GEN",
        UiRefactor = "UI_REFACTOR",
        /// Move UI from one framework to another.
        UiMigration = "UI_MIGRATION",
        UiDocGen = "UI_DOC_GEN",
        /// Admin panels and dashboards.
        UiAutomationWidget = "UI_AUTOMATION_WIDGET",
        UiErrorBoundaryGen = "UI_ERROR_BOUNDARY_GEN",
        UiI18nGen = "UI_I18N_GEN",
        /// Forms from JSON/schema/spec.
        UiFormBuilder = "UI_FORM_BUILDER",
    }
}

prompt_tags! {
    /// Kind of input the generation works from.
    Modality in Category::MODALITY => {
        Text = "TEXT",
        /// Screenshot or rendered component.
        Image = "IMAGE",
        /// Hand-drawn sketch or whiteboard wireframe.
        Sketch = "SKETCH",
        MarkdownSpec = "MARKDOWN_SPEC",
        JsonSchema = "JSON_SCHEMA",
        /// Existing HTML, for audits and migrations.
        Html = "HTML",
        YamlUiConfig = "YAML_UI_CONFIG",
        DslUiLang = "DSL_UI_LANG",
    }
}

prompt_tags! {
    /// Technologies the output must conform to.
    TechConstraint in Category::TECH_CONSTRAINT => {
        React = "REACT",
        NextJs = "NEXTJS",
        Vue = "VUE",
        Svelte = "SVELTE",
        Tailwind = "TAILWIND",
        ChakraUi = "CHAKRA_UI",
        MaterialUi = "MATERIAL_UI",
        Storybook = "STORYBOOK",
        TypeScript = "TYPESCRIPT",
        Flutter = "FLUTTER",
        ReactNative = "REACT_NATIVE",
        AntDesign = "ANT_DESIGN",
        Bootstrap = "BOOTSTRAP",
        WebComponents = "WEB_COMPONENTS",
        PyQt = "PYQT",
        AndroidJetpack = "ANDROID_JETPACK",
        NoFramework = "NO_FRAMEWORK",
    }
}

prompt_tags! {
    /// Style, format and functional requirements of generated code.
    OutputControl in Category::OUTPUT_CONTROL => {
        StrictCompliance = "STRICT_COMPLIANCE",
        CopyPasteReady = "COPY_PASTE_READY",
        NoImports = "NO_IMPORTS",
        /// Imports, styles and setup included.
        FullModule = "FULL_MODULE",
        SnippetOnly = "SNIPPET_ONLY",
        Explainable = "EXPLAINABLE",
        NoComments = "NO_COMMENTS",
        WithTests = "WITH_TESTS",
        A11yEnforced = "A11Y_ENFORCED",
        TypeAnnotated = "TYPE_ANNOTATED",
        /// Avoid rerenders and bloat.
        PerformanceSafe = "PERFORMANCE_SAFE",
        ExtractVariables = "EXTRACT_VARIABLES",
        MobileResponsive = "MOBILE_RESPONSIVE",
        DarkModeSupported = "DARK_MODE_SUPPORTED",
        IntegrationReady = "INTEGRATION_READY",
    }
}

prompt_tags! {
    /// Post-generation improvement and bug-fix directives.
    Refinement in Category::REFINEMENT => {
        FixVisualLayout = "FIX_VISUAL_LAYOUT",
        FixA11y = "FIX_A11Y",
        AddResponsiveness = "ADD_RESPONSIVENESS",
        FixInteractivity = "FIX_INTERACTIVITY",
        ExtractConstants = "EXTRACT_CONSTANTS",
        AddComments = "ADD_COMMENTS",
        RemoveDuplication = "REMOVE_DUPLICATION",
        ApplyBestPractices = "APPLY_BEST_PRACTICES",
        SplitComponent = "SPLIT_COMPONENT",
        AddTypes = "ADD_TYPES",
        /// Proper HTML5 tags (`<section>`, `<nav>`).
        UpgradeSemantics = "UPGRADE_SEMANTICS",
        ImproveContrast = "IMPROVE_CONTRAST",
        FixStateManagement = "FIX_STATE_MANAGEMENT",
        ReduceBundleSize = "REDUCE_BUNDLE_SIZE",
        AddLoadingStates = "ADD_LOADING_STATES",
        EnforceNamingConventions = "ENFORCE_NAMING_CONVENTIONS",
    }
}

fn components_of<T: PromptTag>() -> impl Iterator<Item = PromptComponent> {
    T::all().iter().map(|tag| tag.component())
}

/// Every tag of the built-in categories, grouped by category.
pub fn builtin_components() -> Vec<PromptComponent> {
    components_of::<TaskContext>()
        .chain(components_of::<Modality>())
        .chain(components_of::<TechConstraint>())
        .chain(components_of::<OutputControl>())
        .chain(components_of::<Refinement>())
        .collect()
}

/// Resolve a built-in tag from `Category.TAG` (or `Category:TAG`).
///
/// A bare `TAG` is accepted when exactly one built-in category defines it.
/// Matching is case-insensitive on both parts.
pub fn parse_component(raw: &str) -> Result<PromptComponent, TagParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TagParseError::Empty);
    }

    let (category, tag) = match trimmed.split_once(['.', ':']) {
        Some((category, tag)) => (Some(category.trim()), tag.trim()),
        None => (None, trimmed),
    };

    let mut matches = builtin_components().into_iter().filter(|component| {
        component.name().eq_ignore_ascii_case(tag)
            && category.map_or(true, |c| component.category().name().eq_ignore_ascii_case(c))
    });

    let first = matches.next().ok_or_else(|| TagParseError::Unknown {
        input: raw.to_string(),
    })?;
    if let Some(second) = matches.next() {
        return Err(TagParseError::Ambiguous {
            input: raw.to_string(),
            candidates: vec![first.to_string(), second.to_string()],
        });
    }
    Ok(first)
}
