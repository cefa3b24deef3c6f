use crate::prompts::component::Refinement;

pub(super) const FRONTEND: &[(Refinement, &str)] = &[
    (
        Refinement::FixVisualLayout,
        "Identify and fix visual layout issues including spacing problems, alignment issues, and element positioning. \
         Correct CSS layout bugs, improper margins and padding, and visual inconsistencies in component arrangement. \
         Ensure proper visual hierarchy and clean alignment throughout the interface.",
    ),
    (
        Refinement::FixA11y,
        "Add comprehensive accessibility features including ARIA labels, semantic HTML tags, and screen reader support. \
         Implement keyboard navigation, focus management, and accessibility best practices for inclusive design. \
         Ensure components meet WCAG guidelines and are usable by people with disabilities.",
    ),
    (
        Refinement::AddResponsiveness,
        "Implement responsive design patterns to ensure proper rendering across mobile, tablet, and desktop devices. \
         Add appropriate breakpoints, flexible layouts, and adaptive styling for different screen sizes. \
         Optimize user experience for touch interfaces and varying viewport dimensions.",
    ),
    (
        Refinement::FixInteractivity,
        "Fix interactive element functionality including button actions, form inputs, and user interaction handlers. \
         Ensure proper event handling, state updates, and user feedback for all interactive components. \
         Correct broken click handlers, form submissions, and interactive behavior issues.",
    ),
    (
        Refinement::ExtractConstants,
        "Identify hardcoded values and extract them into named constants or configuration objects. \
         Replace magic numbers, string literals, and repeated values with meaningful constant definitions. \
         Centralize configurable values and eliminate duplication.",
    ),
    (
        Refinement::AddComments,
        "Add helpful developer comments that explain complex logic, design decisions, and implementation details. \
         Include documentation for component APIs, usage patterns, and important behavioral considerations. \
         Keep the comments clear and concise.",
    ),
    (
        Refinement::RemoveDuplication,
        "Identify and eliminate code duplication by extracting common functionality into reusable components or utilities. \
         Refactor repeated patterns into shared functions, hooks, or component abstractions. \
         Follow the DRY (Don't Repeat Yourself) principle.",
    ),
    (
        Refinement::ApplyBestPractices,
        "Apply modern UI development best practices including proper component architecture and clean code principles. \
         Implement industry-standard patterns for state management, component composition, and code organization. \
         Ensure code follows established conventions and maintainability guidelines.",
    ),
    (
        Refinement::SplitComponent,
        "Break down large, monolithic components into smaller, focused, and reusable pieces. \
         Separate concerns by extracting logical units into individual components with clear responsibilities. \
         Improve maintainability and reusability through proper decomposition.",
    ),
    (
        Refinement::AddTypes,
        "Add comprehensive type annotations using the type checking system available on the target platform. \
         Define interfaces, type definitions, and type constraints for better code safety and developer experience. \
         Ensure all component props, function parameters, and return values have explicit type information.",
    ),
    (
        Refinement::UpgradeSemantics,
        "Replace generic HTML elements with proper semantic HTML5 tags such as section, nav, article, and header. \
         Improve document structure and accessibility by using meaningful semantic elements. \
         Enhance SEO and screen reader compatibility through proper semantic markup.",
    ),
    (
        Refinement::ImproveContrast,
        "Analyze and improve color contrast ratios to meet accessibility standards and enhance visual readability. \
         Adjust color choices, text styling, and background combinations for better visual contrast. \
         Ensure color schemes meet WCAG contrast requirements for all user interface elements.",
    ),
    (
        Refinement::FixStateManagement,
        "Correct issues with component state management including improper hook usage, state mutation, and prop handling. \
         Fix state update patterns, event handling logic, and component lifecycle management problems. \
         Ensure proper state flow and prevent common state-related bugs and anti-patterns.",
    ),
    (
        Refinement::ReduceBundleSize,
        "Optimize code for smaller bundle sizes through tree shaking, lazy loading, and efficient import patterns. \
         Eliminate unnecessary dependencies and unused code. \
         Use code splitting and dynamic imports to reduce the initial bundle size.",
    ),
    (
        Refinement::AddLoadingStates,
        "Implement loading indicators and states for asynchronous operations and data fetching workflows. \
         Add proper loading spinners, skeleton screens, and progress indicators. \
         Handle loading, error, and success states appropriately in async component interactions.",
    ),
    (
        Refinement::EnforceNamingConventions,
        "Standardize naming conventions for components, props, functions, and CSS classes throughout the codebase. \
         Apply consistent naming patterns that follow industry standards and team conventions. \
         Improve readability through clear, descriptive, and consistent naming.",
    ),
];
