//! Catalog model: the ordered tree of section headers and topic links.
//!
//! The catalog is static data the application ships with. Order is
//! significant: render order equals catalog order, and every link belongs
//! to the nearest preceding header. A leading run of links with no header
//! is legal and forms an unowned group (the Home link below).

/// One entry in the navigation catalog.
///
/// Headers divide the catalog into sections; a header owns the contiguous
/// run of links that follow it up to the next header. Links carry a
/// pre-normalized `match_text` (lowercased title + blurb) so the filter
/// engine never re-derives it per keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    Header {
        title: String,
    },
    Link {
        title: String,
        path: String,
        blurb: String,
        match_text: String,
    },
}

impl CatalogEntry {
    pub fn is_link(&self) -> bool {
        matches!(self, CatalogEntry::Link { .. })
    }

    pub fn title(&self) -> &str {
        match self {
            CatalogEntry::Header { title } => title,
            CatalogEntry::Link { title, .. } => title,
        }
    }

    /// Route path for links, `None` for headers.
    pub fn path(&self) -> Option<&str> {
        match self {
            CatalogEntry::Header { .. } => None,
            CatalogEntry::Link { path, .. } => Some(path),
        }
    }
}

fn header(title: &str) -> CatalogEntry {
    CatalogEntry::Header {
        title: title.to_string(),
    }
}

fn link(title: &str, path: &str, blurb: &str) -> CatalogEntry {
    CatalogEntry::Link {
        title: title.to_string(),
        path: path.to_string(),
        blurb: blurb.to_string(),
        match_text: format!("{} {}", title, blurb).to_lowercase(),
    }
}

/// Immutable, ordered catalog of navigable entries. Built once at startup;
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the link with the given path, if present. Paths are unique
    /// so the first hit is the only hit.
    pub fn link_position(&self, path: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.path() == Some(path))
    }

    /// Title of the section owning the entry at `index`: the nearest
    /// preceding header. `None` for entries in an unowned leading run.
    pub fn section_of(&self, index: usize) -> Option<&str> {
        let end = index.min(self.entries.len().checked_sub(1)?);
        self.entries[..=end]
            .iter()
            .rev()
            .find_map(|e| match e {
                CatalogEntry::Header { title } => Some(title.as_str()),
                CatalogEntry::Link { .. } => None,
            })
    }

    /// Path of the first link in catalog order, if any.
    pub fn first_link_path(&self) -> Option<&str> {
        self.entries.iter().find_map(|e| e.path())
    }

    /// The topic catalog the application ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            link("Home", "/", "Start page and reading guide for the notes"),
            header("Intro"),
            link(
                "What Is React ???",
                "/intro/what-is-react",
                "A library for building user interfaces out of components",
            ),
            link(
                "Why React",
                "/intro/why-react",
                "Declarative rendering, one-way data flow, and a huge ecosystem",
            ),
            link(
                "Project Setup",
                "/intro/project-setup",
                "Scaffold an app with Vite and run the dev server",
            ),
            link(
                "Thinking In Components",
                "/intro/thinking-in-components",
                "Break a mockup into a component hierarchy before coding",
            ),
            link(
                "Folder Structure",
                "/intro/folder-structure",
                "Organize source files by feature rather than by type",
            ),
            header("JSX & Rendering"),
            link(
                "JSX Basics",
                "/jsx/basics",
                "Markup syntax that compiles to createElement calls",
            ),
            link(
                "Embedding Expressions",
                "/jsx/expressions",
                "Interpolate any JavaScript expression inside curly braces",
            ),
            link(
                "JSX Attributes",
                "/jsx/attributes",
                "camelCase props, className, htmlFor and spread attributes",
            ),
            link(
                "Fragments",
                "/jsx/fragments",
                "Group children without adding an extra DOM node",
            ),
            link(
                "Rendering To The DOM",
                "/jsx/rendering",
                "createRoot, the render cycle, and StrictMode double renders",
            ),
            header("Components"),
            link(
                "Function Components",
                "/components/function-components",
                "Plain functions that take props and return JSX",
            ),
            link(
                "Class Components",
                "/components/class-components",
                "Legacy class syntax, render method and this.props",
            ),
            link(
                "Composition",
                "/components/composition",
                "Build screens by nesting small single-purpose components",
            ),
            link(
                "The Children Prop",
                "/components/children",
                "Slot arbitrary content into a component with props.children",
            ),
            link(
                "Styling Components",
                "/components/styling",
                "Inline styles, CSS modules and utility class approaches",
            ),
            header("Props & State"),
            link(
                "Passing Props",
                "/props-state/passing-props",
                "Read-only inputs flowing from parent to child",
            ),
            link(
                "Default Props",
                "/props-state/default-props",
                "Fallback values with destructuring defaults",
            ),
            link(
                "Prop Drilling",
                "/props-state/prop-drilling",
                "Threading data through layers and when it becomes a smell",
            ),
            link(
                "Lifting State Up",
                "/props-state/lifting-state",
                "Move shared state to the closest common ancestor",
            ),
            link(
                "Immutable Updates",
                "/props-state/immutable-updates",
                "Copy objects and arrays instead of mutating them in place",
            ),
            header("Hooks: Core"),
            link(
                "useState",
                "/hooks-core/useState",
                "Declare local component state with a value and a setter",
            ),
            link(
                "useEffect",
                "/hooks-core/useEffect",
                "Synchronize a component with external systems after render",
            ),
            link(
                "useContext",
                "/hooks-core/useContext",
                "Read the nearest provider value without prop drilling",
            ),
            link(
                "useRef",
                "/hooks-core/useRef",
                "Hold a mutable value or DOM handle across renders",
            ),
            link(
                "useMemo",
                "/hooks-core/useMemo",
                "Cache an expensive computation between re-renders",
            ),
            link(
                "useCallback",
                "/hooks-core/useCallback",
                "Keep a stable function identity for memoized children",
            ),
            link(
                "useReducer",
                "/hooks-core/useReducer",
                "Consolidate state transitions into a reducer function",
            ),
            header("Hooks: Advanced"),
            link(
                "useLayoutEffect",
                "/hooks-advanced/useLayoutEffect",
                "Measure layout synchronously before the browser paints",
            ),
            link(
                "useImperativeHandle",
                "/hooks-advanced/useImperativeHandle",
                "Expose a narrow imperative API from a ref component",
            ),
            link(
                "useTransition",
                "/hooks-advanced/useTransition",
                "Mark updates as non-urgent to keep the UI responsive",
            ),
            link(
                "useDeferredValue",
                "/hooks-advanced/useDeferredValue",
                "Defer re-rendering of expensive subtrees behind fresh input",
            ),
            link(
                "useSyncExternalStore",
                "/hooks-advanced/useSyncExternalStore",
                "Subscribe to an external store with tearing protection",
            ),
            link(
                "useId",
                "/hooks-advanced/useId",
                "Generate stable unique ids for accessibility attributes",
            ),
            link(
                "Custom Hooks",
                "/hooks-advanced/custom-hooks",
                "Extract reusable stateful logic into use-prefixed functions",
            ),
            link(
                "Rules Of Hooks",
                "/hooks-advanced/rules-of-hooks",
                "Call hooks unconditionally at the top level of components",
            ),
            header("Events & Forms"),
            link(
                "Handling Events",
                "/events-forms/handling-events",
                "Attach handlers with onClick and friends, no addEventListener",
            ),
            link(
                "Synthetic Events",
                "/events-forms/synthetic-events",
                "The cross-browser wrapper around native browser events",
            ),
            link(
                "Controlled Inputs",
                "/events-forms/controlled-inputs",
                "Drive input values from state for a single source of truth",
            ),
            link(
                "Uncontrolled Inputs",
                "/events-forms/uncontrolled-inputs",
                "Let the DOM own the value and read it through a ref",
            ),
            link(
                "Select And Textarea",
                "/events-forms/select-textarea",
                "Value-driven selects and textareas instead of selected attributes",
            ),
            link(
                "Form Validation",
                "/events-forms/form-validation",
                "Validate on change, blur or submit and surface field errors",
            ),
            header("Lists & Conditionals"),
            link(
                "Conditional Rendering",
                "/lists-conditionals/conditional-rendering",
                "Ternaries, logical AND and early returns in JSX",
            ),
            link(
                "Rendering Lists",
                "/lists-conditionals/rendering-lists",
                "Map data arrays to elements inside JSX",
            ),
            link(
                "List Keys",
                "/lists-conditionals/list-keys",
                "Stable keys let React match items across re-renders",
            ),
            link(
                "Empty States",
                "/lists-conditionals/empty-states",
                "Design for zero items, loading and error branches",
            ),
            header("Context & Data Flow"),
            link(
                "Context API",
                "/context/context-api",
                "createContext and Provider for subtree-wide values",
            ),
            link(
                "Context Pitfalls",
                "/context/context-pitfalls",
                "Provider value identity and avoiding needless re-renders",
            ),
            link(
                "State Colocation",
                "/context/state-colocation",
                "Keep state as close to where it is used as possible",
            ),
            link(
                "Reducer With Context",
                "/context/reducer-with-context",
                "Pair useReducer with context for app-level state",
            ),
            header("Routing"),
            link(
                "Router Setup",
                "/routing/router-setup",
                "Declare a route table and mount the router provider",
            ),
            link(
                "Route Parameters",
                "/routing/route-parameters",
                "Read dynamic URL segments with useParams",
            ),
            link(
                "Nested Routes",
                "/routing/nested-routes",
                "Layout routes and the Outlet placeholder",
            ),
            link(
                "Navigation And Links",
                "/routing/navigation-links",
                "Link, NavLink active styling and programmatic navigate",
            ),
            link(
                "Lazy Routes",
                "/routing/lazy-routes",
                "Code-split route components with lazy and Suspense",
            ),
            link(
                "Scroll Restoration",
                "/routing/scroll-restoration",
                "Reset or restore scroll position on navigation",
            ),
            header("Performance"),
            link(
                "Avoiding Re-renders",
                "/performance/avoiding-re-renders",
                "Why components re-render and how to narrow the blast radius",
            ),
            link(
                "React.memo",
                "/performance/react-memo",
                "Skip re-rendering a component when its props are unchanged",
            ),
            link(
                "Profiling",
                "/performance/profiling",
                "Find slow renders with the React DevTools profiler",
            ),
            link(
                "Code Splitting",
                "/performance/code-splitting",
                "Ship less JavaScript up front with dynamic imports",
            ),
            link(
                "Virtualized Lists",
                "/performance/virtualized-lists",
                "Render only the visible window of very long lists",
            ),
            header("Patterns"),
            link(
                "Error Boundaries",
                "/patterns/error-boundaries",
                "Catch render errors and show a fallback UI",
            ),
            link(
                "Portals",
                "/patterns/portals",
                "Render children into a DOM node outside the parent tree",
            ),
            link(
                "Render Props",
                "/patterns/render-props",
                "Share logic by passing a function that returns JSX",
            ),
            link(
                "Higher-Order Components",
                "/patterns/higher-order-components",
                "Wrap a component to inject behavior, pre-hooks style",
            ),
            link(
                "Compound Components",
                "/patterns/compound-components",
                "Cooperating components that share implicit state",
            ),
            header("Ecosystem"),
            link(
                "State Libraries",
                "/ecosystem/state-libraries",
                "Redux, Zustand and Jotai compared for app state",
            ),
            link(
                "Data Fetching",
                "/ecosystem/data-fetching",
                "Query caches, revalidation and suspense-friendly fetching",
            ),
            link(
                "Testing Components",
                "/ecosystem/testing-components",
                "Testing Library queries and user-event interaction tests",
            ),
            link(
                "TypeScript With React",
                "/ecosystem/typescript",
                "Typing props, hooks and events without fighting inference",
            ),
            link(
                "Build Tooling",
                "/ecosystem/build-tooling",
                "Vite, bundler plugins and environment configuration",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_paths_are_unique() {
        let catalog = Catalog::builtin();
        let mut seen = std::collections::HashSet::new();
        for entry in catalog.entries() {
            if let Some(path) = entry.path() {
                assert!(seen.insert(path.to_string()), "duplicate path {path}");
            }
        }
        assert!(seen.len() > 50);
    }

    #[test]
    fn match_text_is_lowercased_title_plus_blurb() {
        let entry = link("What Is React ???", "/intro/what-is-react", "A Library");
        match entry {
            CatalogEntry::Link { match_text, .. } => {
                assert_eq!(match_text, "what is react ??? a library");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn section_of_uses_nearest_preceding_header() {
        let catalog = Catalog::builtin();
        let idx = catalog.link_position("/hooks-core/useState").unwrap();
        assert_eq!(catalog.section_of(idx), Some("Hooks: Core"));
    }

    #[test]
    fn leading_link_has_no_section() {
        let catalog = Catalog::builtin();
        let idx = catalog.link_position("/").unwrap();
        assert_eq!(idx, 0);
        assert_eq!(catalog.section_of(idx), None);
    }

    #[test]
    fn first_link_path_respects_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.first_link_path(), Some("/"));
    }

    #[test]
    fn link_position_misses_unknown_paths() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.link_position("/no/such/topic"), None);
    }
}
