//! Filter engine: pure visibility computation over the catalog.
//!
//! Given a raw query string, decide which catalog entries are shown. A link
//! is visible when every whitespace-delimited token of the query appears as
//! a literal, case-insensitive substring of its match text (AND semantics,
//! tokens may match inside words). A header is visible when at least one
//! link of its owned run is visible. The whole computation is synchronous,
//! deterministic and total; it runs inline on every keystroke.

use crate::catalog::{Catalog, CatalogEntry};

/// Split a raw query into lowercased match tokens. A whitespace-only query
/// yields no tokens, which means "match everything".
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

fn link_matches(match_text: &str, tokens: &[String]) -> bool {
    tokens.iter().all(|t| match_text.contains(t.as_str()))
}

/// Per-entry visibility flags plus the visible-link count, parallel to the
/// catalog's entry order. Derived state: recomputed on every query change,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    visible: Vec<bool>,
    visible_links: usize,
}

impl FilterOutcome {
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Number of visible links (headers do not count).
    pub fn visible_links(&self) -> usize {
        self.visible_links
    }

    /// Catalog indices of all visible entries, in catalog order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| if v { Some(i) } else { None })
            .collect()
    }

    /// Catalog index of the first visible link, in catalog order.
    pub fn first_visible_link(&self, catalog: &Catalog) -> Option<usize> {
        catalog
            .entries()
            .iter()
            .enumerate()
            .find(|(i, e)| e.is_link() && self.is_visible(*i))
            .map(|(i, _)| i)
    }
}

/// Compute visibility for every entry under `query`.
///
/// Links are matched first; headers are then derived in a single reverse
/// sweep, each one picking up whether any link between it and the next
/// header matched. A header owning zero links is always hidden, even under
/// the empty query.
pub fn apply(catalog: &Catalog, query: &str) -> FilterOutcome {
    let tokens = tokenize(query);
    let entries = catalog.entries();

    let mut visible = vec![false; entries.len()];
    let mut visible_links = 0;

    for (i, entry) in entries.iter().enumerate() {
        if let CatalogEntry::Link { match_text, .. } = entry {
            if link_matches(match_text, &tokens) {
                visible[i] = true;
                visible_links += 1;
            }
        }
    }

    let mut run_has_visible = false;
    for i in (0..entries.len()).rev() {
        match entries[i] {
            CatalogEntry::Header { .. } => {
                visible[i] = run_has_visible;
                run_has_visible = false;
            }
            CatalogEntry::Link { .. } => {
                run_has_visible = run_has_visible || visible[i];
            }
        }
    }

    FilterOutcome {
        visible,
        visible_links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogEntry};

    fn header(title: &str) -> CatalogEntry {
        CatalogEntry::Header {
            title: title.to_string(),
        }
    }

    fn link(title: &str, path: &str) -> CatalogEntry {
        CatalogEntry::Link {
            title: title.to_string(),
            path: path.to_string(),
            blurb: String::new(),
            match_text: title.to_lowercase(),
        }
    }

    /// The worked example catalog from the reference notes site.
    fn sample() -> Catalog {
        Catalog::new(vec![
            header("Intro"),
            link("What Is React ???", "/intro/what-is-react"),
            link("Project Setup", "/intro/project-setup"),
            header("Hooks"),
            link("useState", "/hooks-core/useState"),
        ])
    }

    fn visible_paths(catalog: &Catalog, query: &str) -> Vec<String> {
        let outcome = apply(catalog, query);
        catalog
            .entries()
            .iter()
            .enumerate()
            .filter(|(i, e)| e.is_link() && outcome.is_visible(*i))
            .map(|(_, e)| e.path().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn empty_query_shows_everything() {
        let catalog = sample();
        let outcome = apply(&catalog, "");
        for (i, _) in catalog.entries().iter().enumerate() {
            assert!(outcome.is_visible(i));
        }
        assert_eq!(outcome.visible_links(), 3);
    }

    #[test]
    fn whitespace_only_query_is_empty() {
        let catalog = sample();
        assert_eq!(apply(&catalog, "   \t  "), apply(&catalog, ""));
    }

    #[test]
    fn same_input_same_output() {
        let catalog = sample();
        assert_eq!(apply(&catalog, "react"), apply(&catalog, "react"));
        assert_eq!(apply(&catalog, "set up"), apply(&catalog, "set up"));
    }

    #[test]
    fn single_token_filters_links_and_headers() {
        let catalog = sample();
        let outcome = apply(&catalog, "react");
        assert_eq!(
            visible_paths(&catalog, "react"),
            vec!["/intro/what-is-react"]
        );
        assert_eq!(outcome.visible_links(), 1);
        // "Intro" stays, "Hooks" loses its whole run and disappears.
        assert!(outcome.is_visible(0));
        assert!(!outcome.is_visible(3));
    }

    #[test]
    fn tokens_combine_with_and_semantics() {
        let catalog = sample();
        let both = apply(&catalog, "project setup");
        let t1 = apply(&catalog, "project");
        let t2 = apply(&catalog, "setup");
        for (i, _) in catalog.entries().iter().enumerate() {
            if catalog.entries()[i].is_link() {
                assert_eq!(
                    both.is_visible(i),
                    t1.is_visible(i) && t2.is_visible(i),
                    "entry {i} breaks intersection semantics"
                );
            }
        }
    }

    #[test]
    fn tokens_match_inside_words() {
        // "set" and "up" both land inside the single word "setup";
        // lowercased "usestate" contains neither token.
        let catalog = sample();
        assert_eq!(visible_paths(&catalog, "set up"), vec!["/intro/project-setup"]);
    }

    #[test]
    fn token_order_is_irrelevant() {
        let catalog = sample();
        assert_eq!(
            visible_paths(&catalog, "up set"),
            visible_paths(&catalog, "set up")
        );
    }

    #[test]
    fn queries_differing_only_in_case_or_padding_agree() {
        let catalog = sample();
        let a = apply(&catalog, "Hooks");
        let b = apply(&catalog, "hooks");
        let c = apply(&catalog, "  hooks  ");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn duplicate_tokens_are_harmless() {
        let catalog = sample();
        assert_eq!(apply(&catalog, "react react"), apply(&catalog, "react"));
    }

    #[test]
    fn no_match_hides_all_links_and_headers() {
        let catalog = sample();
        let outcome = apply(&catalog, "zzz");
        assert_eq!(outcome.visible_links(), 0);
        for (i, _) in catalog.entries().iter().enumerate() {
            assert!(!outcome.is_visible(i));
        }
    }

    #[test]
    fn header_owning_zero_links_is_hidden_even_unfiltered() {
        let catalog = Catalog::new(vec![
            header("Empty Section"),
            header("Real Section"),
            link("Topic", "/topic"),
        ]);
        let outcome = apply(&catalog, "");
        assert!(!outcome.is_visible(0));
        assert!(outcome.is_visible(1));
        assert!(outcome.is_visible(2));
    }

    #[test]
    fn trailing_header_with_no_links_is_hidden() {
        let catalog = Catalog::new(vec![link("Topic", "/topic"), header("Dangling")]);
        let outcome = apply(&catalog, "");
        assert!(outcome.is_visible(0));
        assert!(!outcome.is_visible(1));
    }

    #[test]
    fn unowned_leading_links_filter_independently() {
        let catalog = Catalog::new(vec![
            link("Home", "/"),
            header("Section"),
            link("Topic", "/topic"),
        ]);
        let outcome = apply(&catalog, "home");
        assert!(outcome.is_visible(0));
        assert!(!outcome.is_visible(1));
        assert!(!outcome.is_visible(2));
        assert_eq!(outcome.visible_links(), 1);
    }

    #[test]
    fn empty_match_text_never_panics() {
        let catalog = Catalog::new(vec![CatalogEntry::Link {
            title: String::new(),
            path: "/blank".to_string(),
            blurb: String::new(),
            match_text: String::new(),
        }]);
        // Fails every non-empty token, matches the empty query.
        assert_eq!(apply(&catalog, "x").visible_links(), 0);
        assert_eq!(apply(&catalog, "").visible_links(), 1);
    }

    #[test]
    fn first_visible_link_follows_catalog_order() {
        let catalog = sample();
        let outcome = apply(&catalog, "use");
        assert_eq!(
            outcome.first_visible_link(&catalog),
            catalog.link_position("/hooks-core/useState")
        );
        assert_eq!(apply(&catalog, "zzz").first_visible_link(&catalog), None);
    }

    #[test]
    fn visible_indices_preserve_order() {
        let catalog = sample();
        let outcome = apply(&catalog, "");
        // Everything visible: indices are simply 0..len.
        assert_eq!(
            outcome.visible_indices(),
            (0..catalog.len()).collect::<Vec<_>>()
        );
    }
}
