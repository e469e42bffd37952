//! Opaque topic records behind the catalog links.
//!
//! The notes content itself is out of scope here; each link resolves to a
//! record of what the nav knows about it: title, route path and the short
//! blurb shown in the content pane.

use crate::catalog::{Catalog, CatalogEntry};

/// Borrowed view of one topic, resolved from a catalog link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic<'a> {
    pub title: &'a str,
    pub path: &'a str,
    pub blurb: &'a str,
    /// Owning section title; `None` for the unowned leading group.
    pub section: Option<&'a str>,
}

/// Resolve a route path to its topic record.
pub fn find<'a>(catalog: &'a Catalog, path: &str) -> Option<Topic<'a>> {
    let index = catalog.link_position(path)?;
    match &catalog.entries()[index] {
        CatalogEntry::Link {
            title, path, blurb, ..
        } => Some(Topic {
            title,
            path,
            blurb,
            section: catalog.section_of(index),
        }),
        CatalogEntry::Header { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_resolves_title_blurb_and_section() {
        let catalog = Catalog::builtin();
        let topic = find(&catalog, "/hooks-core/useState").unwrap();
        assert_eq!(topic.title, "useState");
        assert_eq!(topic.section, Some("Hooks: Core"));
        assert!(!topic.blurb.is_empty());
    }

    #[test]
    fn find_misses_unknown_paths() {
        let catalog = Catalog::builtin();
        assert!(find(&catalog, "/unknown").is_none());
    }
}
