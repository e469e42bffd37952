//! Notedex - terminal reference browser for a framework notes catalog
//!
//! Presents a static topic catalog (section headers plus topic links) in a
//! sidebar with live, incremental filtering, and keeps the active topic in
//! view as you navigate.
//!
//! # Features
//!
//! - **Instant Filtering**: every keystroke re-filters the whole catalog;
//!   all whitespace-separated tokens must match (case-insensitive substrings)
//! - **Section Folding**: a section header disappears when none of its
//!   topics survive the filter
//! - **Query Persistence**: the last query is restored on the next run,
//!   best-effort
//! - **Keyboard Driven**: Ctrl+K focuses search, Escape clears it, Enter
//!   opens the first match
//! - **Scroll Sync**: the active topic is centered in the sidebar after
//!   each navigation
//!
//! # Example
//!
//! ```
//! use notedex::{filter, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let outcome = filter::apply(&catalog, "use state");
//!
//! for (i, entry) in catalog.entries().iter().enumerate() {
//!     if entry.is_link() && outcome.is_visible(i) {
//!         println!("{}: {}", entry.title(), entry.path().unwrap());
//!     }
//! }
//! println!("{} topics match", outcome.visible_links());
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod logging;
pub mod router;
pub mod session;
pub mod topics;
pub mod tui;

// Re-export main types
pub use catalog::{Catalog, CatalogEntry};
pub use error::{NotedexError, Result};
pub use filter::FilterOutcome;
pub use router::{RouteState, Router};
pub use session::{FileStore, MemoryStore, QueryStore};
pub use topics::Topic;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Animate sidebar scrolling instead of jumping
    pub smooth_scroll: bool,
    /// Persist the search query across runs
    pub remember_query: bool,
    /// Sidebar width in terminal columns
    pub sidebar_width: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            smooth_scroll: true,
            remember_query: true,
            sidebar_width: 34,
        }
    }
}
