//! Notedex CLI
//!
//! Command-line interface for the Notedex topic browser.
//! Runs the interactive TUI by default; also provides one-shot catalog
//! listing and filtering for scripting.

use clap::{Parser, Subcommand};
use console::style;
use notedex::{
    filter, topics, AppConfig, Catalog, CatalogEntry, FileStore, MemoryStore, NotedexError,
    QueryStore,
};
use serde::Serialize;

/// Notedex - terminal notes reference browser
#[derive(Parser)]
#[command(name = "notedex")]
#[command(author = "Notedex Contributors")]
#[command(version)]
#[command(about = "Terminal reference browser for framework notes", long_about = None)]
struct Cli {
    /// Write a debug log next to the executable
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog interactively (default)
    Browse {
        /// Do not restore or persist the search query
        #[arg(long)]
        no_persist: bool,

        /// Jump instead of animating when centering the active topic
        #[arg(long)]
        no_smooth_scroll: bool,

        /// Sidebar width in columns
        #[arg(long, default_value = "34")]
        sidebar_width: u16,
    },

    /// Print the topic catalog
    List {
        /// Only print section headers
        #[arg(long)]
        sections: bool,
    },

    /// Filter the catalog and print matching topics
    Search {
        /// Query; every whitespace-separated token must match
        /// (use -- before a query that starts with -)
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Maximum results
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// Print one topic record by route path
    Show {
        /// Route path, e.g. /hooks-core/useState
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.log {
        notedex::logging::init();
        notedex::logging::info("MAIN", "notedex starting up");
    }

    let result = match cli.command {
        None => cmd_browse(false, false, AppConfig::default().sidebar_width),

        Some(Commands::Browse {
            no_persist,
            no_smooth_scroll,
            sidebar_width,
        }) => cmd_browse(no_persist, no_smooth_scroll, sidebar_width),

        Some(Commands::List { sections }) => cmd_list(sections),

        Some(Commands::Search { query, output, max }) => cmd_search(&query, &output, max),

        Some(Commands::Show { path }) => cmd_show(&path),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Run the interactive browser
fn cmd_browse(no_persist: bool, no_smooth_scroll: bool, sidebar_width: u16) -> notedex::Result<()> {
    let config = AppConfig {
        smooth_scroll: !no_smooth_scroll,
        remember_query: !no_persist,
        sidebar_width,
    };

    let store: Box<dyn QueryStore> = if no_persist {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::session_default())
    };

    notedex::tui::run(Catalog::builtin(), config, store)
}

/// Print the catalog as an indented tree
fn cmd_list(sections_only: bool) -> notedex::Result<()> {
    let catalog = Catalog::builtin();

    for entry in catalog.entries() {
        match entry {
            CatalogEntry::Header { title } => {
                println!("\n{}", style(title).cyan().bold());
            }
            CatalogEntry::Link { title, path, .. } => {
                if !sections_only {
                    println!("  {} {}", style(format!("{title:<28}")).white(), style(path).dim());
                }
            }
        }
    }

    let sections = catalog.entries().iter().filter(|e| !e.is_link()).count();
    let topic_count = catalog.entries().iter().filter(|e| e.is_link()).count();
    println!("\n{} sections, {} topics", sections, topic_count);
    Ok(())
}

#[derive(Serialize)]
struct SearchHit<'a> {
    title: &'a str,
    path: &'a str,
    section: Option<&'a str>,
}

/// One-shot filter over the catalog
fn cmd_search(query: &str, output: &str, max: Option<usize>) -> notedex::Result<()> {
    let catalog = Catalog::builtin();
    let outcome = filter::apply(&catalog, query);

    let mut hits = Vec::new();
    for (i, entry) in catalog.entries().iter().enumerate() {
        if entry.is_link() && outcome.is_visible(i) {
            hits.push(SearchHit {
                title: entry.title(),
                path: entry.path().unwrap_or_default(),
                section: catalog.section_of(i),
            });
        }
    }

    let shown = max.unwrap_or(hits.len()).min(hits.len());

    match output {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&hits[..shown])?);
        }
        "text" => {
            for hit in &hits[..shown] {
                println!(
                    "{} {} {}",
                    style(format!("{:<24}", hit.title)).white().bold(),
                    style(format!("{:<20}", hit.section.unwrap_or("-"))).cyan(),
                    style(hit.path).dim()
                );
            }
            println!(
                "\n{} of {} matching topics shown",
                shown,
                outcome.visible_links()
            );
        }
        other => return Err(NotedexError::InvalidOutputFormat(other.to_string())),
    }

    Ok(())
}

/// Print one topic record
fn cmd_show(path: &str) -> notedex::Result<()> {
    let catalog = Catalog::builtin();
    let topic = topics::find(&catalog, path)
        .ok_or_else(|| NotedexError::UnknownTopic(path.to_string()))?;

    println!("{}", style(topic.title).white().bold());
    if let Some(section) = topic.section {
        println!("{} {}", style("Section:").dim(), section);
    }
    println!("{} {}", style("Path:").dim(), topic.path);
    println!("\n{}", topic.blurb);
    Ok(())
}
