use anyhow::Result;
use clap::{Parser, Subcommand};
use log::warn;

use crate::dispatch::BrowserNavigator;
use crate::engine::{Dispatch, SearchEngine};
use crate::history::default_history_path;
use crate::registry::load_embedded;
use crate::tui;

/// Display cap for the expanded `list --all` view
const SHOW_ALL_CAP: usize = 50;

#[derive(Parser)]
#[command(name = "bangbox")]
#[command(version = "0.1.0")]
#[command(about = "Bang-powered web search from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a query to its destination URL
    Resolve {
        /// The query, e.g. `!g rust lifetimes`
        query: Vec<String>,
        /// Open the destination in the browser instead of printing it
        #[arg(long)]
        open: bool,
    },
    /// List known bangs
    List {
        /// Substring filter across trigger, name, category and subcategory
        filter: Option<String>,
        /// Show the full registry instead of the popular set
        #[arg(long)]
        all: bool,
    },
    /// Show recent searches
    History {
        /// Clear the history instead of showing it
        #[arg(long)]
        clear: bool,
    },
    /// Show statistics about the bang registry
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let engine = build_engine();

    match cli.command {
        Some(Commands::Resolve { query, open }) => resolve(engine, &query.join(" "), open),
        Some(Commands::List { filter, all }) => {
            list(&engine, filter.as_deref(), all);
            Ok(())
        }
        Some(Commands::History { clear }) => history(engine, clear),
        Some(Commands::Stats) => {
            stats(&engine);
            Ok(())
        }
        None => tui::run_interactive(engine),
    }
}

fn build_engine() -> SearchEngine {
    let registry = load_embedded();
    match default_history_path() {
        Ok(path) => SearchEngine::with_history_file(registry, path),
        Err(e) => {
            warn!("History will not be persisted: {e:#}");
            SearchEngine::new(registry)
        }
    }
}

fn resolve(mut engine: SearchEngine, raw: &str, open: bool) -> Result<()> {
    if open {
        let mut navigator = BrowserNavigator;
        match engine.submit(raw, &mut navigator)? {
            Dispatch::None => println!("Nothing to open for an empty query"),
            Dispatch::Provider { name, url } => println!("Opened {name}: {url}"),
            Dispatch::DefaultSearch { url } => println!("Opened default search: {url}"),
        }
        return Ok(());
    }

    match engine.decide(raw) {
        Dispatch::None => println!("Empty query"),
        Dispatch::Provider { name, url } => {
            println!("{url}");
            eprintln!("(via {name}, new context)");
        }
        Dispatch::DefaultSearch { url } => {
            println!("{url}");
            eprintln!("(default search, current context)");
        }
    }
    Ok(())
}

fn list(engine: &SearchEngine, filter: Option<&str>, all: bool) {
    let registry = engine.registry();
    let definitions: Vec<_> = match (filter, all) {
        (Some(term), _) => registry.filter(term, SHOW_ALL_CAP),
        (None, true) => registry.all().iter().take(SHOW_ALL_CAP).collect(),
        (None, false) => registry.popular(),
    };

    if definitions.is_empty() {
        println!("No matching bangs");
        return;
    }

    for def in definitions {
        println!("!{:<12} {:<20} {} / {}", def.trigger, def.name, def.category, def.subcategory);
    }
}

fn history(mut engine: SearchEngine, clear: bool) -> Result<()> {
    if clear {
        engine.clear_history();
        println!("History cleared");
        return Ok(());
    }

    if engine.history().is_empty() {
        println!("No recent searches");
        return Ok(());
    }

    for entry in engine.history().entries() {
        println!("{entry}");
    }
    Ok(())
}

fn stats(engine: &SearchEngine) {
    let registry = engine.registry();

    let mut categories: Vec<&str> =
        registry.all().iter().map(|def| def.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();

    println!("Bang registry statistics");
    println!("========================");
    println!("Total bangs: {}", registry.len());
    println!("Categories: {}", categories.len());
    println!("Popular set: {}", registry.popular().len());
    println!("Recent searches: {}", engine.history().len());
}
