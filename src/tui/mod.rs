// TUI module for the interactive search box
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;

use crate::dispatch::BrowserNavigator;
use crate::engine::SearchEngine;
use crate::suggest::SuggestionFetcher;
use terminal::TerminalManager;

/// Run the interactive search session
pub fn run_interactive(engine: SearchEngine) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(engine, SuggestionFetcher::new());
    let mut navigator = BrowserNavigator;
    let res = app.run(manager.terminal_mut(), &mut navigator);

    manager.restore()?;
    res
}
