//! Navigation dispatch: opening destination URLs.
//!
//! The redirect decision selects between two primitives: a resolved bang is
//! a side trip opened in a NEW context (the launcher stays resident), while
//! a default-search fallback REPLACES the current context (the user is
//! leaving the tool). The [`Navigator`] trait captures the two primitives so
//! tests can inject a recording fake.

use std::process::Command;

use anyhow::{Context, Result, bail};

/// Navigation primitives selected by the redirect decision
pub trait Navigator {
    /// Open a provider result alongside the launcher
    fn open_new_context(&mut self, url: &str) -> Result<()>;

    /// Leave the launcher for the default search destination
    fn replace_current_context(&mut self, url: &str) -> Result<()>;
}

/// Launches the platform browser opener for both primitives.
///
/// A terminal has no tab model, so both primitives open the system browser;
/// the "leaving the tool" half of the asymmetry is realized by the caller
/// ending the interactive session after `replace_current_context`.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_new_context(&mut self, url: &str) -> Result<()> {
        launch_browser(url)
    }

    fn replace_current_context(&mut self, url: &str) -> Result<()> {
        launch_browser(url)
    }
}

fn launch_browser(url: &str) -> Result<()> {
    if url.is_empty() {
        bail!("Cannot open an empty URL");
    }

    let mut command = opener_command(url);
    command.spawn().with_context(|| format!("Failed to launch browser for {url}"))?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Records dispatched URLs instead of opening a browser. Used by tests and
/// by the `resolve` subcommand's dry-run mode.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub opened: Vec<String>,
    pub replaced: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for RecordingNavigator {
    fn open_new_context(&mut self, url: &str) -> Result<()> {
        self.opened.push(url.to_string());
        Ok(())
    }

    fn replace_current_context(&mut self, url: &str) -> Result<()> {
        self.replaced.push(url.to_string());
        Ok(())
    }
}
