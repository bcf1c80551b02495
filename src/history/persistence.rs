//! History persistence: load/save with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const HISTORY_FILENAME: &str = "history.json";

/// Platform-specific path of the history file, creating the parent directory
/// if missing
pub fn default_history_path() -> Result<PathBuf> {
    let data_base = dirs::data_dir().context("Failed to get platform data directory")?;
    let app_dir = data_base.join("bangbox");

    if !app_dir.exists() {
        fs::create_dir_all(&app_dir).context("Failed to create data directory")?;
    }

    Ok(app_dir.join(HISTORY_FILENAME))
}

/// Load persisted history entries, most-recent-first.
///
/// A missing file is an empty history, not an error; a corrupted file is
/// reported so the caller can decide to start fresh.
pub fn load_history(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;
    let entries: Vec<String> =
        serde_json::from_str(&json).context("Failed to parse history JSON")?;
    Ok(entries)
}

/// Save history entries atomically (temp file + rename)
pub fn save_history(path: &Path, entries: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries).context("Failed to serialize history")?;

    let temp = path.with_extension("json.tmp");
    fs::write(&temp, json).context("Failed to write history temp file")?;
    fs::rename(&temp, path).context("Failed to rename history temp file")?;

    Ok(())
}

/// Remove the persisted history file; missing file is fine
pub fn clear_history(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove history file: {}", path.display()))?;
    }
    Ok(())
}
