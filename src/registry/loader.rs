use anyhow::{Context, Result, bail};
use log::warn;

use super::Registry;
use crate::models::{BangDefinition, RawBang};

/// Embedded bang dataset, compiled into the binary
const EMBEDDED_DATASET: &str = include_str!("../../assets/bangs.json");

/// Parse a dataset string into definitions, mapping the short-field records
/// to the descriptive shape at this boundary.
///
/// Returns an error for malformed JSON or an empty dataset; callers decide
/// whether to fall back.
pub fn parse_dataset(json: &str) -> Result<Vec<BangDefinition>> {
    let raw: Vec<RawBang> = serde_json::from_str(json).context("Failed to parse bang dataset")?;
    if raw.is_empty() {
        bail!("Bang dataset is empty");
    }
    Ok(raw.into_iter().map(BangDefinition::from).collect())
}

/// Load the embedded dataset, substituting the built-in fallback set if it
/// turns out malformed or empty. Never fails: basic operation must continue
/// with well-known definitions even on bad data.
pub fn load_embedded() -> Registry {
    match parse_dataset(EMBEDDED_DATASET) {
        Ok(definitions) => Registry::new(definitions),
        Err(e) => {
            warn!("Falling back to built-in bang definitions: {e:#}");
            Registry::new(default_definitions())
        }
    }
}

/// Minimal built-in definition set used when the dataset cannot be loaded
pub fn default_definitions() -> Vec<BangDefinition> {
    fn def(
        trigger: &str,
        name: &str,
        url_template: &str,
        category: &str,
        subcategory: &str,
        domain: &str,
    ) -> BangDefinition {
        BangDefinition {
            trigger: trigger.to_string(),
            name: name.to_string(),
            url_template: url_template.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            domain: domain.to_string(),
        }
    }

    vec![
        def(
            "g",
            "Google",
            "https://www.google.com/search?q={{{s}}}",
            "Tech",
            "Search",
            "www.google.com",
        ),
        def(
            "w",
            "Wikipedia",
            "https://en.wikipedia.org/wiki/Special:Search?search={{{s}}}",
            "Reference",
            "Encyclopedia",
            "en.wikipedia.org",
        ),
        def(
            "yt",
            "YouTube",
            "https://www.youtube.com/results?search_query={{{s}}}",
            "Entertainment",
            "Video",
            "www.youtube.com",
        ),
        def("gh", "GitHub", "https://github.com/search?q={{{s}}}", "Tech", "Code", "github.com"),
        def(
            "so",
            "Stack Overflow",
            "https://stackoverflow.com/search?q={{{s}}}",
            "Tech",
            "Programming",
            "stackoverflow.com",
        ),
    ]
}
