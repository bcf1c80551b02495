//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::path::PathBuf;

use bangbox::Registry;
use bangbox::models::BangDefinition;
use tempfile::TempDir;

/// Builder for bang dataset JSON in the raw short-field shape
pub struct DatasetBuilder {
    records: Vec<String>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Add a record with the given trigger, name and URL template
    pub fn with_bang(mut self, trigger: &str, name: &str, url: &str) -> Self {
        self.records.push(format!(
            r#"{{"c":"Tech","d":"example.com","r":0,"s":"{name}","sc":"Search","t":"{trigger}","u":"{url}"}}"#
        ));
        self
    }

    /// Add a record with explicit category and subcategory
    pub fn with_categorized_bang(
        mut self,
        trigger: &str,
        name: &str,
        url: &str,
        category: &str,
        subcategory: &str,
    ) -> Self {
        self.records.push(format!(
            r#"{{"c":"{category}","d":"example.com","r":0,"s":"{name}","sc":"{subcategory}","t":"{trigger}","u":"{url}"}}"#
        ));
        self
    }

    /// Serialize to a dataset JSON string
    pub fn to_json(&self) -> String {
        format!("[{}]", self.records.join(","))
    }

    /// Parse into a registry, panicking on malformed data
    pub fn build(&self) -> Registry {
        let definitions =
            bangbox::registry::parse_dataset(&self.to_json()).expect("test dataset must parse");
        Registry::new(definitions)
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A small realistic registry covering the common lookup/filter cases
pub fn sample_registry() -> Registry {
    DatasetBuilder::new()
        .with_categorized_bang(
            "g",
            "Google",
            "https://www.google.com/search?q={{{s}}}",
            "Tech",
            "Search",
        )
        .with_categorized_bang(
            "w",
            "Wikipedia",
            "https://en.wikipedia.org/wiki/Special:Search?search={{{s}}}",
            "Reference",
            "Encyclopedia",
        )
        .with_categorized_bang(
            "yt",
            "YouTube",
            "https://www.youtube.com/results?search_query={{{s}}}",
            "Entertainment",
            "Video",
        )
        .build()
}

/// Simple definition for unit-style assertions
pub fn definition(trigger: &str, url: &str) -> BangDefinition {
    BangDefinition {
        trigger: trigger.to_string(),
        name: trigger.to_uppercase(),
        url_template: url.to_string(),
        category: "Tech".to_string(),
        subcategory: "Search".to_string(),
        domain: "example.com".to_string(),
    }
}

/// Temp directory plus a history file path inside it
pub fn temp_history() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("history.json");
    (dir, path)
}
