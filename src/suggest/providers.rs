use anyhow::{Context, Result, bail};
use log::debug;
use serde_json::Value;

use crate::query::encode_search_term;

/// Maximum number of suggestions surfaced to the UI
const MAX_SUGGESTIONS: usize = 8;

/// Number of synthesized suggestions when every provider fails
const MAX_SYNTHETIC: usize = 5;

/// A source of free-text query completions.
///
/// Providers share a uniform query-in, suggestions-or-failure-out contract so
/// they can be chained: the fetcher tries each in order and stops at the
/// first success.
pub trait SuggestionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn fetch(&self, query: &str) -> Result<Vec<String>>;
}

/// DuckDuckGo autocomplete. Response shape: `[query, [suggestion, ...]]`.
pub struct DuckDuckGo;

impl SuggestionProvider for DuckDuckGo {
    fn name(&self) -> &'static str {
        "duckduckgo"
    }

    fn fetch(&self, query: &str) -> Result<Vec<String>> {
        let url =
            format!("https://duckduckgo.com/ac/?q={}&type=list", encode_search_term(query));
        let body: Value = ureq::get(&url)
            .set("Accept", "application/json")
            .call()
            .context("DuckDuckGo autocomplete request failed")?
            .into_json()
            .context("DuckDuckGo autocomplete returned invalid JSON")?;
        parse_opensearch_body(&body)
    }
}

/// Wikipedia OpenSearch. Same `[query, [title, ...], ...]` response shape.
pub struct Wikipedia;

impl SuggestionProvider for Wikipedia {
    fn name(&self) -> &'static str {
        "wikipedia"
    }

    fn fetch(&self, query: &str) -> Result<Vec<String>> {
        let url = format!(
            "https://en.wikipedia.org/w/api.php?action=opensearch&search={}&limit=6&format=json",
            encode_search_term(query)
        );
        let body: Value = ureq::get(&url)
            .call()
            .context("Wikipedia opensearch request failed")?
            .into_json()
            .context("Wikipedia opensearch returned invalid JSON")?;
        parse_opensearch_body(&body)
    }
}

/// Extract the suggestion list from an OpenSearch-style `[query, [..]]` body
fn parse_opensearch_body(body: &Value) -> Result<Vec<String>> {
    let Some(list) = body.get(1).and_then(Value::as_array) else {
        bail!("Unexpected suggestion response shape");
    };
    Ok(list.iter().filter_map(Value::as_str).map(str::to_string).collect())
}

/// Contextual suggestions generated locally when no provider responds
pub fn synthesize_suggestions(query: &str) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let patterns = [
        format!("{query} tutorial"),
        format!("{query} guide"),
        format!("{query} examples"),
        format!("{query} documentation"),
        format!("how to {query}"),
        format!("what is {query}"),
        format!("{query} alternatives"),
    ];
    patterns.into_iter().take(MAX_SYNTHETIC).collect()
}

/// Ordered chain of suggestion providers with a synthetic last resort.
pub struct SuggestionFetcher {
    providers: Vec<Box<dyn SuggestionProvider>>,
}

impl SuggestionFetcher {
    /// Default chain: DuckDuckGo, then Wikipedia, then synthesis
    pub fn new() -> Self {
        Self { providers: vec![Box::new(DuckDuckGo), Box::new(Wikipedia)] }
    }

    pub fn with_providers(providers: Vec<Box<dyn SuggestionProvider>>) -> Self {
        Self { providers }
    }

    /// Fetch completions for a query, trying providers in order and stopping
    /// at the first that yields a non-empty list; synthesizes suggestions
    /// when all of them fail. Never returns an error to the caller.
    ///
    /// The query itself is filtered out case-insensitively and the result is
    /// capped at eight entries.
    pub fn fetch(&self, query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        for provider in &self.providers {
            match provider.fetch(query) {
                Ok(suggestions) if !suggestions.is_empty() => {
                    return postprocess(suggestions, query);
                }
                Ok(_) => debug!("Suggestion provider {} returned nothing", provider.name()),
                Err(e) => debug!("Suggestion provider {} failed: {e:#}", provider.name()),
            }
        }

        postprocess(synthesize_suggestions(query), query)
    }
}

impl Default for SuggestionFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop echoes of the query itself, de-duplicate, and cap the list
fn postprocess(suggestions: Vec<String>, query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut seen = Vec::new();
    for suggestion in suggestions {
        if suggestion.to_lowercase() == query_lower {
            continue;
        }
        if seen.contains(&suggestion) {
            continue;
        }
        seen.push(suggestion);
        if seen.len() == MAX_SUGGESTIONS {
            break;
        }
    }
    seen
}
