use crate::models::BangDefinition;
use crate::registry::Registry;

/// Display cap for the primary chip list (matches whether or not the user has
/// typed the `!` marker yet)
pub const CHIP_LIST_LIMIT: usize = 12;

/// Display cap for the narrower "just typed a bang" list
pub const BANG_LIST_LIMIT: usize = 10;

/// Rank registry entries for the primary chip list.
///
/// Strips one leading `!` if present so the same matching works whether or
/// not the trigger marker has been typed, then substring-filters the registry
/// in order. Empty or whitespace-only input yields no suggestions.
pub fn suggest_for_query<'a>(registry: &'a Registry, raw: &str) -> Vec<&'a BangDefinition> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    let clean = raw.strip_prefix('!').unwrap_or(raw);
    registry.filter(clean, CHIP_LIST_LIMIT)
}

/// Rank registry entries for the bang dropdown, shown only once the user has
/// typed the `!` marker.
///
/// With no text after the marker the top registry entries are returned, so a
/// bare `!` immediately shows what is available.
pub fn suggest_for_bang<'a>(registry: &'a Registry, raw: &str) -> Vec<&'a BangDefinition> {
    let Some(term) = raw.strip_prefix('!') else {
        return Vec::new();
    };
    registry.filter(term, BANG_LIST_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_definitions;

    fn registry() -> Registry {
        Registry::new(default_definitions())
    }

    #[test]
    fn test_empty_query_yields_no_suggestions() {
        assert!(suggest_for_query(&registry(), "").is_empty());
        assert!(suggest_for_query(&registry(), "   ").is_empty());
    }

    #[test]
    fn test_suggests_with_and_without_marker() {
        let registry = registry();
        let with_marker: Vec<_> =
            suggest_for_query(&registry, "!git").iter().map(|d| d.trigger.clone()).collect();
        let without: Vec<_> =
            suggest_for_query(&registry, "git").iter().map(|d| d.trigger.clone()).collect();
        assert_eq!(with_marker, without);
        assert!(with_marker.contains(&"gh".to_string()));
    }

    #[test]
    fn test_suggestions_follow_registry_order() {
        let registry = registry();
        let triggers: Vec<_> =
            suggest_for_query(&registry, "tech").iter().map(|d| d.trigger.clone()).collect();
        assert_eq!(triggers, ["g", "gh", "so"]);
    }

    #[test]
    fn test_bang_list_requires_marker() {
        assert!(suggest_for_bang(&registry(), "google").is_empty());
    }

    #[test]
    fn test_bare_marker_shows_top_entries() {
        let registry = registry();
        let suggestions = suggest_for_bang(&registry, "!");
        assert_eq!(suggestions.len(), registry.len().min(BANG_LIST_LIMIT));
        assert_eq!(suggestions[0].trigger, "g");
    }

    #[test]
    fn test_chip_list_limit_enforced() {
        // Registry larger than the cap
        let mut definitions = Vec::new();
        for i in 0..30 {
            let mut def = default_definitions()[0].clone();
            def.trigger = format!("common{i}");
            def.name = "Common Provider".to_string();
            definitions.push(def);
        }
        let registry = Registry::new(definitions);
        assert_eq!(suggest_for_query(&registry, "common").len(), CHIP_LIST_LIMIT);
        assert_eq!(suggest_for_bang(&registry, "!common").len(), BANG_LIST_LIMIT);
    }
}
