use serde::{Deserialize, Serialize};

/// Raw dataset record as it appears in the embedded bang dataset.
///
/// Field names follow the dataset's compact convention. The optional rank
/// field (`r`) present in the dataset is ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBang {
    /// Trigger shorthand, e.g. `g`
    pub t: String,
    /// Site/provider name, e.g. `Google`
    pub s: String,
    /// URL template containing the `{{{s}}}` placeholder
    pub u: String,
    /// Category
    #[serde(default)]
    pub c: String,
    /// Subcategory
    #[serde(default)]
    pub sc: String,
    /// Domain (display only)
    #[serde(default)]
    pub d: String,
}

/// A shorthand search provider definition.
///
/// Immutable after load. `trigger` is matched case-insensitively; `category`,
/// `subcategory` and `domain` are used only for suggestion filtering and
/// display, never for resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BangDefinition {
    pub trigger: String,
    pub name: String,
    pub url_template: String,
    pub category: String,
    pub subcategory: String,
    pub domain: String,
}

impl From<RawBang> for BangDefinition {
    fn from(raw: RawBang) -> Self {
        Self {
            trigger: raw.t,
            name: raw.s,
            url_template: raw.u,
            category: raw.c,
            subcategory: raw.sc,
            domain: raw.d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_bang_maps_to_definition() {
        let raw: RawBang = serde_json::from_str(
            r#"{"c":"Tech","d":"www.google.com","r":0,"s":"Google","sc":"Search","t":"g","u":"https://www.google.com/search?q={{{s}}}"}"#,
        )
        .unwrap();

        let def = BangDefinition::from(raw);
        assert_eq!(def.trigger, "g");
        assert_eq!(def.name, "Google");
        assert_eq!(def.url_template, "https://www.google.com/search?q={{{s}}}");
        assert_eq!(def.category, "Tech");
        assert_eq!(def.subcategory, "Search");
        assert_eq!(def.domain, "www.google.com");
    }

    #[test]
    fn test_raw_bang_missing_optional_fields() {
        let raw: RawBang =
            serde_json::from_str(r#"{"t":"x","s":"Example","u":"https://example.com/{{{s}}}"}"#)
                .unwrap();

        let def = BangDefinition::from(raw);
        assert_eq!(def.category, "");
        assert_eq!(def.domain, "");
    }
}
