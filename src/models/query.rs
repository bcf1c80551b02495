/// Result of splitting a raw input string into trigger and remainder.
///
/// Ephemeral: recomputed from each raw input string and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Trigger identifier without the leading `!`, if the input started with one
    pub trigger: Option<String>,
    /// Everything after the trigger and its trailing whitespace run; the full
    /// raw input when no trigger is present
    pub remainder: String,
}

impl ParsedQuery {
    /// Whether a trigger was recognized at the start of the input
    pub fn has_trigger(&self) -> bool {
        self.trigger.is_some()
    }
}
