use crate::models::ParsedQuery;

/// Split a raw input string into an optional leading trigger and remainder.
///
/// Grammar: `^!(\w+)\s*(.*)$` with ASCII word characters. A trigger is one or
/// more word characters immediately after a leading `!`; the whitespace run
/// after the trigger is consumed; the remainder is the rest of the string
/// verbatim (trailing whitespace preserved).
///
/// A bare `!` with no following word character is not a trigger, and bangs
/// appearing mid-string are never triggers.
///
/// # Examples
///
/// ```
/// use bangbox::parse_query;
///
/// let parsed = parse_query("!g rust lifetimes");
/// assert_eq!(parsed.trigger.as_deref(), Some("g"));
/// assert_eq!(parsed.remainder, "rust lifetimes");
///
/// let plain = parse_query("rust lifetimes");
/// assert_eq!(plain.trigger, None);
/// assert_eq!(plain.remainder, "rust lifetimes");
/// ```
pub fn parse_query(raw: &str) -> ParsedQuery {
    let Some(after_bang) = raw.strip_prefix('!') else {
        return no_trigger(raw);
    };

    let trigger_len = after_bang.chars().take_while(|c| is_word_char(*c)).count();
    if trigger_len == 0 {
        // Bare `!` or `!` followed by whitespace/punctuation
        return no_trigger(raw);
    }

    let (trigger, rest) = after_bang.split_at(trigger_len);
    let remainder = rest.trim_start();

    ParsedQuery { trigger: Some(trigger.to_string()), remainder: remainder.to_string() }
}

fn no_trigger(raw: &str) -> ParsedQuery {
    ParsedQuery { trigger: None, remainder: raw.to_string() }
}

/// ASCII word character, matching the `\w` class of the trigger grammar
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
