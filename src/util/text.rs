/// Strips one pair of surrounding double quotes.
///
/// Returns `None` unless `text` both starts and ends with `"`. A lone `"`
/// counts as an empty quoted string. Embedded quotes are left untouched;
/// there is no escape syntax.
///
/// ```
/// use ebpl::util::text::unquote;
///
/// assert_eq!(unquote("\"Alice\""), Some("Alice"));
/// assert_eq!(unquote("\"\""), Some(""));
/// assert_eq!(unquote("Alice"), None);
/// assert_eq!(unquote("\"open"), None);
/// ```
#[must_use]
pub fn unquote(text: &str) -> Option<&str> {
    if !(text.starts_with('"') && text.ends_with('"')) {
        return None;
    }
    Some(text.get(1..text.len() - 1).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::unquote;

    #[test]
    fn single_quote_character_is_empty() {
        assert_eq!(unquote("\""), Some(""));
    }

    #[test]
    fn inner_quotes_survive() {
        assert_eq!(unquote("\"a\" + \"b\""), Some("a\" + \"b"));
    }
}
