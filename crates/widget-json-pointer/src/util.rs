use std::borrow::Cow;

use crate::PointerError;

/// Decodes the `~0` / `~1` escapes of a single pointer token.
///
/// Tokens without a `~` are returned borrowed. Otherwise the token is
/// scanned once, left to right, so a decoded `/` or `~` is never looked
/// at again.
///
/// # Errors
///
/// [`PointerError::InvalidEscape`] for a `~` that is not followed by `0`
/// or `1`, including a trailing `~`.
///
/// # Example
///
/// ```
/// use widget_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("foo~1bar").unwrap(), "foo/bar");
/// assert_eq!(unescape_component("a~0b").unwrap(), "a~b");
/// assert!(unescape_component("x~2y").is_err());
/// ```
pub fn unescape_component(component: &str) -> Result<Cow<'_, str>, PointerError> {
    if !component.contains('~') {
        return Ok(Cow::Borrowed(component));
    }
    let mut out = String::with_capacity(component.len());
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            Some(other) => return Err(PointerError::InvalidEscape(format!("~{other}"))),
            None => return Err(PointerError::InvalidEscape("~".to_string())),
        }
    }
    Ok(Cow::Owned(out))
}

/// Escapes a decoded key so it can be embedded as a single pointer token.
///
/// `~` becomes `~0` first, then `/` becomes `~1`.
///
/// # Example
///
/// ```
/// use widget_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("plain"), "plain");
/// ```
pub fn escape_component(component: &str) -> Cow<'_, str> {
    if !component.contains('/') && !component.contains('~') {
        return Cow::Borrowed(component);
    }
    Cow::Owned(component.replace('~', "~0").replace('/', "~1"))
}

/// Check if a string represents a valid non-negative integer array index.
///
/// `"0"` is valid, other leading zeros are not.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}
