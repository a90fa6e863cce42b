//! Pointer validation and the reserved-key denylist.

use std::borrow::Cow;

use crate::util::unescape_component;
use crate::PointerError;

/// Keys that must never be created, traversed, or assigned by a write.
pub const RESERVED_KEYS: &[&str] = &["__proto__"];

/// Key pairs that must never appear back to back in a written path.
pub const RESERVED_KEY_PAIRS: &[(&str, &str)] = &[("constructor", "prototype")];

/// Validate a pointer string without compiling it.
///
/// Unlike [`compile`](crate::compile), which decodes lazily, this checks
/// every escape up front.
///
/// # Errors
///
/// - [`PointerError::InvalidPointer`] if the pointer is non-empty and does
///   not start with `/`
/// - [`PointerError::InvalidEscape`] for a bad `~` sequence in any token
///
/// # Example
///
/// ```
/// use widget_json_pointer::validate_pointer;
///
/// validate_pointer("").unwrap();
/// validate_pointer("/foo/b~1r").unwrap();
/// validate_pointer("foo").unwrap_err();
/// validate_pointer("/x~2").unwrap_err();
/// ```
pub fn validate_pointer(pointer: &str) -> Result<(), PointerError> {
    let mut segments = pointer.split('/');
    if segments.next() != Some("") {
        return Err(PointerError::InvalidPointer);
    }
    for segment in segments {
        unescape_component(segment)?;
    }
    Ok(())
}

/// Check whether a decoded path touches the reserved-key denylist.
///
/// `keys` are the decoded keys after the root marker.
pub fn is_reserved_path<S: AsRef<str>>(keys: &[S]) -> bool {
    let keys: Vec<&str> = keys.iter().map(AsRef::as_ref).collect();
    if keys.iter().any(|key| RESERVED_KEYS.contains(key)) {
        return true;
    }
    keys.windows(2)
        .any(|pair| RESERVED_KEY_PAIRS.contains(&(pair[0], pair[1])))
}

pub(crate) fn decode_keys(tokens: &[String]) -> Result<Vec<Cow<'_, str>>, PointerError> {
    tokens
        .iter()
        .map(|token| unescape_component(token))
        .collect()
}
