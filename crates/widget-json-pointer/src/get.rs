use serde_json::Value;

use crate::compile::CompiledPointer;
use crate::types::StepKind;
use crate::util::unescape_component;
use crate::PointerError;

pub(crate) fn is_container(val: &Value) -> bool {
    matches!(val, Value::Object(_) | Value::Array(_))
}

fn child<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(key),
        Value::Array(arr) => match StepKind::classify(key) {
            StepKind::Index(idx) => arr.get(idx),
            StepKind::Append | StepKind::Key => None,
        },
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(key),
        Value::Array(arr) => match StepKind::classify(key) {
            StepKind::Index(idx) => arr.get_mut(idx),
            StepKind::Append | StepKind::Key => None,
        },
        _ => None,
    }
}

/// Read the value a compiled pointer addresses.
///
/// Only the document root is checked strictly. Below it, a missing key or
/// a scalar where a container was expected resolves to `None` so optional
/// fields can be probed without checking every level.
///
/// # Errors
///
/// - [`PointerError::InvalidInput`] if `doc` is not an object or array
/// - [`PointerError::InvalidEscape`] for a bad escape in a visited token
pub fn resolve<'a>(
    doc: &'a Value,
    pointer: &CompiledPointer,
) -> Result<Option<&'a Value>, PointerError> {
    if !is_container(doc) {
        return Err(PointerError::InvalidInput);
    }
    if pointer.is_root() {
        return Ok(Some(doc));
    }

    let tokens = pointer.tokens();
    let Some(last) = tokens.len().checked_sub(1) else {
        return Ok(None);
    };
    let mut current = doc;
    for (position, token) in tokens.iter().enumerate().skip(1) {
        let key = unescape_component(token)?;
        let Some(next) = child(current, &key) else {
            return Ok(None);
        };
        if position == last {
            return Ok(Some(next));
        }
        if !is_container(next) {
            tracing::trace!(pointer = %pointer, key = %key, "scalar in the middle of a read path");
            return Ok(None);
        }
        current = next;
    }
    Ok(None)
}

/// Mutable counterpart of [`resolve`]. Never creates anything.
pub fn resolve_mut<'a>(
    doc: &'a mut Value,
    pointer: &CompiledPointer,
) -> Result<Option<&'a mut Value>, PointerError> {
    if !is_container(doc) {
        return Err(PointerError::InvalidInput);
    }
    if pointer.is_root() {
        return Ok(Some(doc));
    }

    let tokens = pointer.tokens();
    let Some(last) = tokens.len().checked_sub(1) else {
        return Ok(None);
    };
    let mut current = doc;
    for (position, token) in tokens.iter().enumerate().skip(1) {
        let key = unescape_component(token)?;
        let Some(next) = child_mut(current, &key) else {
            return Ok(None);
        };
        if position == last {
            return Ok(Some(next));
        }
        if !is_container(next) {
            return Ok(None);
        }
        current = next;
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;
    use serde_json::json;

    fn read<'a>(doc: &'a Value, pointer: &str) -> Result<Option<&'a Value>, PointerError> {
        resolve(doc, &compile(pointer).unwrap())
    }

    #[test]
    fn test_root_identity() {
        let doc = json!({"a": [1, 2]});
        assert_eq!(read(&doc, "").unwrap(), Some(&doc));
        let arr = json!([1]);
        assert_eq!(read(&arr, "").unwrap(), Some(&arr));
    }

    #[test]
    fn test_root_must_be_container() {
        assert_eq!(read(&json!(5), "/x"), Err(PointerError::InvalidInput));
        assert_eq!(read(&json!("s"), ""), Err(PointerError::InvalidInput));
        assert_eq!(read(&json!(null), "/x"), Err(PointerError::InvalidInput));
    }

    #[test]
    fn test_get_object_key() {
        let doc = json!({"foo": "bar"});
        assert_eq!(read(&doc, "/foo").unwrap(), Some(&json!("bar")));
        assert_eq!(read(&doc, "/missing").unwrap(), None);
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"foo": {"bar": {"baz": "qux"}}});
        assert_eq!(read(&doc, "/foo/bar/baz").unwrap(), Some(&json!("qux")));
    }

    #[test]
    fn test_get_array_element() {
        let doc = json!([1, 2, 3]);
        assert_eq!(read(&doc, "/0").unwrap(), Some(&json!(1)));
        assert_eq!(read(&doc, "/2").unwrap(), Some(&json!(3)));
        assert_eq!(read(&doc, "/3").unwrap(), None);
        assert_eq!(read(&doc, "/-").unwrap(), None);
        assert_eq!(read(&doc, "/01").unwrap(), None);
        assert_eq!(read(&doc, "/length").unwrap(), None);
    }

    #[test]
    fn test_get_explicit_null() {
        let doc = json!({"foo": null});
        assert_eq!(read(&doc, "/foo").unwrap(), Some(&Value::Null));
        assert_eq!(read(&doc, "/foo/bar").unwrap(), None);
    }

    #[test]
    fn test_lenient_mid_path() {
        assert_eq!(read(&json!({}), "/a/b/c").unwrap(), None);
        assert_eq!(read(&json!({"a": 1}), "/a/b/c").unwrap(), None);
        assert_eq!(read(&json!({"a": "str"}), "/a/0").unwrap(), None);
    }

    #[test]
    fn test_escaped_keys() {
        let doc = json!({"a/b": {"c~d": 1}});
        assert_eq!(read(&doc, "/a~1b/c~0d").unwrap(), Some(&json!(1)));
        assert_eq!(read(&doc, "/a~1b/x~2"), Err(PointerError::InvalidEscape("~2".into())));
    }

    #[test]
    fn test_empty_key() {
        let doc = json!({"": {"": 7}});
        assert_eq!(read(&doc, "/").unwrap(), Some(&json!({"": 7})));
        assert_eq!(read(&doc, "//").unwrap(), Some(&json!(7)));
    }

    #[test]
    fn test_empty_token_sequence() {
        let doc = json!({"a": 1});
        let p = compile(Vec::<String>::new()).unwrap();
        assert_eq!(resolve(&doc, &p).unwrap(), None);
    }

    #[test]
    fn test_resolve_mut() {
        let mut doc = json!({"a": {"b": [1, 2]}});
        let p = compile("/a/b/1").unwrap();
        if let Some(v) = resolve_mut(&mut doc, &p).unwrap() {
            *v = json!(20);
        }
        assert_eq!(doc, json!({"a": {"b": [1, 20]}}));

        let p = compile("/a/missing/x").unwrap();
        assert!(resolve_mut(&mut doc, &p).unwrap().is_none());
        assert_eq!(doc, json!({"a": {"b": [1, 20]}}));

        let mut scalar = json!(1);
        assert_eq!(
            resolve_mut(&mut scalar, &compile("").unwrap()),
            Err(PointerError::InvalidInput)
        );
    }
}
