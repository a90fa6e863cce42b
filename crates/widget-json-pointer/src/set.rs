use std::mem;

use serde_json::{Map, Value};

use crate::compile::CompiledPointer;
use crate::get::is_container;
use crate::types::StepKind;
use crate::validate::{decode_keys, is_reserved_path};
use crate::PointerError;

fn empty_container(next: StepKind) -> Value {
    if next.wants_array() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Step into `key`, creating it if missing. The shape of a created child
/// is picked from the key that follows it.
fn descend<'a>(node: &'a mut Value, key: &str, next: StepKind) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => Some(map.entry(key).or_insert_with(|| empty_container(next))),
        Value::Array(arr) => {
            let idx = StepKind::classify(key).array_position(arr.len())?;
            if idx == arr.len() {
                arr.push(empty_container(next));
            }
            arr.get_mut(idx)
        }
        _ => None,
    }
}

/// Write or delete at `key`. `Err(())` means the node cannot hold `key`.
fn write(node: &mut Value, key: &str, value: Option<Value>) -> Result<Option<Value>, ()> {
    match node {
        Value::Object(map) => Ok(match value {
            Some(value) => map.insert(key.to_string(), value),
            None => map.remove(key),
        }),
        Value::Array(arr) => {
            let len = arr.len();
            let idx = StepKind::classify(key).array_position(len).ok_or(())?;
            match value {
                Some(value) if idx < len => Ok(Some(mem::replace(&mut arr[idx], value))),
                Some(value) if idx == len => {
                    arr.push(value);
                    Ok(None)
                }
                Some(_) => Err(()),
                None if idx < len => Ok(Some(arr.remove(idx))),
                None => Ok(None),
            }
        }
        _ => Err(()),
    }
}

/// Write `value` where a compiled pointer points, or delete it for `None`.
///
/// Missing intermediate containers are created on the way down: an array
/// when the following key is an index or `-`, an object otherwise. On an
/// array, `-` addresses the slot one past the end. Returns the value that
/// was previously stored at the location.
///
/// Paths touching the reserved-key denylist (see
/// [`is_reserved_path`]) are never written: the call returns `Ok(None)`
/// and leaves `doc` untouched. So do paths the document's shape cannot
/// hold, such as a non-index key into an array, a scalar in the middle of
/// the path, or an index past the end of an array.
///
/// Deleting an array element removes it: every later element moves down
/// one index and the array gets shorter.
///
/// A root-only pointer replaces the whole document.
///
/// # Errors
///
/// - [`PointerError::InvalidInput`] if `doc` is not an object or array
/// - [`PointerError::InvalidPointer`] for a pointer with no tokens at all
/// - [`PointerError::InvalidEscape`] for a bad escape in any token; this
///   is detected before `doc` is touched
///
/// # Example
///
/// ```
/// use widget_json_pointer::compile;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// let previous = compile("/a/b").unwrap().set(&mut doc, Some(json!(5))).unwrap();
/// assert_eq!(previous, None);
/// assert_eq!(doc, json!({"a": {"b": 5}}));
/// ```
pub fn assign(
    doc: &mut Value,
    pointer: &CompiledPointer,
    value: Option<Value>,
) -> Result<Option<Value>, PointerError> {
    if !is_container(doc) {
        return Err(PointerError::InvalidInput);
    }
    let Some((_, tokens)) = pointer.tokens().split_first() else {
        return Err(PointerError::InvalidPointer);
    };
    let keys = decode_keys(tokens)?;
    if is_reserved_path(&keys) {
        tracing::warn!(pointer = %pointer, "refusing to write through a reserved key");
        return Ok(None);
    }

    let Some((last, parents)) = keys.split_last() else {
        let previous = match value {
            Some(value) => mem::replace(doc, value),
            None => doc.take(),
        };
        return Ok(Some(previous));
    };

    let mut current = doc;
    for (position, key) in parents.iter().enumerate() {
        let next = StepKind::classify(&keys[position + 1]);
        match descend(current, key, next) {
            Some(child) => current = child,
            None => {
                tracing::debug!(pointer = %pointer, key = %key, "path does not fit the document, write skipped");
                return Ok(None);
            }
        }
    }

    write(current, last, value).or_else(|()| {
        tracing::debug!(pointer = %pointer, key = %last, "target does not fit the document, write skipped");
        Ok(None)
    })
}
