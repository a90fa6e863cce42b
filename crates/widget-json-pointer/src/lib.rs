//! Compiled JSON pointers for widget configuration documents.
//!
//! A pointer such as `/chartStructure/metrics/statType` is compiled once
//! into a [`CompiledPointer`] and then applied to any number of
//! documents: [`CompiledPointer::get`] reads without mutating,
//! [`CompiledPointer::set`] writes (creating missing containers on the
//! way) or deletes.
//!
//! Within a segment, `~` is written `~0` and `/` is written `~1`. The
//! segment `-` addresses the slot one past the end of an array. The empty
//! pointer addresses the whole document.
//!
//! # Example
//!
//! ```
//! use widget_json_pointer::compile;
//! use serde_json::json;
//!
//! let stat_type = compile("/chartStructure/metrics/statType").unwrap();
//!
//! let mut form = json!({"chartStructure": {"metricsType": "COUNT_RECORDS"}});
//! assert_eq!(stat_type.get(&form).unwrap(), None);
//!
//! stat_type.set(&mut form, Some(json!("SUM"))).unwrap();
//! assert_eq!(stat_type.get(&form).unwrap(), Some(&json!("SUM")));
//! ```
//!
//! Writes never go through the reserved keys `__proto__` or
//! `constructor`/`prototype`; such calls leave the document as it was.

use serde_json::Value;
use thiserror::Error;

pub mod compile;
pub mod get;
pub mod set;
pub mod types;
pub mod util;
pub mod validate;

pub use compile::{compile, compile_value, CompiledPointer};
pub use get::{resolve, resolve_mut};
pub use set::assign;
pub use types::{PointerSource, StepKind, APPEND_MARKER};
pub use util::{escape_component, is_valid_index, unescape_component};
pub use validate::{is_reserved_path, validate_pointer, RESERVED_KEYS, RESERVED_KEY_PAIRS};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("Invalid JSON pointer.")]
    InvalidPointer,
    #[error("Invalid input object.")]
    InvalidInput,
    #[error("Invalid tilde escape: {0}")]
    InvalidEscape(String),
}

/// Compile `pointer` and read the value it addresses in `doc`.
///
/// # Example
///
/// ```
/// use widget_json_pointer::get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// assert_eq!(get(&doc, "/foo/bar").unwrap(), Some(&json!(42)));
/// assert_eq!(get(&doc, "/foo/baz/qux").unwrap(), None);
/// ```
pub fn get<'a, 'p>(
    doc: &'a Value,
    pointer: impl Into<PointerSource<'p>>,
) -> Result<Option<&'a Value>, PointerError> {
    compile(pointer)?.get(doc)
}

/// Compile `pointer` and write `value` (or delete, for `None`) in `doc`.
///
/// Returns the previously stored value.
///
/// # Example
///
/// ```
/// use widget_json_pointer::set;
/// use serde_json::json;
///
/// let mut doc = json!({"arr": [1, 2]});
/// set(&mut doc, "/arr/-", Some(json!(9))).unwrap();
/// assert_eq!(doc, json!({"arr": [1, 2, 9]}));
/// ```
pub fn set<'p>(
    doc: &mut Value,
    pointer: impl Into<PointerSource<'p>>,
    value: Option<Value>,
) -> Result<Option<Value>, PointerError> {
    compile(pointer)?.set(doc, value)
}
