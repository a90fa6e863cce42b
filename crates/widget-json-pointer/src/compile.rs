use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::types::PointerSource;
use crate::util::{escape_component, unescape_component};
use crate::get::{resolve, resolve_mut};
use crate::set::assign;
use crate::PointerError;

/// A parsed, reusable pointer.
///
/// Holds the raw (still escaped) tokens, root marker first. Tokens are
/// decoded on every application, never cached, so one pointer can be
/// shared across threads and applied to any number of documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompiledPointer {
    tokens: Vec<String>,
}

/// Compile a pointer string or token sequence.
///
/// String input is split on `/` and must start with an empty segment.
/// Token sequences are taken verbatim: they are expected to be the
/// escaped segments a string pointer would split into, root marker first.
/// The root marker itself is never inspected.
///
/// # Errors
///
/// [`PointerError::InvalidPointer`] if a string pointer is non-empty and
/// does not start with `/`.
///
/// # Example
///
/// ```
/// use widget_json_pointer::compile;
/// use serde_json::json;
///
/// let pointer = compile("/chartStructure/metrics/statType").unwrap();
/// let doc = json!({"chartStructure": {"metrics": {"statType": "SUM"}}});
/// assert_eq!(pointer.get(&doc).unwrap(), Some(&json!("SUM")));
///
/// assert!(compile("chartStructure").is_err());
/// ```
pub fn compile<'a>(source: impl Into<PointerSource<'a>>) -> Result<CompiledPointer, PointerError> {
    match source.into() {
        PointerSource::Str(pointer) => {
            let tokens: Vec<String> = pointer.split('/').map(str::to_string).collect();
            if tokens[0].is_empty() {
                Ok(CompiledPointer { tokens })
            } else {
                Err(PointerError::InvalidPointer)
            }
        }
        PointerSource::Tokens(tokens) => Ok(CompiledPointer { tokens }),
    }
}

/// Compile a pointer held in a JSON value.
///
/// A string is compiled as a pointer string, an array of strings as a
/// token sequence.
///
/// # Errors
///
/// [`PointerError::InvalidPointer`] for any other value, including
/// arrays with non-string members.
pub fn compile_value(source: &Value) -> Result<CompiledPointer, PointerError> {
    match source {
        Value::String(pointer) => compile(pointer.as_str()),
        Value::Array(items) => {
            let tokens = items
                .iter()
                .map(|item| match item {
                    Value::String(token) => Ok(token.clone()),
                    _ => Err(PointerError::InvalidPointer),
                })
                .collect::<Result<Vec<_>, _>>()?;
            compile(tokens)
        }
        _ => Err(PointerError::InvalidPointer),
    }
}

impl CompiledPointer {
    /// The root pointer, addressing the whole document.
    pub fn root() -> Self {
        CompiledPointer {
            tokens: vec![String::new()],
        }
    }

    /// Build a pointer from decoded keys, escaping each one.
    ///
    /// # Example
    ///
    /// ```
    /// use widget_json_pointer::CompiledPointer;
    ///
    /// let pointer = CompiledPointer::from_keys(["a/b", "c"]);
    /// assert_eq!(pointer.to_string(), "/a~1b/c");
    /// ```
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = vec![String::new()];
        tokens.extend(
            keys.into_iter()
                .map(|key| escape_component(key.as_ref()).into_owned()),
        );
        CompiledPointer { tokens }
    }

    /// The raw tokens, root marker first.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of segments after the root marker.
    pub fn len(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this pointer addresses the whole document.
    pub fn is_root(&self) -> bool {
        self.tokens.len() == 1
    }

    /// Decoded keys after the root marker.
    pub fn keys(&self) -> impl Iterator<Item = Result<Cow<'_, str>, PointerError>> {
        self.tokens
            .iter()
            .skip(1)
            .map(|token| unescape_component(token))
    }

    /// Read the addressed value. See [`resolve`].
    pub fn get<'a>(&self, doc: &'a Value) -> Result<Option<&'a Value>, PointerError> {
        resolve(doc, self)
    }

    /// Mutable counterpart of [`CompiledPointer::get`].
    pub fn get_mut<'a>(&self, doc: &'a mut Value) -> Result<Option<&'a mut Value>, PointerError> {
        resolve_mut(doc, self)
    }

    /// Write `value` at the addressed location, or delete it for `None`.
    /// See [`assign`].
    pub fn set(&self, doc: &mut Value, value: Option<Value>) -> Result<Option<Value>, PointerError> {
        assign(doc, self, value)
    }

    /// Delete the addressed location, returning what was there.
    pub fn delete(&self, doc: &mut Value) -> Result<Option<Value>, PointerError> {
        assign(doc, self, None)
    }
}

impl fmt::Display for CompiledPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join("/"))
    }
}

impl FromStr for CompiledPointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

impl TryFrom<&str> for CompiledPointer {
    type Error = PointerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        compile(s)
    }
}
