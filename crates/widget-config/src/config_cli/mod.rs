//! `config-cli` - command-line access to configuration documents.
//!
//! Provides the core logic used by the `config-pointer` binary:
//! - `get`    - read the value a pointer addresses
//! - `set`    - write a JSON value at a pointer, creating parents
//! - `delete` - remove the value at a pointer
//!
//! Every function takes the document as JSON text and returns JSON text,
//! so the binary only deals with I/O.

use serde_json::Value;
use thiserror::Error;
use widget_json_pointer::{compile, PointerError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Pointer(#[from] PointerError),
    #[error("Nothing found at {0:?}")]
    NotFound(String),
}

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Pretty,
    Compact,
}

impl OutputStyle {
    fn render(self, value: &Value) -> Result<String, CliError> {
        Ok(match self {
            OutputStyle::Pretty => serde_json::to_string_pretty(value)?,
            OutputStyle::Compact => serde_json::to_string(value)?,
        })
    }
}

// ── get ───────────────────────────────────────────────────────────────────

/// Look up a pointer in a configuration document.
///
/// `doc_json`: the document as a JSON string.
/// `pointer`: the pointer string (e.g., `/chartStructure/metrics/statType`).
///
/// Returns the found value rendered in `style`. A missing value, at any
/// depth, is [`CliError::NotFound`].
pub fn lookup_pointer(doc_json: &str, pointer: &str, style: OutputStyle) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let compiled = compile(pointer)?;
    match compiled.get(&doc)? {
        Some(value) => style.render(value),
        None => Err(CliError::NotFound(pointer.to_string())),
    }
}

// ── set / delete ──────────────────────────────────────────────────────────

/// Write `value_json` at `pointer`, creating missing parents.
///
/// Returns the updated document rendered in `style`.
pub fn assign_pointer(
    doc_json: &str,
    pointer: &str,
    value_json: &str,
    style: OutputStyle,
) -> Result<String, CliError> {
    let value: Value = serde_json::from_str(value_json)?;
    patch(doc_json, pointer, Some(value), style)
}

/// Remove whatever is stored at `pointer`.
///
/// Returns the updated document rendered in `style`. Deleting a missing
/// value is not an error.
pub fn delete_pointer(doc_json: &str, pointer: &str, style: OutputStyle) -> Result<String, CliError> {
    patch(doc_json, pointer, None, style)
}

fn patch(
    doc_json: &str,
    pointer: &str,
    value: Option<Value>,
    style: OutputStyle,
) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(doc_json)?;
    let compiled = compile(pointer)?;
    let previous = compiled.set(&mut doc, value)?;
    match &previous {
        Some(old) => tracing::info!(pointer, previous = %old, "replaced value"),
        None => tracing::info!(pointer, "no previous value"),
    }
    style.render(&doc)
}

// ── Tests ─────────────────────────────────────────────────────────────────
