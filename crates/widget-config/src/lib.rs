//! widget-config - tooling around summary widget configuration documents.
//!
//! The settings form of the widget addresses every configuration field by
//! a compiled pointer (see [`widget_json_pointer`]). This crate exposes the
//! same read/patch operations over serialized documents, used by the
//! `config-pointer` binary.

pub mod config_cli;

pub use config_cli::{assign_pointer, delete_pointer, lookup_pointer, CliError, OutputStyle};
