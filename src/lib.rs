//! Workflow commands for CI runners.
//!
//! Invariant: single output gate. Only `core::output::Logger::emit(..)` writes
//! command text.
//!
//! # Public API Overview
//! - Write log commands (`debug`, `notice`, `warning`, `error`, groups and
//!   masks) through [`Logger`].
//! - Attach source locations to `notice`/`warning`/`error` with the
//!   [`annotation`] steps ([`title`], [`file`], [`lines`], [`span`]).
//! - Encode without writing via [`render_command`] and the escaping helpers.
//!
//! Environment, output, state, path and step-summary files live in the
//! `env_files` crate.

pub mod config;
pub mod logging;

pub mod core;

/// Annotation steps and the assembled field set.
pub use crate::core::annotation::{
    self as annotation, file, lines, span, title, Annotation, AnnotationFields, SourceRange,
};

/// Command kinds and encoding.
pub use crate::core::command::{render_command, render_end_group, CommandKind};

/// Escaping tables for messages and properties.
pub use crate::core::escape::{escape_message, escape_property};

/// Logger and its group guard.
pub use crate::core::output::{GroupGuard, Logger};

/// Runner configuration.
pub use crate::config::{is_debug, RunnerConfig};

/// Diagnostic subscriber setup.
pub use crate::logging::init_diagnostics;
