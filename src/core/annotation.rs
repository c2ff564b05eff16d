//! Source annotations attached to `notice`, `warning` and `error` commands.
//!
//! Callers hand over an unordered list of [`Annotation`] steps. Each step only
//! touches its own field; the coupling rules between fields are checked once,
//! against the fully assembled [`AnnotationFields`], so step order never
//! changes the result.

use std::fmt::{self, Write};

use crate::core::escape::escape_property;

/// A single annotation configuration step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Title(String),
    File(String),
    Lines(SourceRange),
    /// A column span; `None` when the supplied span was unusable.
    Span(Option<SourceRange>),
}

/// Inclusive, 1-based range. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRange {
    pub start: u64,
    pub end: u64,
}

impl SourceRange {
    fn is_single_line(self) -> bool {
        self.start == self.end
    }
}

/// Title shown above the annotation in the log viewer.
pub fn title(text: impl Into<String>) -> Annotation {
    Annotation::Title(text.into())
}

/// Source file the annotation points at.
pub fn file(path: impl Into<String>) -> Annotation {
    Annotation::File(path.into())
}

/// Line range within the annotated file.
///
/// Non-positive `start` or `end` fall back to 1 and an `end` before `start` is
/// raised to `start`. The range is dropped at render time unless a file is set.
pub fn lines(start: i64, end: i64) -> Annotation {
    let start = positive_or(start, 1);
    let end = positive_or(end, 1).max(start);
    Annotation::Lines(SourceRange { start, end })
}

/// Column span on a single line.
///
/// A non-positive `start` falls back to 1, a non-positive `end` drops the span
/// and an `end` before `start` is raised to `start`. The span is dropped at
/// render time unless a single-line range (`line == endLine`) is set.
pub fn span(start: i64, end: i64) -> Annotation {
    if end < 1 {
        return Annotation::Span(None);
    }
    let start = positive_or(start, 1);
    let end = positive_or(end, 1).max(start);
    Annotation::Span(Some(SourceRange { start, end }))
}

fn positive_or(value: i64, fallback: u64) -> u64 {
    u64::try_from(value)
        .ok()
        .filter(|value| *value > 0)
        .unwrap_or(fallback)
}

/// Accumulated annotation state after every step has been applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationFields {
    pub title: Option<String>,
    pub file: Option<String>,
    pub lines: Option<SourceRange>,
    pub columns: Option<SourceRange>,
}

impl AnnotationFields {
    /// Apply `steps` in order, then enforce the field coupling rules.
    pub fn from_steps(steps: &[Annotation]) -> Self {
        let mut fields = Self::default();
        for step in steps {
            fields.apply(step);
        }
        fields.finalize();
        fields
    }

    fn apply(&mut self, step: &Annotation) {
        match step {
            Annotation::Title(text) => self.title = non_empty(text),
            Annotation::File(path) => self.file = non_empty(path),
            Annotation::Lines(range) => self.lines = Some(*range),
            Annotation::Span(range) => self.columns = *range,
        }
    }

    fn finalize(&mut self) {
        if self.file.is_none() {
            self.lines = None;
        }
        if !self.lines.is_some_and(SourceRange::is_single_line) {
            self.columns = None;
        }
    }

    /// Render as `key=value` pairs joined by commas, in wire order.
    ///
    /// Only present fields are written, so the output never has a leading,
    /// trailing or doubled comma. An empty string means nothing survived.
    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        if let Some(title) = &self.title {
            write_field(&mut out, "title", escape_property(title))?;
        }
        if let Some(file) = &self.file {
            write_field(&mut out, "file", escape_property(file))?;
        }
        if let Some(lines) = self.lines {
            write_field(&mut out, "line", lines.start)?;
            write_field(&mut out, "endLine", lines.end)?;
        }
        if let Some(columns) = self.columns {
            write_field(&mut out, "col", columns.start)?;
            write_field(&mut out, "endColumn", columns.end)?;
        }
        Ok(out)
    }
}

fn write_field(out: &mut String, key: &str, value: impl fmt::Display) -> fmt::Result {
    if !out.is_empty() {
        out.push(',');
    }
    write!(out, "{key}={value}")
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}
