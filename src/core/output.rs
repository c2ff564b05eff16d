//! Workflow command logger and its single output gate.
//!
//! Invariant: all command text is written through `Logger::emit(..)`.

use std::io::{self, Stdout, Write};

use crate::core::annotation::Annotation;
use crate::core::command::{render_command, render_end_group, CommandKind};

/// Writes workflow commands to an [`io::Write`] sink.
///
/// The runner reads commands from stdout, so [`Logger::stdout`] is the
/// production constructor; any other writer is handy in tests.
#[derive(Debug)]
pub struct Logger<W: Write> {
    out: W,
}

impl Logger<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Logger<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Debug message, only visible when the runner has debug logging on.
    pub fn debug(&mut self, message: &str) -> io::Result<()> {
        self.emit(CommandKind::Debug, message, &[])
    }

    pub fn notice(&mut self, message: &str, annotations: &[Annotation]) -> io::Result<()> {
        self.emit(CommandKind::Notice, message, annotations)
    }

    pub fn warning(&mut self, message: &str, annotations: &[Annotation]) -> io::Result<()> {
        self.emit(CommandKind::Warning, message, annotations)
    }

    pub fn error(&mut self, message: &str, annotations: &[Annotation]) -> io::Result<()> {
        self.emit(CommandKind::Error, message, annotations)
    }

    /// Open a collapsible group titled `title`. Close it with [`Logger::end_group`].
    pub fn group(&mut self, title: &str) -> io::Result<()> {
        self.emit(CommandKind::Group, title, &[])
    }

    pub fn end_group(&mut self) -> io::Result<()> {
        self.out.write_all(render_end_group().as_bytes())?;
        self.out.flush()
    }

    /// Mask `value` in every log line the runner prints after this one.
    pub fn add_mask(&mut self, value: &str) -> io::Result<()> {
        self.emit(CommandKind::AddMask, value, &[])
    }

    /// Open a group that is closed when the returned guard drops.
    pub fn group_scope(&mut self, title: &str) -> io::Result<GroupGuard<'_, W>> {
        self.group(title)?;
        Ok(GroupGuard {
            logger: Some(self),
        })
    }

    /// Flush a rendered command to the sink.
    ///
    /// This is the single write gate: nothing else in the crate writes
    /// command text.
    fn emit(
        &mut self,
        kind: CommandKind,
        message: &str,
        annotations: &[Annotation],
    ) -> io::Result<()> {
        let annotations: &[Annotation] = if kind.accepts_annotations() {
            annotations
        } else {
            &[]
        };
        let Some(line) = render_command(kind, message, annotations) else {
            return Ok(());
        };
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }
}

/// RAII guard that writes `::endgroup::` on drop.
pub struct GroupGuard<'a, W: Write> {
    logger: Option<&'a mut Logger<W>>,
}

impl<W: Write> GroupGuard<'_, W> {
    /// Access the wrapped logger while the group is open.
    pub fn logger(&mut self) -> &mut Logger<W> {
        self.logger
            .as_deref_mut()
            .expect("logger already released from guard")
    }

    /// Close the group now, reporting any write error.
    pub fn finish(mut self) -> io::Result<()> {
        match self.logger.take() {
            Some(logger) => logger.end_group(),
            None => Ok(()),
        }
    }
}

impl<W: Write> Drop for GroupGuard<'_, W> {
    fn drop(&mut self) {
        if let Some(logger) = self.logger.take() {
            if let Err(error) = logger.end_group() {
                tracing::warn!(%error, "failed to close log group");
            }
        }
    }
}
