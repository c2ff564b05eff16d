//! Workflow command encoding.
//!
//! Wire format: `::<name>[ <annotation>]::<escaped message>\n`.

use std::fmt;

use crate::core::annotation::{Annotation, AnnotationFields};
use crate::core::escape::escape_message;

/// Commands understood by the runner's log viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Debug,
    Notice,
    Warning,
    Error,
    /// Start of a collapsible log group; the message is the group title.
    Group,
    /// End of the innermost group. The only command sent without a message.
    EndGroup,
    /// Register a value to be masked in all later log output.
    AddMask,
}

impl CommandKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Group => "group",
            Self::EndGroup => "endgroup",
            Self::AddMask => "add-mask",
        }
    }

    /// Whether the log viewer attaches source annotations to this command.
    pub const fn accepts_annotations(self) -> bool {
        matches!(self, Self::Notice | Self::Warning | Self::Error)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a command line, including the trailing newline.
///
/// Returns `None` for an empty message: the runner misreads empty commands, so
/// the caller must skip the write entirely.
pub fn render_command(
    name: impl fmt::Display,
    message: &str,
    annotations: &[Annotation],
) -> Option<String> {
    if message.is_empty() {
        return None;
    }

    let message = escape_message(message);
    if annotations.is_empty() {
        return Some(format!("::{name}::{message}\n"));
    }

    let fields = AnnotationFields::from_steps(annotations);
    match fields.render() {
        Ok(rendered) if !rendered.is_empty() => Some(format!("::{name} {rendered}::{message}\n")),
        Ok(_) => Some(format!("::{name}::{message}\n")),
        Err(error) => {
            tracing::warn!(command = %name, %error, "annotation rendering failed; writing plain message");
            Some(format!("::{name}::{message}\n"))
        }
    }
}

/// The bare `::endgroup::` line.
pub fn render_end_group() -> String {
    format!("::{}::\n", CommandKind::EndGroup.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::annotation::{file, lines, span, title};

    #[test]
    fn empty_message_renders_nothing() {
        assert_eq!(render_command(CommandKind::Notice, "", &[title("ignored")]), None);
    }

    #[test]
    fn kind_names_match_wire_keywords() {
        let names: Vec<&str> = [
            CommandKind::Debug,
            CommandKind::Notice,
            CommandKind::Warning,
            CommandKind::Error,
            CommandKind::Group,
            CommandKind::EndGroup,
            CommandKind::AddMask,
        ]
        .into_iter()
        .map(CommandKind::name)
        .collect();
        assert_eq!(
            names,
            ["debug", "notice", "warning", "error", "group", "endgroup", "add-mask"]
        );
    }

    #[test]
    fn plain_command() {
        assert_eq!(
            render_command(CommandKind::Notice, "notice meeee", &[]).as_deref(),
            Some("::notice::notice meeee\n")
        );
    }

    #[test]
    fn annotated_command() {
        assert_eq!(
            render_command(
                CommandKind::Notice,
                "Unexpected token '<'",
                &[title("Syntax Error"), file("src/lib.rs")]
            )
            .as_deref(),
            Some("::notice title=Syntax Error,file=src/lib.rs::Unexpected token '<'\n")
        );
    }

    #[test]
    fn annotations_that_all_drop_fall_back_to_plain_form() {
        assert_eq!(
            render_command(CommandKind::Warning, "notice meeee", &[lines(1, 32), span(1, 32)])
                .as_deref(),
            Some("::warning::notice meeee\n")
        );
    }

    #[test]
    fn arbitrary_names_are_accepted() {
        assert_eq!(
            render_command("echo", "on", &[]).as_deref(),
            Some("::echo::on\n")
        );
    }

    #[test]
    fn end_group_is_bare() {
        assert_eq!(render_end_group(), "::endgroup::\n");
    }
}
