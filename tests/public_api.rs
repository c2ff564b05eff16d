#![allow(unused_imports)]

use actions_kit::{
    annotation, escape_message, escape_property, file, init_diagnostics, is_debug, lines,
    render_command, render_end_group, span, title, Annotation, AnnotationFields, CommandKind,
    GroupGuard, Logger, RunnerConfig, SourceRange,
};

#[test]
fn public_api_exports_compile() {}
