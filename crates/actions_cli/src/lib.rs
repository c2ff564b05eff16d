//! `gha`: workflow commands and environment files from shell steps.

use std::io::{Read, Write};

use actions_kit::config::RUNNER_DEBUG;
use actions_kit::{file, lines, span, title, Annotation, Logger};
use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use env_files::{DelimiterSource, EnvFiles, ProcessEnv};

#[derive(Debug, Parser)]
#[command(name = "gha", version, about = "Write CI workflow commands and environment files")]
pub struct Cli {
    /// Diagnostic level on stderr when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Debug message (shown when the runner has debug logging on)
    Debug { message: String },
    /// Notice annotation
    Notice(AnnotatedMessage),
    /// Warning annotation
    Warning(AnnotatedMessage),
    /// Error annotation
    Error(AnnotatedMessage),
    /// Open a collapsible log group
    Group { title: String },
    /// Close the innermost log group
    Endgroup,
    /// Mask a value in all later log output
    Mask { value: String },
    /// Set an environment variable for later steps
    SetEnv { key: String, value: String },
    /// Set a step output
    SetOutput { key: String, value: String },
    /// Save state for the post step
    SaveState { key: String, value: String },
    /// Print state saved by the main step
    GetState { name: String },
    /// Prepend a directory to PATH for later steps
    AddPath { path: String },
    /// Replace the job summary (reads stdin when no text is given)
    Summary { markdown: Option<String> },
    /// Print whether runner debug logging is on
    IsDebug,
}

#[derive(Debug, Clone, Args)]
pub struct AnnotatedMessage {
    pub message: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub file: Option<String>,
    /// First line of the annotated range
    #[arg(long)]
    pub line: Option<i64>,
    /// Last line of the annotated range (defaults to --line)
    #[arg(long, requires = "line")]
    pub end_line: Option<i64>,
    /// First column on a single-line range
    #[arg(long)]
    pub col: Option<i64>,
    /// Last column (defaults to --col)
    #[arg(long, requires = "col")]
    pub end_column: Option<i64>,
}

impl AnnotatedMessage {
    pub fn annotations(&self) -> Vec<Annotation> {
        let mut steps = Vec::new();
        if let Some(text) = &self.title {
            steps.push(title(text.as_str()));
        }
        if let Some(path) = &self.file {
            steps.push(file(path.as_str()));
        }
        if let Some(start) = self.line {
            steps.push(lines(start, self.end_line.unwrap_or(start)));
        }
        if let Some(start) = self.col {
            steps.push(span(start, self.end_column.unwrap_or(start)));
        }
        steps
    }
}

/// Execute `cli`, writing commands and plain answers to `out`.
pub fn run<W, E, D>(
    cli: &Cli,
    out: &mut W,
    files: &mut EnvFiles<E, D>,
    mut stdin: impl Read,
) -> anyhow::Result<()>
where
    W: Write,
    E: ProcessEnv,
    D: DelimiterSource,
{
    tracing::debug!(command = ?cli.command, "running");
    let mut logger = Logger::new(&mut *out);

    match &cli.command {
        Command::Debug { message } => logger.debug(message)?,
        Command::Notice(args) => logger.notice(&args.message, &args.annotations())?,
        Command::Warning(args) => logger.warning(&args.message, &args.annotations())?,
        Command::Error(args) => logger.error(&args.message, &args.annotations())?,
        Command::Group { title } => logger.group(title)?,
        Command::Endgroup => logger.end_group()?,
        Command::Mask { value } => logger.add_mask(value)?,
        Command::SetEnv { key, value } => files
            .set_env(key, value)
            .with_context(|| format!("setting environment variable {key}"))?,
        Command::SetOutput { key, value } => files
            .set_output(key, value)
            .with_context(|| format!("setting output {key}"))?,
        Command::SaveState { key, value } => files
            .save_state(key, value)
            .with_context(|| format!("saving state {key}"))?,
        Command::GetState { name } => match files.get_state(name) {
            Some(value) => writeln!(out, "{value}")?,
            None => bail!("state {name} is not set"),
        },
        Command::AddPath { path } => files
            .add_path(path)
            .with_context(|| format!("adding {path} to PATH"))?,
        Command::Summary { markdown } => {
            let markdown = match markdown {
                Some(text) => text.clone(),
                None => {
                    let mut buffer = String::new();
                    stdin
                        .read_to_string(&mut buffer)
                        .context("reading summary from stdin")?;
                    buffer
                }
            };
            files
                .write_summary(&markdown)
                .context("writing job summary")?;
        }
        Command::IsDebug => {
            let debug = files.get_env(RUNNER_DEBUG).as_deref() == Some("1");
            writeln!(out, "{debug}")?;
        }
    }

    Ok(())
}
