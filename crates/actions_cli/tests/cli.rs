use std::fs::{self, File};
use std::io;

use actions_cli::{run, Cli};
use clap::Parser;
use env_files::{EnvFiles, FileTargets, MemoryEnv, ProcessEnv, RandomDelimiter, Target};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

struct Harness {
    dir: TempDir,
    files: EnvFiles<MemoryEnv, RandomDelimiter>,
}

impl Harness {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let mut env = MemoryEnv::new();
        for target in Target::ALL {
            let path = dir.path().join(target.default_variable());
            File::create(&path).expect("target file should be created");
            env.set_var(target.default_variable(), &path.display().to_string());
        }
        Self {
            dir,
            files: EnvFiles::new(FileTargets::default(), env, RandomDelimiter),
        }
    }

    fn run(&mut self, args: &[&str]) -> anyhow::Result<String> {
        self.run_with_stdin(args, "")
    }

    fn run_with_stdin(&mut self, args: &[&str], stdin: &str) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("gha").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, &mut out, &mut self.files, io::Cursor::new(stdin.as_bytes()))?;
        Ok(String::from_utf8(out)?)
    }

    fn contents(&self, target: Target) -> String {
        fs::read_to_string(self.dir.path().join(target.default_variable()))
            .expect("target file should be readable")
    }
}

#[test]
fn notice_with_title_and_file() {
    let mut harness = Harness::new();

    let out = harness
        .run(&[
            "notice",
            "Unexpected token '<'",
            "--title",
            "Syntax Error",
            "--file",
            "src/lib.rs",
        ])
        .expect("notice should succeed");

    assert_eq!(
        out,
        "::notice title=Syntax Error,file=src/lib.rs::Unexpected token '<'\n"
    );
}

#[test]
fn error_with_full_location() {
    let mut harness = Harness::new();

    let out = harness
        .run(&[
            "error",
            "Your code is bad",
            "--title",
            "Look Here!",
            "--file",
            "src/app/handler.py",
            "--line",
            "184",
            "--col",
            "27",
            "--end-column",
            "32",
        ])
        .expect("error should succeed");

    assert_eq!(
        out,
        "::error title=Look Here!,file=src/app/handler.py,line=184,endLine=184,col=27,endColumn=32::Your code is bad\n"
    );
}

#[test]
fn group_mask_and_endgroup() {
    let mut harness = Harness::new();

    let mut out = harness.run(&["group", "Build"]).expect("group");
    out += &harness.run(&["mask", "hunter2"]).expect("mask");
    out += &harness.run(&["endgroup"]).expect("endgroup");

    assert_eq!(out, "::group::Build\n::add-mask::hunter2\n::endgroup::\n");
}

#[test]
fn set_env_and_output_write_files() {
    let mut harness = Harness::new();

    assert_eq!(harness.run(&["set-env", "SOMETHING", "value"]).expect("set-env"), "");
    harness.run(&["set-output", "result", "ok"]).expect("set-output");

    assert_eq!(harness.contents(Target::Env), "SOMETHING=value\n");
    assert_eq!(harness.contents(Target::Output), "result=ok\n");
    assert_eq!(harness.files.get_env("SOMETHING").as_deref(), Some("value"));
}

#[test]
fn reserved_env_key_fails_with_context() {
    let mut harness = Harness::new();

    let error = harness
        .run(&["set-env", "GITHUB_TOKEN", "x"])
        .expect_err("reserved key");

    assert_eq!(
        format!("{error:#}"),
        "setting environment variable GITHUB_TOKEN: setting $GITHUB_TOKEN is disallowed"
    );
    assert_eq!(harness.contents(Target::Env), "");
}

#[test]
fn state_round_trip_through_post_step_variable() {
    let mut harness = Harness::new();

    harness.run(&["save-state", "pid", "42"]).expect("save-state");
    assert_eq!(harness.contents(Target::State), "pid=42\n");
    assert!(harness.run(&["get-state", "pid"]).is_err());

    let mut env = harness.files.into_env();
    env.set_var("STATE_pid", "42");
    harness.files = EnvFiles::new(FileTargets::default(), env, RandomDelimiter);
    assert_eq!(harness.run(&["get-state", "pid"]).expect("get-state"), "42\n");
}

#[test]
fn add_path_updates_file_and_path() {
    let mut harness = Harness::new();

    harness.run(&["add-path", "/opt/tool/bin"]).expect("add-path");

    assert_eq!(harness.contents(Target::Path), "/opt/tool/bin\n");
    assert_eq!(harness.files.get_env("PATH").as_deref(), Some("/opt/tool/bin"));
}

#[test]
fn summary_from_argument_and_stdin() {
    let mut harness = Harness::new();

    harness.run(&["summary", "# Report"]).expect("summary");
    assert_eq!(harness.contents(Target::StepSummary), "# Report");

    harness
        .run_with_stdin(&["summary"], "## From stdin\n")
        .expect("summary from stdin");
    assert_eq!(harness.contents(Target::StepSummary), "## From stdin\n");
}

#[test]
fn is_debug_reads_runner_debug() {
    let mut harness = Harness::new();
    assert_eq!(harness.run(&["is-debug"]).expect("is-debug"), "false\n");

    let mut env = harness.files.into_env();
    env.set_var("RUNNER_DEBUG", "1");
    harness.files = EnvFiles::new(FileTargets::default(), env, RandomDelimiter);
    assert_eq!(harness.run(&["is-debug"]).expect("is-debug"), "true\n");
}
