use std::io;

use actions_cli::{run, Cli};
use actions_kit::init_diagnostics;
use clap::Parser;
use env_files::EnvFiles;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(error) = init_diagnostics(&cli.log_level) {
        eprintln!("diagnostics disabled: {error}");
    }

    let mut files = EnvFiles::from_process();
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock(), &mut files, io::stdin().lock())
}
