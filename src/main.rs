use std::io::Write;

use clap::Parser;
use metagenome_utils::cli::{self, Cli};
use metagenome_utils::config::AppConfig;
use metagenome_utils::errors::CoreError;

fn main() {
    cli::logger_init();
    let args = Cli::parse();
    if let Err(e) = run(args) {
        eprintln!("[mgu] {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(args: Cli) -> Result<(), CoreError> {
    let config = AppConfig::from_env()?;
    let out = cli::run(args, &config)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{out}")?;
    stdout.flush()?;
    Ok(())
}
