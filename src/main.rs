use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::Level;

use snapdiff::cli::{Cli, USAGE};
use snapdiff::Config;

mod commands;

/// Send logs to stderr so they never mix with the diff on stdout.
fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    init_logging(cli.debug);

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "snapdiff", &mut std::io::stdout());
        return Ok(());
    }

    let Some((front, back)) = cli.paths() else {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    };

    for arg in cli.ignored_args() {
        tracing::warn!(%arg, "ignoring extra argument");
    }

    let config = Config::load()?;
    let painter = cli.painter(&config);

    commands::diff::handle_diff(front, back, cli.mode(), &painter)?;

    if cli.pause(&config) {
        commands::diff::wait_for_enter()?;
    }

    Ok(())
}
