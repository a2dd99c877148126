//! `collect`: run one collection operation over a JSON document.
//!
//! Reads JSON from `--input` or stdin and prints the result as a JSON array.
//! Errors go to stderr; the exit code is one of [`collect_cli::exit_codes`].

use clap::Parser;
use collect_cli::cli::{Cli, run};
use collect_cli::{exit_codes, logging};

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version` print to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit_codes::INVALID);
        }
    };
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = run(cli, &mut stdout) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}
