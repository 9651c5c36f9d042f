//! Entry point for the `colony` command-line interface.
#![forbid(unsafe_code)]

use colony_cli::CliError;

fn main() {
    match colony_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("colony: {err}");
            std::process::exit(1);
        }
    }
}
