//! Binary entry point for the `brotli` command-line tool.
//!
//! 1. `Args::parse` reads the command line (clap).
//! 2. `env_logger` is initialised from `-v` and `RUST_LOG`.
//! 3. `run::execute` processes every input and reports failures.
//!
//! Exit code is 0 when every input succeeded, 1 otherwise.

use clap::Parser;

use brotli_stream::cli::args::Args;
use brotli_stream::cli::run::execute;

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format_timestamp(None)
        .parse_default_env()
        .init();

    log::debug!("brotli-stream v{}", brotli_stream::version_string());

    let code = match execute(&args) {
        Ok(0) => 0,
        Ok(failed) => {
            log::debug!("{failed} input(s) failed");
            1
        }
        Err(e) => {
            eprintln!("brotli: {e:#}");
            1
        }
    };
    std::process::exit(code);
}
