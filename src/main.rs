//! `pwd-rating` - interactive password strength checker.
//!
//! Reads passwords from stdin until `quit` (or end of input), printing the
//! rating and suggestions for each, then the session history.
//!
//! Logging goes to stderr and is controlled by `PWD_RATING_LOG`
//! (an `EnvFilter` directive, default `warn`).

use std::io;
use std::process::ExitCode;

use pwd_rating::Session;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PWD_RATING_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match Session::new(stdin.lock(), stdout.lock()).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("session aborted: {}", e);
            eprintln!("pwd-rating: {}", e);
            ExitCode::FAILURE
        }
    }
}
