//! Binary entrypoint for the `smart-todo` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // `.env` values feed the SMART_TODO_* config overrides.
    let _ = dotenvy::dotenv();

    match smart_todo::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
