//! Binary entrypoint for the `visual-file` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    visual_file::logging::init();

    // Recording is handled in commands::dispatch via VISUAL_FILE_RECORD=<dir>.
    match visual_file::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
