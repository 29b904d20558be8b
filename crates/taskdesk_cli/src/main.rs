//! CLI probe entry point.
//!
//! # Responsibility
//! - Verify `taskdesk_core` linkage with a deterministic version line.
//! - Print the per-column statistics summary for a delimited text file.

use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let command = args.next();

    match command.as_deref() {
        Some("stats") => {
            let Some(path) = args.next() else {
                eprintln!("usage: taskdesk stats <file.csv>");
                return ExitCode::FAILURE;
            };
            match taskdesk_core::load_dataset(&path) {
                Ok(dataset) => {
                    print!("{}", taskdesk_core::render_summary(&dataset));
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("failed to load `{path}`: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        _ => {
            println!("taskdesk_core version={}", taskdesk_core::core_version());
            ExitCode::SUCCESS
        }
    }
}
