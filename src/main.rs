//! brandkit - NeuroBreath brand asset generator.
//!
//! Usage:
//!   brandkit favicon --logo assets/nb-mark.png --out public
//!   brandkit og --title "ADHD breathing toolkit"
//!   brandkit all --auto-crop --optimize

use std::process::ExitCode;

fn main() -> ExitCode {
    match nb_brandkit::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");

            // Print chain of errors
            let mut source = std::error::Error::source(&*e);
            while let Some(cause) = source {
                eprintln!("  Caused by: {cause}");
                source = std::error::Error::source(cause);
            }

            ExitCode::FAILURE
        }
    }
}
