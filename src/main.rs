use std::process::ExitCode;

use balloon_fest::{TrackingAllocator, cli};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
