//! course-enroll CLI
//!
//! Interactive course registration form in the terminal.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

#[derive(Parser)]
#[command(name = "course-enroll")]
#[command(about = "Register for a course from your terminal")]
#[command(version)]
struct Cli {
    /// Simulated submission latency in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match course_enroll::tui::run(Duration::from_millis(cli.delay_ms)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
