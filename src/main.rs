//! Compound interest calculator CLI
//!
//! Reads the projection parameters from the command line, runs the
//! year-by-year simulation and prints the result in the selected
//! output format.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid amount, rate, frequency, duration, ...)

use clap::Parser;
use compound::cli::{run, CliArgs};
use std::process;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
