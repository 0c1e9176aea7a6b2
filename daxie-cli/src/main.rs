//! Command-line entry point for daxie
//!
//! Reads amounts out of free text and writes amounts as Chinese uppercase
//! numerals.

use anyhow::Result;
use clap::Parser;
use std::env;
use std::process;

use daxie_cli::{Cli, Dispatcher, Session};

fn main() -> Result<()> {
    // Logging flags must reach RUST_LOG before the logger starts
    handle_debug_options();
    env_logger::init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Create session with configuration
    let session = match Session::new(&cli) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error initializing session: {:#}", e);
            process::exit(1);
        }
    };

    let mut dispatcher = Dispatcher::new(session);

    match dispatcher.execute(&cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);

            // Show error chain if in verbose mode
            if cli.verbose {
                for cause in e.chain().skip(1) {
                    eprintln!("Caused by: {}", cause);
                }
            }

            process::exit(1);
        }
    }
}

/// Handle early debug options that affect environment setup
fn handle_debug_options() {
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--debug" => env::set_var("RUST_LOG", "debug"),
            "--trace" => env::set_var("RUST_LOG", "trace"),
            _ => {}
        }
    }
}
