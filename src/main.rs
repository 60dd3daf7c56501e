use catalog_report::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - output has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Print the full cause chain to stderr
            eprintln!("Error: {:#}", anyhow::Error::new(error));
            process::exit(1);
        }
    }
}
