//! The `shelf` binary.

use clap::Parser;

use shelf_cli::Cli;

fn main() {
    let cli = Cli::parse();

    println!("Starting the Book Library System...");

    if let Err(err) = shelf_cli::run(&cli) {
        tracing::error!(error = %format!("{err:#}"), "shelf stopped");
        eprintln!("{}", shelf_cli::STARTUP_FAILURE);
    }
}
