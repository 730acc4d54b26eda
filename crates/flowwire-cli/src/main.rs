//! Flowwire CLI - Draw flowchart connector overlays from layout snapshots

mod cli;

use clap::Parser;

fn main() {
    // Logging is initialized in run() once the CLI flags are known
    let cli_args = cli::Cli::parse();

    let mut app = cli::FlowwireApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
