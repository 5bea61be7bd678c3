mod cli;
mod commands;
mod input;
mod presenter;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they stay out of the form output
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gradebook=warn,gradebook_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Some(Command::Init {
            ref output,
            preset,
            force,
        }) => commands::init::run(output, preset, force),
        None => commands::session::run(&args),
    }
}
