mod cli;
mod config;
mod error;
mod favicon;
mod img;
mod manifest;
mod png;

use clap::Parser;
use cli::Cli;
use env_logger::Env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    Cli::parse().run()
}
