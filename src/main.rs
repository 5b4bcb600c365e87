#![allow(clippy::uninlined_format_args)]

mod args;
mod commands;
mod constants;
mod error;
mod fs;
mod hashing;
mod object;
mod utils;

use clap::Parser;
pub use constants::Constants;
pub use error::{Error, Result};

fn main() {
    env_logger::init();

    let args = args::Args::parse();

    match commands::execute_command(&args.command) {
        Ok(message) => {
            if !message.is_empty() {
                println!("{}", message)
            }
        }
        Err(error) => eprintln!("{:?}", error),
    }
}
