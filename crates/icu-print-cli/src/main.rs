#![forbid(unsafe_code)]

mod cli;
mod command_format;
mod command_print;
mod config;
mod error;
mod logging;
mod output;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
