mod cli;
mod config;
mod constants;
mod error;
mod images;
mod utils;

use crate::cli::Cli;
use crate::config::ConfigSources;
use crate::utils::{process_command, RunOutcome};
use clap::Parser;
use colored::Colorize;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let sources = ConfigSources::from_process();

    match process_command(&cli, &sources, std::future::pending()).await {
        Ok(RunOutcome::Written(path)) => log::info!("image saved to {}", path.display()),
        Ok(RunOutcome::Version) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
