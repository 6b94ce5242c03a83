use crate::constants::{COMMIT, VERSION};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// Generate images with text and AI :)
///
/// AIImg can be used to generate images from text using OpenAI's
/// images API endpoint.
#[derive(Debug, Default, Parser)]
#[command(name = "aiimg", disable_version_flag = true)]
pub struct Cli {
    /// config file (default is $HOME/.aiimg.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// describe what to generate
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// size of the image to generate (default 512x512)
    #[arg(short, long)]
    pub size: Option<String>,

    /// the file to output (default img.png)
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,

    /// version information
    #[arg(short, long)]
    pub version: bool,
}

pub fn print_version() {
    println!("{} {}", "Version:".bold(), VERSION);
    println!("{} {}", "Commit:".bold(), COMMIT);
}
