//! b64 — encode or decode a file as base64.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use startserver::b64::{Mode, transform_file};

/// Encode or decode a file as base64
#[derive(Parser)]
#[command(name = "b64", version)]
struct Cli {
    /// Decode the file (default)
    #[arg(short = 'd')]
    decode: bool,

    /// Encode the file
    #[arg(short = 'e')]
    encode: bool,

    /// Output file
    #[arg(short = 'o', required = true)]
    output: PathBuf,

    /// The file to process
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = Mode::from_flags(cli.encode, cli.decode)?;
    transform_file(mode, &cli.file, &cli.output)
}
