use mmp::Result;

use std::{fs, path::PathBuf};

use anyhow::Context;

use clap::Parser;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Process M-PESA transaction messages
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Input file containing M-PESA messages (one per line)
    pub input: PathBuf,

    /// Output file for processed transactions (JSON format)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Generate and include summary statistics
    #[arg(long)]
    pub summary: bool,

    /// Log every processing step to stderr
    #[arg(long)]
    pub verbose: bool,
}

/// Parses the input arguments, requiring the input file to exist
pub fn parse_input_args() -> Result<Args> {
    let mut args = Args::parse();

    args.input = fs::canonicalize(&args.input)
        .with_context(|| InputArgsError::FileNotFound(args.input.display().to_string()))?;

    return Ok(args);
}
