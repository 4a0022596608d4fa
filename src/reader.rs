use mmp::Result;

use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

use anyhow::Context;

pub fn build_message_reader(filepath: &Path) -> Result<BufReader<File>> {
    let file = File::open(filepath)
        .with_context(|| format!("Couldn't open message file: {}", filepath.display()))?;

    return Ok(BufReader::new(file));
}
