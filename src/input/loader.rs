//! Input loading
//!
//! Reads the whole byte stream into memory before parsing begins. The
//! parser checks its consumed-byte count against the total input length,
//! so buffering fully up front keeps that length known even for stdin.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvInfoError;

/// Read a file into memory as raw bytes.
///
/// No decoding and no validation happen here; the tokenizer operates on
/// raw bytes.
pub fn load_file(path: &Path) -> Result<Vec<u8>, CsvInfoError> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Read standard input to end as raw bytes.
pub fn load_stdin() -> Result<Vec<u8>, CsvInfoError> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
