use std::{io, path::PathBuf};
use thiserror::Error;

/// Rejected user input, from either a prompt or a flag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid number.")]
    InvalidCount,
    #[error("Wallet count {0} is too large.")]
    CountOverflow(String),
    #[error("Invalid input! Enter numbers 0-7 separated by commas.")]
    InvalidSelection,
}

/// A single append or truncate that did not reach the disk.
#[derive(Debug, Error)]
#[error("Failed to save data to {}: {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl WriteError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self { path: path.into(), source }
    }
}
