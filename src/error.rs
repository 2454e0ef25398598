use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for wordgen
#[derive(Error, Debug)]
pub enum WordGenError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reference file error: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Category index error: {0}")]
    Index(#[from] IndexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to the reference file
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Failed to read reference file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error(
        "Malformed reference file {path}: {lines} line(s), expected an even number of label/fragment pairs"
    )]
    OddLineCount { path: PathBuf, lines: usize },
}

/// Errors related to category index validation
#[derive(Error, Debug)]
pub enum IndexError {
    #[error(
        "Invalid category index [{index}]: the reference file defines {categories} categories. Check available indices with the `categories` command."
    )]
    OutOfRange { index: i64, categories: usize },
}

pub type Result<T> = std::result::Result<T, WordGenError>;
