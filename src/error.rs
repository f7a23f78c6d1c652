use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a catalog. No partial list is ever returned.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Cannot read catalog {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `record` is the zero-based position of the offending entry, or
    /// `None` when the document itself is broken.
    #[error("Malformed catalog{}: {reason}", at_record(.record))]
    Malformed {
        record: Option<usize>,
        reason: String,
    },
}

fn at_record(record: &Option<usize>) -> String {
    match record {
        Some(index) => format!(" (record {})", index),
        None => String::new(),
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    #[error("Index {index} out of range for list of {len} movies")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Could not determine cache directory")]
    CacheDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Decode(#[from] image::ImageError),
}
