use std::path::PathBuf;

/// Errors raised while reading records, building the relation or counting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no sequences found in input")]
    EmptyInput,

    #[error("item {item} lists successor {successor}, but only {len} items exist")]
    InvalidRelation {
        item: usize,
        successor: usize,
        len: usize,
    },

    #[error("must-precede relation has a cycle through item {item}")]
    CyclicRelation { item: usize },

    #[error("modulus must be at least 1")]
    InvalidModulus,

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
