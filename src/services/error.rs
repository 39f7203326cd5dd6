use camino::Utf8PathBuf;
use std::io;
use thiserror::Error;

/// Errors that abort a recolor run
#[derive(Error, Debug)]
pub enum RecolorError {
    #[error("Failed to scan directory {dir}")]
    Scan {
        dir: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Replacement rule has an empty pattern")]
    EmptyPattern,

    #[error("Pattern {0} is configured more than once")]
    DuplicatePattern(String),

    #[error("Failed to compile token matcher")]
    Matcher(#[source] regex::Error),

    #[error("Failed to write report: {0}")]
    Report(#[from] io::Error),
}
