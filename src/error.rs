// Errors raised around the patch engine.
//
// The engine itself is total; everything here is detected before it runs
// (input and address checks) or after it returns (size and match checks).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    /// No input file at the given path.
    #[error("input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// Replacement address is empty after trimming.
    #[error("no server address given")]
    MissingAddress,

    #[error("server address too long: max {max} characters (got {actual})")]
    AddressTooLong { max: usize, actual: usize },

    /// Address does not fit over a shorter hostname present in the input.
    #[error("server address too long for {hostname}: max {max} characters (got {actual})")]
    AddressTooLongForHost {
        hostname: &'static str,
        max: usize,
        actual: usize,
    },

    /// Address contains a character outside printable ASCII.
    #[error("server address contains invalid character {ch:?}")]
    InvalidAddress { ch: char },

    /// No known hostname occurs in the input.
    #[error("no target domains found; is this an original GG executable?")]
    NoMatchesFound,

    /// Output length differs from input length. The output is discarded.
    #[error("patched size {actual} differs from original size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output file exists, use -f to overwrite: {}", path.display())]
    OutputExists { path: PathBuf },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
