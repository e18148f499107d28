//! Error types for the expansion run
//!
//! Every error here is fatal: expansion halts at the first failure and the
//! error propagates up through every enclosing recursive call. The partially
//! written sink is left as-is; discarding it is the caller's job.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of a flattening run.
#[derive(Debug, Error)]
pub enum FlattenError {
    /// The input file could not be opened or read.
    #[error("failed to open input file {}: {source}", path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output sink could not be opened for appending, or a write failed.
    #[error("failed to open output file {}: {source}", path.display())]
    UnwritableOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An include directive named a file that exists in no candidate location.
    ///
    /// `line` is 1-based and local to `file` (counting restarts for every
    /// file entered during the expansion).
    #[error("unknown include file {name} at file {} at line {line}", file.display())]
    UnresolvedInclude {
        name: String,
        file: PathBuf,
        line: usize,
    },
}

impl FlattenError {
    /// True when the underlying cause is a missing file rather than e.g. a
    /// permission problem.
    pub fn is_not_found(&self) -> bool {
        match self {
            FlattenError::UnreadableInput { source, .. }
            | FlattenError::UnwritableOutput { source, .. } => {
                source.kind() == io::ErrorKind::NotFound
            }
            FlattenError::UnresolvedInclude { .. } => false,
        }
    }
}
