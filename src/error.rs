//! Global error handling for projdump
//!
//! Only run-level failures live here: a missing root or an unusable output
//! path aborts the dump. Per-file read problems are not errors at all, they
//! are converted into [`crate::types::FileContent::Unreadable`] and rendered
//! as a placeholder in the output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors for projdump operations
#[derive(Error, Debug)]
pub enum DumpError {
    /// Root directory does not exist
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("root path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Parent directory of the output file does not exist
    #[error("output directory not found: {}", .0.display())]
    OutputDirNotFound(PathBuf),

    /// Output file could not be created or truncated
    #[error("cannot create output file {}: {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Other file system errors at the run level
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for projdump operations
pub type Result<T> = std::result::Result<T, DumpError>;

// Allow converting DumpError to io::Error for use with io-flavored tests
impl From<DumpError> for io::Error {
    fn from(err: DumpError) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
