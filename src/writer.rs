/*!
 * Plain-text dump writer for projdump
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{DumpError, Result};
use crate::types::FileContent;

/// Literal text substituted for content that could not be read as UTF-8
pub const PLACEHOLDER: &str = "[[BINARY OR NON-TEXT FILE]]";

/// Writer owning the output sink for the lifetime of a run.
///
/// Each entry is the wire format of the dump:
///
/// ```text
/// \n\n===== FILE: <path> =====\n\n<contents or placeholder>
/// ```
///
/// concatenated with no trailing separator. The underlying `BufWriter`
/// flushes on drop, so the file is closed on every exit path; `finish`
/// exists to surface flush errors on the happy path.
pub struct DumpWriter {
    inner: BufWriter<File>,
}

impl DumpWriter {
    /// Create (or truncate) the output file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| DumpError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            inner: BufWriter::new(file),
        })
    }

    /// Write one entry: the delimiter header followed by content or placeholder
    pub fn write_entry(&mut self, path: &Path, content: &FileContent) -> Result<()> {
        write!(self.inner, "\n\n===== FILE: {} =====\n\n", path.display())?;

        match content {
            FileContent::Text(text) => self.inner.write_all(text.as_bytes())?,
            FileContent::Unreadable => self.inner.write_all(PLACEHOLDER.as_bytes())?,
        }

        Ok(())
    }

    /// Flush and close the sink
    pub fn finish(mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
