/*!
 * Core types for the projdump application
 */

use std::fs;
use std::path::Path;

/// Outcome of reading one file for the dump.
///
/// Read failures are a normal part of a run, not errors: binary bytes,
/// permission problems and files that vanish mid-walk all collapse into
/// `Unreadable` and are rendered as a placeholder by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Valid UTF-8 text
    Text(String),
    /// Binary, undecodable, or unreadable
    Unreadable,
}

impl FileContent {
    /// Read a file as UTF-8, folding every failure into `Unreadable`
    pub fn read(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::Text(text),
            Err(_) => Self::Unreadable,
        }
    }
}
