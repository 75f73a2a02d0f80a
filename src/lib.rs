/*!
 * projdump - Flatten a project directory into a single annotated text dump
 *
 * Walks a directory tree, skipping hidden and denylisted entries, and
 * concatenates every remaining file into one text file with a
 * `===== FILE: <path> =====` header per entry. Intended for snapshotting a
 * codebase for review, sharing, or LLM context.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{DumpError, Result};
pub use report::{DumpReport, FileReportInfo, ReportFormat, Reporter};
pub use scanner::{should_descend, should_emit_file, ScanStats, Scanner};
pub use types::FileContent;
pub use utils::{count_files, format_file_size, DEFAULT_SKIP_DIRS};
pub use writer::{DumpWriter, PLACEHOLDER};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
