/*!
 * Utility functions for projdump
 */

use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::config::Config;
use crate::scanner::{should_descend, should_emit_file};

/// Count the files a scan would emit, for progress tracking.
///
/// Applies the same pruning and per-file rules as the scanner so the progress
/// bar length matches the number of entries actually written.
pub fn count_files(config: &Config) -> u64 {
    let mut count = 0;

    let walker = WalkDir::new(&config.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || should_descend(&e.file_name().to_string_lossy(), &config.skip_dirs)
        });

    for entry in walker.filter_map(|e| e.ok()) {
        if entry.file_type().is_file() && should_emit_file(entry.path(), config) {
            count += 1;
        }
    }

    count
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Default basenames to skip.
///
/// Build artifacts, version-control metadata and editor caches. The list is
/// part of the output contract: changing it changes which entries a default
/// run emits.
pub static DEFAULT_SKIP_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Dependencies & build output
        "node_modules",
        "dist",
        "build",
        "out",
        "coverage",
        // Caches & temp
        "tmp",
        "temp",
        "__pycache__",
        ".cache",
        // Version control
        ".git",
        // IDEs & editors
        ".idea",
        ".vscode",
        ".cursor",
        ".angular",
        ".husky",
    ]
});
