/*!
 * Directory traversal for projdump
 *
 * The scanner walks the root with `walkdir`, prunes skipped and hidden
 * subtrees before descending into them, and streams every surviving file
 * into the dump writer in deterministic (name-sorted) order.
 */

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path};
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::report::FileReportInfo;
use crate::types::FileContent;
use crate::writer::DumpWriter;

/// Marker for hidden path segments
pub const HIDDEN_MARKER: char = '.';

/// Whether a path segment is hidden
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Whether the walker may enter a directory (or visit a file) with this
/// basename. Pruning happens here, before recursion, so skipped subtrees are
/// never read at all.
pub fn should_descend(name: &str, skip_dirs: &HashSet<String>) -> bool {
    !is_hidden(name) && !skip_dirs.contains(name)
}

/// Whether a file that survived pruning should actually be emitted.
///
/// Re-checks every path segment below the root against the skip set and the
/// hidden marker, and refuses to dump the output file into itself. The
/// segment re-check is redundant with pruning in the normal case but keeps
/// the invariant local: no emitted path ever contains a skipped segment.
///
/// The root itself is exempt from pruning, but a root whose own basename is
/// in the skip set emits nothing. The hidden marker is not applied to the
/// root: the user named that directory explicitly.
pub fn should_emit_file(path: &Path, config: &Config) -> bool {
    if is_output_file(path, config) {
        return false;
    }

    if let Some(root_name) = config.root.file_name() {
        if config.skip_dirs.contains(root_name.to_string_lossy().as_ref()) {
            return false;
        }
    }

    let rel = path.strip_prefix(&config.root).unwrap_or(path);
    !rel.components().any(|component| match component {
        Component::Normal(segment) => {
            let segment = segment.to_string_lossy();
            is_hidden(&segment) || config.skip_dirs.contains(segment.as_ref())
        }
        _ => false,
    })
}

/// Whether a walked path is the output sink itself.
///
/// Resolved by canonical path, so a file in a subdirectory that merely
/// shares the output's basename is still dumped. The name pre-check keeps
/// the canonicalize syscalls off the common path.
fn is_output_file(path: &Path, config: &Config) -> bool {
    if path.file_name() != config.output_file.file_name() {
        return false;
    }
    match (path.canonicalize(), config.output_file.canonicalize()) {
        (Ok(walked), Ok(output)) => walked == output,
        _ => false,
    }
}

/// Statistics for one completed scan
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Number of entries written to the dump
    pub files_processed: usize,
    /// Entries rendered as the unreadable placeholder
    pub files_unreadable: usize,
    /// Total number of text lines dumped
    pub total_lines: usize,
    /// Total number of text characters dumped
    pub total_chars: usize,
    /// Per-file details, keyed by the path as written in the header
    pub file_details: HashMap<String, FileReportInfo>,
}

impl ScanStats {
    fn record(&mut self, path: &Path, content: &FileContent) {
        self.files_processed += 1;

        let info = match content {
            FileContent::Text(text) => {
                let lines = text.lines().count();
                let chars = text.chars().count();
                self.total_lines += lines;
                self.total_chars += chars;
                FileReportInfo { lines, chars }
            }
            FileContent::Unreadable => {
                self.files_unreadable += 1;
                FileReportInfo::default()
            }
        };

        self.file_details
            .insert(path.to_string_lossy().to_string(), info);
    }
}

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Traverse the root and stream every emitted file into the writer.
    ///
    /// Entries are written in traversal order, header and body together, so
    /// the dump never contains a header without its content. Unreadable
    /// files become placeholder entries and never abort the run.
    pub fn scan(&self, writer: &mut DumpWriter) -> Result<ScanStats> {
        let mut stats = ScanStats::default();

        let walker = WalkDir::new(&self.config.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || should_descend(&e.file_name().to_string_lossy(), &self.config.skip_dirs)
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Unreadable directories are skipped, not fatal
                    eprintln!("Warning: skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if !should_emit_file(entry.path(), &self.config) {
                continue;
            }

            self.progress.inc(1);
            self.progress
                .set_message(format!("Current file: {}", display_name(entry.path())));

            let content = FileContent::read(entry.path());
            writer.write_entry(entry.path(), &content)?;
            stats.record(entry.path(), &content);
        }

        Ok(stats)
    }
}

/// File name for the progress message, truncated on a char boundary to keep
/// the bar on one line
fn display_name(path: &Path) -> String {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    let char_count = name.chars().count();
    if char_count > 40 {
        let tail: String = name.chars().skip(char_count - 37).collect();
        format!("...{}", tail)
    } else {
        name.to_string()
    }
}
