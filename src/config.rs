/*!
 * Configuration handling for projdump
 */

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{DumpError, Result};
use crate::utils::DEFAULT_SKIP_DIRS;

/// Command-line arguments for projdump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "projdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flatten a project directory into a single annotated text dump",
    long_about = "Walks a directory tree and concatenates every non-hidden, non-skipped \
file into one text file, each preceded by a '===== FILE: <path> =====' header. Useful \
for snapshotting a codebase for review, sharing, or LLM context."
)]
pub struct Args {
    /// Root directory to dump
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output file name
    #[clap(default_value = "project_dump.txt")]
    pub output_file: String,

    /// Comma-separated list of extra directory/file basenames to skip
    #[clap(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Do not seed the skip set with the built-in defaults
    #[clap(long)]
    pub no_default_skips: bool,

    /// Suppress the progress bar and the post-run report
    #[clap(long, short)]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to traverse
    pub root: PathBuf,

    /// Destination of the dump
    pub output_file: PathBuf,

    /// Basenames never traversed or emitted (exact, case-sensitive)
    pub skip_dirs: HashSet<String>,

    /// Suppress progress and report output
    pub quiet: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut skip_dirs: HashSet<String> = if args.no_default_skips {
            HashSet::new()
        } else {
            DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect()
        };
        skip_dirs.extend(args.skip.into_iter().filter(|s| !s.is_empty()));

        Self {
            root: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output_file),
            skip_dirs,
            quiet: args.quiet,
        }
    }

    /// Validate the configuration
    ///
    /// Fatal conditions are checked before anything is written so that a bad
    /// root never leaves a truncated output file behind.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(DumpError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(DumpError::NotADirectory(self.root.clone()));
        }

        if let Some(parent) = self.output_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(DumpError::OutputDirNotFound(parent.to_path_buf()));
            }
        }

        Ok(())
    }
}
