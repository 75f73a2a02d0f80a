/*!
 * Reporting functionality for projdump
 *
 * Renders a post-run console summary of the dump using the tabled library.
 */

use std::collections::HashMap;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Information about a file in the report
#[derive(Debug, Clone, Default)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Statistics for a completed dump
#[derive(Debug, Clone)]
pub struct DumpReport {
    /// Output file path
    pub output_file: String,
    /// Size of the output file in bytes
    pub output_size: u64,
    /// Time taken for the whole run
    pub duration: Duration,
    /// Number of entries written
    pub files_processed: usize,
    /// Entries replaced by the unreadable placeholder
    pub files_unreadable: usize,
    /// Total number of lines dumped
    pub total_lines: usize,
    /// Total number of characters dumped
    pub total_chars: usize,
    /// Details for each file
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for dump results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on dump statistics
    pub fn generate_report(&self, report: &DumpReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &DumpReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Truncate a path for display, keeping the trailing segments
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.len() <= max_len {
            return path.to_string();
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() <= 2 {
            return format!("...{}", &path[path.len().saturating_sub(max_len - 3)..]);
        }

        let mut segments = Vec::new();
        let mut current_len = 3; // "..."
        for part in parts.iter().rev() {
            let part_len = part.len() + 1; // +1 for '/'
            if current_len + part_len <= max_len {
                segments.push(*part);
                current_len += part_len;
            } else {
                break;
            }
        }

        let mut result = String::from("...");
        for part in segments.iter().rev() {
            result.push('/');
            result.push_str(part);
        }
        result
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &DumpReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "💾 Dump Size".to_string(),
                value: format_file_size(report.output_size),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Dumped".to_string(),
                value: self.format_number(report.files_processed),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines),
            },
            SummaryRow {
                key: "🔤 Total Characters".to_string(),
                value: self.format_number(report.total_chars),
            },
        ];

        if report.files_unreadable > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Binary/Unreadable".to_string(),
                value: self.format_number(report.files_unreadable),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a files table using the tabled crate
    fn create_files_table(&self, report: &DumpReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Chars")]
            chars: String,
        }

        // Sort files by character count, largest first
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.chars.cmp(&a.chars));

        let files_to_show = if report.file_details.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                chars: self.format_number(info.chars),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &DumpReport) -> String {
        let summary_table = self.create_summary_table(report);
        let files_table = self.create_files_table(report);

        let summary_title = "✅  DUMP COMPLETE";
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT"
        } else {
            "📋  DUMPED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}
