/*!
 * Command-line interface for projdump
 */

use std::fs;
use std::io;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use projdump::config::{Args, Config};
use projdump::report::{DumpReport, ReportFormat, Reporter};
use projdump::scanner::Scanner;
use projdump::utils::count_files;
use projdump::writer::DumpWriter;
use projdump::Result;

fn main() {
    let args = Args::parse();

    // Shell completion generation short-circuits the run
    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "projdump", &mut io::stdout());
        return;
    }

    let config = Config::from_args(args);

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    // Fatal conditions are checked before the output file is touched
    config.validate()?;

    let progress = if config.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(0)
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");
    progress.set_message(format!("📂 Dumping directory: {}", config.root.display()));

    // Pre-count files so the bar has a length
    let total_files = count_files(config);
    progress.set_length(total_files);
    progress.set_prefix("📊 Processing");
    progress.set_message("Starting dump...");

    let mut writer = DumpWriter::create(&config.output_file)?;
    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));

    let start_time = Instant::now();
    let stats = scanner.scan(&mut writer)?;
    writer.finish()?;
    let duration = start_time.elapsed();

    progress.finish_and_clear();

    if !config.quiet {
        let output_size = fs::metadata(&config.output_file).map(|m| m.len()).unwrap_or(0);

        let report = DumpReport {
            output_file: config.output_file.display().to_string(),
            output_size,
            duration,
            files_processed: stats.files_processed,
            files_unreadable: stats.files_unreadable,
            total_lines: stats.total_lines,
            total_chars: stats.total_chars,
            file_details: stats.file_details,
        };

        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        reporter.print_report(&report);
    }

    Ok(())
}
