use anyhow::Result;
use lintlog::{
    report::{self, ReportOptions},
    Analysis,
};
use log::info;
use std::{io, path::PathBuf};
use structopt::StructOpt;

/// Categorised report of the formatting errors in a CI format check log.
#[derive(StructOpt)]
struct Options {
    /// Log file to analyse. The embedded sample log is used when omitted.
    #[structopt(short, long, parse(from_os_str), env = "LINT_LOG_FILE")]
    input: Option<PathBuf>,
    /// How many files to list in the worst-files section
    #[structopt(short, long, default_value = "10")]
    top: usize,
    #[structopt(long, default_value = "TelegramSearchBot")]
    project: String,
}

fn main() -> Result<()> {
    // Load from .env file if it is present
    dotenv::dotenv().ok();
    // Initialize logging
    env_logger::init();
    // Get command line arguments
    let options = Options::from_args();

    let log_text = lintlog::read_log(options.input.as_deref())?;
    let analysis = Analysis::parse(&log_text);
    info!("{} errors in {} files", analysis.total_errors(), analysis.files.len());

    let report_options = ReportOptions {
        project: options.project,
        top_files: options.top,
    };
    let stdout = io::stdout();
    report::write_category_report(&mut stdout.lock(), &analysis, &report_options)?;
    Ok(())
}
