use anyhow::Result;
use lintlog::{
    report::{self, DetailOptions},
    Analysis,
};
use log::info;
use std::{io, path::PathBuf};
use structopt::StructOpt;

/// Summary of a CI format check log, followed by the worst files of each category.
#[derive(StructOpt)]
struct Options {
    #[structopt(short, long, parse(from_os_str), env = "LINT_LOG_FILE")]
    input: Option<PathBuf>,
    #[structopt(short, long, default_value = "10")]
    top: usize,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let options = Options::from_args();

    let log_text = lintlog::read_log(options.input.as_deref())?;
    let analysis = Analysis::parse(&log_text);
    info!("{} errors in {} files", analysis.total_errors(), analysis.files.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_summary_report(&mut out, &analysis, options.top)?;
    report::write_detailed_report(&mut out, &analysis, &DetailOptions::default())?;
    report::write_fix_suggestions(&mut out)?;
    Ok(())
}
