use anyhow::Result;
use lintlog::probe::{self, IndexLocation};
use log::error;
use std::{io, path::PathBuf};
use structopt::StructOpt;

/// Check and create the search index directory for one group, reporting each step.
#[derive(StructOpt)]
struct Options {
    /// Home directory to resolve the index path under. Defaults to the current user's.
    #[structopt(long, parse(from_os_str), env = "PROBE_HOME")]
    home: Option<PathBuf>,
    #[structopt(long, default_value = "TelegramSearchBot")]
    app_name: String,
    #[structopt(long, default_value = "-1001234567890", allow_hyphen_values = true)]
    group_id: i64,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let options = Options::from_args();

    let location = match options.home {
        Some(home) => IndexLocation::new(home, options.app_name, options.group_id),
        None => match IndexLocation::for_current_user(options.app_name, options.group_id) {
            Ok(location) => location,
            Err(err) => {
                // Nothing to probe without a home directory, but this is still not a failure
                error!("{}", err);
                println!("❌ resolve index path: {}", err);
                return Ok(());
            }
        },
    };

    println!("=== Index directory probe ===");
    let report = probe::probe_index_dir(&location);
    report.write_to(&mut io::stdout().lock())?;
    println!("=== End probe ===");
    Ok(())
}
