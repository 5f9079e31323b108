use anyhow::Result;
use lintlog::probe::{self, IndexLocation};
use log::error;
use std::{io, path::PathBuf};
use structopt::StructOpt;

/// Write and delete a scratch file in the search index directory to check permissions.
#[derive(StructOpt)]
struct Options {
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
                error!("{}", err);
                println!("❌ resolve index path: {}", err);
                return Ok(());
            }
        },
    };

    println!("=== Index write access probe ===");
    let report = probe::probe_write_access(&location);
    report.write_to(&mut io::stdout().lock())?;
    if report.failures() > 0 {
        println!("Some checks failed; see above.");
    }
    println!("=== End probe ===");
    Ok(())
}
