//! Diagnostics for a pull request's CI format check: lint log parsing and reporting,
//! plus probes for the search-index storage directory.

use anyhow::{Context, Result};
use log::debug;
use std::{borrow::Cow, fs, path::Path};

pub mod analysis;
pub mod category;
pub mod entry;
pub mod extract;
pub mod probe;
pub mod report;
pub mod sample;

pub use analysis::{Analysis, CategoryGroups, ErrorTally, FileBucket, FileErrors};
pub use category::{classify, Category};
pub use entry::{ErrorCode, LogEntry, UnknownErrorCode};
pub use extract::extract;

/// Log text to analyse: the given file, or the embedded sample when there is none.
pub fn read_log(path: Option<&Path>) -> Result<Cow<'static, str>> {
    match path {
        Some(path) => {
            debug!("reading log from {}", path.display());
            let text = fs::read_to_string(path).with_context(|| format!("failed to read log file {}", path.display()))?;
            Ok(Cow::Owned(text))
        }
        None => Ok(Cow::Borrowed(sample::SAMPLE_LOG)),
    }
}
