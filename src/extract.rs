use crate::entry::{ErrorCode, LogEntry};
use lazy_static::lazy_static;
use log::debug;
use regex::{Captures, Regex};

lazy_static! {
    /// `<path>.cs(<line>,<col>): error <CODE>: <message>`, with an optional drive letter on the path.
    static ref VIOLATION_REGEX: Regex =
        Regex::new(r"((?:[A-Za-z]:)?[^:]+\.cs)\((\d+),(\d+)\): error (WHITESPACE|FINALNEWLINE|CHARSET|IMPORTS): (.+)")
            .unwrap();
}

/// Pull every violation out of a block of log text, one per matching line, in input order.
pub fn extract(log_text: &str) -> Vec<LogEntry> {
    log_text.lines().filter_map(parse_line).collect()
}

/// Parse a single log line. Lines that are not lint violations give `None`.
pub fn parse_line(line: &str) -> Option<LogEntry> {
    let captures = VIOLATION_REGEX.captures(line)?;
    let entry = entry_from_captures(&captures);
    if entry.is_none() {
        debug!("skipping line with unusable position: {}", line);
    }
    entry
}

fn entry_from_captures(captures: &Captures) -> Option<LogEntry> {
    // The digits can still overflow, so these parses are fallible
    let line = captures[2].parse().ok()?;
    let column = captures[3].parse().ok()?;
    let code: ErrorCode = captures[4].parse().ok()?;
    Some(LogEntry::new(captures[1].trim(), line, column, code, &captures[5]))
}
