use std::{fmt, str::FromStr};
use thiserror::Error;

/// The formatting violations reported by the lint step of the CI job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCode {
    Whitespace,
    FinalNewline,
    Charset,
    Imports,
}

impl ErrorCode {
    /// Every known code, in the order reports list them.
    pub const ALL: [ErrorCode; 4] =
        [ErrorCode::Whitespace, ErrorCode::FinalNewline, ErrorCode::Charset, ErrorCode::Imports];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Whitespace => "WHITESPACE",
            ErrorCode::FinalNewline => "FINALNEWLINE",
            ErrorCode::Charset => "CHARSET",
            ErrorCode::Imports => "IMPORTS",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width specifiers like `{:12}` work in reports
        f.pad(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown lint error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL.iter().copied().find(|code| code.as_str() == s).ok_or_else(|| UnknownErrorCode(s.to_owned()))
    }
}

/// One violation line pulled out of the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Path exactly as the log printed it, separators untouched.
    pub file_path: String,
    /// Final path segment, whichever separator the log used.
    pub simple_name: String,
    pub line: u32,
    pub column: u32,
    pub code: ErrorCode,
    pub message: String,
}

impl LogEntry {
    pub fn new(file_path: impl Into<String>, line: u32, column: u32, code: ErrorCode, message: impl Into<String>) -> Self {
        let file_path = file_path.into();
        Self {
            simple_name: simple_name(&file_path).to_owned(),
            file_path,
            line,
            column,
            code,
            message: message.into(),
        }
    }
}

/// Strip everything up to the last `\` or `/`.
pub fn simple_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '\\' || c == '/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("FINALNEWLINE".parse::<ErrorCode>(), Ok(ErrorCode::FinalNewline));
        assert_eq!("IMPORTS".parse::<ErrorCode>(), Ok(ErrorCode::Imports));
        assert_eq!("imports".parse::<ErrorCode>(), Err(UnknownErrorCode(String::from("imports"))));
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("[{:9}]", ErrorCode::Charset), "[CHARSET  ]");
    }

    #[test]
    fn test_simple_name_either_separator() {
        assert_eq!(simple_name(r"D:\a\X\Y\Foo.cs"), "Foo.cs");
        assert_eq!(simple_name("/home/runner/work/X/Bar.cs"), "Bar.cs");
        assert_eq!(simple_name("Baz.cs"), "Baz.cs");
        assert_eq!(simple_name(r"mixed/dir\Qux.cs"), "Qux.cs");
    }
}
