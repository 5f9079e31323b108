use crate::{
    analysis::{Analysis, ErrorTally, FileErrors},
    entry::ErrorCode,
};
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;

/// Knobs for the category report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub project: String,
    pub top_files: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            project: String::from("TelegramSearchBot"),
            top_files: 10,
        }
    }
}

/// Knobs for the per-group detail section of the summary report.
#[derive(Debug, Clone)]
pub struct DetailOptions {
    pub files_per_group: usize,
    pub entries_per_file: usize,
    pub message_width: usize,
}

impl Default for DetailOptions {
    fn default() -> Self {
        Self {
            files_per_group: 5,
            entries_per_file: 3,
            message_width: 50,
        }
    }
}

/// Full report: totals, code distribution, categories, worst files, one example per code and fix advice.
pub fn write_category_report(out: &mut impl Write, analysis: &Analysis, options: &ReportOptions) -> io::Result<()> {
    let total = analysis.total_errors();

    writeln!(out, "🔍 {} formatting error report", options.project)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    writeln!(out, "\n📊 Basic statistics:")?;
    writeln!(out, "   Total errors:   {}", total)?;
    writeln!(out, "   Affected files: {}", analysis.files.len())?;
    writeln!(out, "   Project:        {}", options.project)?;

    writeln!(out, "\n🚨 Error code distribution:")?;
    for (code, count) in analysis.tally.most_common() {
        writeln!(out, "   {:<12}: {:3} errors ({:5.1}%)", code, count, percentage(count, total))?;
    }

    writeln!(out, "\n📂 Affected file categories:")?;
    for (category, files, errors) in analysis.category_totals() {
        writeln!(out, "   {:<12}: {:2} files, {:3} errors", category, files, errors)?;
    }

    writeln!(out, "\n🔥 Files with the most errors (top {}):", options.top_files)?;
    for (rank, file) in analysis.files.top_files(options.top_files).into_iter().enumerate() {
        writeln!(
            out,
            "   {:2}. {:<35}: {:2} errors ({})",
            rank + 1,
            file.name,
            file.len(),
            format_breakdown(&file.breakdown())
        )?;
    }

    writeln!(out, "\n💡 Examples:")?;
    for code in ErrorCode::ALL {
        if let Some(example) = analysis.first_example(code) {
            writeln!(out, "   {} example:", code)?;
            writeln!(out, "   - File:     {}", example.simple_name)?;
            writeln!(out, "   - Position: line {}, column {}", example.line, example.column)?;
            writeln!(out, "   - Message:  {}", example.message)?;
        }
    }

    write_fix_suggestions(out)?;
    write_fix_priorities(out)
}

/// Short summary: totals, code distribution, worst files and how many files each code touches.
pub fn write_summary_report(out: &mut impl Write, analysis: &Analysis, top_files: usize) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "Formatting error summary")?;
    writeln!(out, "{}", "=".repeat(60))?;

    writeln!(out, "\n📊 Overall:")?;
    writeln!(out, "  - Total errors: {}", analysis.total_errors())?;
    writeln!(out, "  - Affected files: {}", analysis.files.len())?;

    writeln!(out, "\n🔍 Error codes:")?;
    for (code, count) in analysis.tally.most_common() {
        writeln!(out, "  - {}: {} errors", code, count)?;
    }

    writeln!(out, "\n🚨 Files with the most errors (top {}):", top_files)?;
    for (rank, file) in analysis.files.top_files(top_files).into_iter().enumerate() {
        writeln!(out, "  {:2}. {}: {} errors", rank + 1, file.name, file.len())?;
        writeln!(out, "      ({})", format_breakdown(&file.breakdown()))?;
    }

    writeln!(out, "\n📂 Files per error code:")?;
    for (code, _) in analysis.tally.iter() {
        writeln!(out, "  - {}: {} files", code, analysis.files_with_code(code))?;
    }
    Ok(())
}

/// Files grouped by category, with the first few entries of the worst files in each group.
pub fn write_detailed_report(out: &mut impl Write, analysis: &Analysis, options: &DetailOptions) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "Detailed error report")?;
    writeln!(out, "{}", "=".repeat(60))?;

    for (category, mut files) in analysis.files_by_first_category() {
        writeln!(out, "\n📁 {} ({} files):", category, files.len())?;
        files.sort_by(|a, b| b.len().cmp(&a.len()));
        for file in files.into_iter().take(options.files_per_group) {
            write_file_detail(out, file, options)?;
        }
    }
    Ok(())
}

fn write_file_detail(out: &mut impl Write, file: &FileErrors, options: &DetailOptions) -> io::Result<()> {
    writeln!(out, "  - {}: {} errors", file.name, file.len())?;
    for entry in file.entries.iter().take(options.entries_per_file) {
        writeln!(
            out,
            "    line {}: {} - {}...",
            entry.line,
            entry.code,
            truncate(&entry.message, options.message_width)
        )?;
    }
    if file.len() > options.entries_per_file {
        writeln!(out, "    ... and {} more", file.len() - options.entries_per_file)?;
    }
    Ok(())
}

pub fn write_fix_suggestions(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n🛠️  Suggested fixes:")?;
    writeln!(out, "   1. Right now:")?;
    writeln!(out, "      dotnet format                     # fixes most problems automatically")?;
    writeln!(out, "      dotnet format --verify-no-changes # confirms nothing is left")?;
    writeln!(out, "   2. Editor configuration:")?;
    writeln!(out, "      - save files as UTF-8")?;
    writeln!(out, "      - use consistent indentation")?;
    writeln!(out, "      - insert a final newline on save")?;
    writeln!(out, "      - sort usings automatically")?;
    writeln!(out, "   3. Prevention:")?;
    writeln!(out, "      - run the format check in a git pre-commit hook")?;
    writeln!(out, "      - keep the format check step in CI")?;
    writeln!(out, "      - share one editor configuration across the team")
}

pub fn write_fix_priorities(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n⚡ Fix priority:")?;
    writeln!(out, "   🔴 High:   CHARSET and FINALNEWLINE (easy to fix)")?;
    writeln!(out, "   🟡 Medium: IMPORTS (tooling can fix these)")?;
    writeln!(out, "   🟠 Low:    WHITESPACE (may need manual adjustment)")
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// `CODE:count` pairs in first-seen order.
fn format_breakdown(tally: &ErrorTally) -> String {
    tally.iter().map(|(code, count)| format!("{}:{}", code, count)).collect::<Vec<_>>().join(", ")
}

/// First `width` characters of `message`, never splitting a character.
fn truncate(message: &str, width: usize) -> &str {
    match message.char_indices().nth(width) {
        Some((end, _)) => &message[..end],
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SAMPLE_LOG;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_category_report_sample() {
        let analysis = Analysis::parse(SAMPLE_LOG);
        let report = render(|out| write_category_report(out, &analysis, &ReportOptions::default()));
        assert!(report.contains("   Total errors:   25\n"));
        assert!(report.contains("   Affected files: 14\n"));
        assert!(report.contains("   WHITESPACE  :  10 errors ( 40.0%)\n"));
        assert!(report.contains("   FINALNEWLINE:   5 errors ( 20.0%)\n"));
        assert!(report.contains("   Bootstrap   :  6 files,  10 errors\n"));
        assert!(report.contains("    1. VectorPerformanceTests.cs          :  5 errors (WHITESPACE:5)\n"));
        assert!(report.contains("   - Position: line 200, column 74\n"));
        assert!(report.contains("   - File:     AppBootstrap.cs\n"));
    }

    #[test]
    fn test_category_report_empty() {
        let analysis = Analysis::parse("");
        let report = render(|out| write_category_report(out, &analysis, &ReportOptions::default()));
        assert!(report.contains("   Total errors:   0\n"));
        assert!(report.contains("   Affected files: 0\n"));
        assert!(!report.contains("example:"));
    }

    #[test]
    fn test_top_files_limit() {
        let analysis = Analysis::parse(SAMPLE_LOG);
        let options = ReportOptions {
            top_files: 2,
            ..ReportOptions::default()
        };
        let report = render(|out| write_category_report(out, &analysis, &options));
        assert!(report.contains("    2. VectorSearchIntegrationTests.cs"));
        assert!(!report.contains("    3. "));
    }

    #[test]
    fn test_summary_report() {
        let analysis = Analysis::parse(SAMPLE_LOG);
        let report = render(|out| write_summary_report(out, &analysis, 10));
        assert!(report.contains("  - Total errors: 25\n"));
        assert!(report.contains("  - WHITESPACE: 10 errors\n"));
        assert!(report.contains("   1. VectorPerformanceTests.cs: 5 errors\n      (WHITESPACE:5)\n"));
        assert!(report.contains("      (CHARSET:1, IMPORTS:1)\n"));
        assert!(report.contains("  - CHARSET: 5 files\n"));
    }

    #[test]
    fn test_detailed_report() {
        let analysis = Analysis::parse(SAMPLE_LOG);
        let report = render(|out| write_detailed_report(out, &analysis, &DetailOptions::default()));
        assert!(report.contains("📁 Test files (3 files):\n  - VectorPerformanceTests.cs: 5 errors\n"));
        assert!(report.contains("    line 200: WHITESPACE - Fix whitespace formatting. Replace 10 characters w...\n"));
        assert!(report.contains("    ... and 2 more\n"));
        assert!(report.contains("📁 Bootstrap (6 files):"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("修复文件编码", 2), "修复");
    }
}
