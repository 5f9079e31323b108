use crate::{
    category::{classify, Category},
    entry::{ErrorCode, LogEntry},
    extract::extract,
};
use log::debug;
use std::collections::HashMap;

/// Occurrence count per error code. Codes iterate in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTally {
    counts: Vec<(ErrorCode, usize)>,
}

impl ErrorTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, code: ErrorCode) {
        match self.counts.iter_mut().find(|(c, _)| *c == code) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((code, 1)),
        }
    }

    pub fn count(&self, code: ErrorCode) -> usize {
        self.counts.iter().find(|(c, _)| *c == code).map_or(0, |&(_, count)| count)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorCode, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Codes by descending count. Equal counts keep first-seen order.
    pub fn most_common(&self) -> Vec<(ErrorCode, usize)> {
        let mut counts = self.counts.clone();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl<'a> FromIterator<&'a LogEntry> for ErrorTally {
    fn from_iter<I: IntoIterator<Item = &'a LogEntry>>(iter: I) -> Self {
        let mut tally = ErrorTally::new();
        for entry in iter {
            tally.add(entry.code);
        }
        tally
    }
}

/// All entries reported against one simple file name, in log order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileErrors {
    pub name: String,
    pub entries: Vec<LogEntry>,
}

impl FileErrors {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// Per-code counts for this file alone.
    pub fn breakdown(&self) -> ErrorTally {
        self.entries.iter().collect()
    }
}

/// Entries grouped by simple file name. Files keep the order of their first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileBucket {
    files: Vec<FileErrors>,
    index: HashMap<String, usize>,
}

impl FileBucket {
    pub fn push(&mut self, entry: LogEntry) {
        match self.index.get(&entry.simple_name) {
            Some(&i) => self.files[i].entries.push(entry),
            None => {
                self.index.insert(entry.simple_name.clone(), self.files.len());
                self.files.push(FileErrors {
                    name: entry.simple_name.clone(),
                    entries: vec![entry],
                });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FileErrors> {
        self.index.get(name).map(|&i| &self.files[i])
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileErrors> {
        self.files.iter()
    }

    /// The `n` files with the most entries. The sort is stable, so ties stay in first-seen order.
    pub fn top_files(&self, n: usize) -> Vec<&FileErrors> {
        let mut files: Vec<_> = self.files.iter().collect();
        files.sort_by(|a, b| b.len().cmp(&a.len()));
        files.truncate(n);
        files
    }
}

/// Simple file names per category. A name may sit under several categories
/// when its entries came from differently named directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups {
    groups: Vec<(Category, Vec<String>)>,
}

impl CategoryGroups {
    pub fn add(&mut self, category: Category, name: &str) {
        let index = match self.groups.iter().position(|(c, _)| *c == category) {
            Some(index) => index,
            None => {
                self.groups.push((category, Vec::new()));
                self.groups.len() - 1
            }
        };
        let names = &mut self.groups[index].1;
        if !names.iter().any(|n| n == name) {
            names.push(name.to_owned());
        }
    }

    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.groups.iter().find(|(c, _)| *c == category).map(|(_, names)| names.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.groups.iter().map(|(c, names)| (*c, names.as_slice()))
    }
}

/// Everything the reports need, built in one pass over the extracted entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub tally: ErrorTally,
    pub files: FileBucket,
    pub categories: CategoryGroups,
}

impl Analysis {
    /// Extract and aggregate in one go.
    pub fn parse(log_text: &str) -> Self {
        Self::from_entries(extract(log_text))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = LogEntry>) -> Self {
        let mut analysis = Analysis::default();
        for entry in entries {
            analysis.tally.add(entry.code);
            analysis.categories.add(classify(&entry.file_path), &entry.simple_name);
            analysis.files.push(entry);
        }
        debug!("aggregated {} entries across {} files", analysis.tally.total(), analysis.files.len());
        analysis
    }

    pub fn total_errors(&self) -> usize {
        self.tally.total()
    }

    /// First entry with the given code, walking files in first-seen order.
    pub fn first_example(&self, code: ErrorCode) -> Option<&LogEntry> {
        self.files.iter().flat_map(|file| file.entries.iter()).find(|e| e.code == code)
    }

    /// How many files have at least one entry with the given code.
    pub fn files_with_code(&self, code: ErrorCode) -> usize {
        self.files.iter().filter(|file| file.has_code(code)).count()
    }

    /// `(category, file count, error count)` for each category that has files.
    /// The error count covers every entry of each listed file.
    pub fn category_totals(&self) -> Vec<(Category, usize, usize)> {
        self.categories
            .iter()
            .map(|(category, names)| {
                let errors = names.iter().filter_map(|name| self.files.get(name)).map(FileErrors::len).sum();
                (category, names.len(), errors)
            })
            .collect()
    }

    /// Files grouped by the category of their first entry's path. Each file lands in exactly one group.
    /// Uses the full rule list of [`classify`], so bootstrap, handler and similar files get their own
    /// groups rather than falling into `Other`.
    pub fn files_by_first_category(&self) -> Vec<(Category, Vec<&FileErrors>)> {
        let mut groups: Vec<(Category, Vec<&FileErrors>)> = Vec::new();
        for file in self.files.iter() {
            let category = file.entries.first().map_or(Category::Other, |e| classify(&e.file_path));
            match groups.iter_mut().find(|(c, _)| *c == category) {
                Some((_, files)) => files.push(file),
                None => groups.push((category, vec![file])),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SAMPLE_LOG;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn line(path: &str, code: &str) -> String {
        format!("{}(1,1): error {}: message for {}.\n", path, code, code)
    }

    /// 10 WHITESPACE, 4 FINALNEWLINE, 5 CHARSET, 5 IMPORTS.
    fn twenty_four_lines() -> String {
        let mut log = String::new();
        for i in 0..10 {
            log += &line(&format!(r"D:\a\Bot.Test\Service\Tests{}.cs", i % 3), "WHITESPACE");
        }
        for i in 0..4 {
            log += &line(&format!(r"D:\a\Bot\Controller\C{}Controller.cs", i), "FINALNEWLINE");
        }
        for i in 0..5 {
            log += &line(&format!(r"D:\a\Bot\AppBootstrap\B{}.cs", i), "CHARSET");
        }
        for i in 0..5 {
            log += &line(&format!("/src/Bot/AppBootstrap/B{}.cs", i), "IMPORTS");
        }
        log
    }

    #[test]
    fn test_twenty_four_line_tally() {
        let analysis = Analysis::parse(&twenty_four_lines());
        assert_eq!(analysis.total_errors(), 24);
        let counts: HashMap<_, _> = analysis.tally.iter().collect();
        assert_eq!(
            counts,
            hashmap! {
                ErrorCode::Whitespace => 10,
                ErrorCode::FinalNewline => 4,
                ErrorCode::Charset => 5,
                ErrorCode::Imports => 5,
            }
        );
        let most_common = analysis.tally.most_common();
        assert_eq!(most_common[0], (ErrorCode::Whitespace, 10));
        // Tie between CHARSET and IMPORTS keeps first-seen order
        assert_eq!(most_common[1], (ErrorCode::Charset, 5));
        assert_eq!(most_common[2], (ErrorCode::Imports, 5));
        assert_eq!(most_common[3], (ErrorCode::FinalNewline, 4));
    }

    #[test]
    fn test_bucket_matches_tally() {
        let analysis = Analysis::parse(SAMPLE_LOG);
        let bucketed: usize = analysis.files.iter().map(FileErrors::len).sum();
        assert_eq!(bucketed, analysis.tally.total());
        for file in analysis.files.iter() {
            assert!(file.entries.iter().all(|e| e.file_path.ends_with(&file.name)));
        }
    }

    #[test]
    fn test_same_name_from_two_directories() {
        let analysis = Analysis::parse(&twenty_four_lines());
        // B0.cs appears under both a Windows and a Unix path
        let file = analysis.files.get("B0.cs").unwrap();
        assert_eq!(file.len(), 2);
        assert_eq!(file.breakdown().iter().collect::<Vec<_>>(), vec![(ErrorCode::Charset, 1), (ErrorCode::Imports, 1)]);
    }

    #[test]
    fn test_name_under_two_categories() {
        let log = "\
D:\\a\\Bot\\Controller\\Foo.cs(1,1): error CHARSET: Fix file encoding.
D:\\a\\Bot.Test\\Foo.cs(2,1): error IMPORTS: Fix imports ordering.";
        let analysis = Analysis::parse(log);
        let foo = vec![String::from("Foo.cs")];
        assert_eq!(analysis.categories.get(Category::Controller), Some(foo.as_slice()));
        assert_eq!(analysis.categories.get(Category::Test), Some(foo.as_slice()));
        // Each category counts every entry of the file, not just the ones from its own directory
        assert_eq!(analysis.category_totals(), vec![(Category::Controller, 1, 2), (Category::Test, 1, 2)]);

        let groups = analysis.files_by_first_category();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Category::Controller);
        assert_eq!(groups[0].1.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(), vec!["Foo.cs"]);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(Analysis::parse(SAMPLE_LOG), Analysis::parse(SAMPLE_LOG));
    }

    #[test]
    fn test_empty_analysis() {
        let analysis = Analysis::parse("nothing to see here");
        assert_eq!(analysis.total_errors(), 0);
        assert!(analysis.files.is_empty());
        assert!(analysis.tally.most_common().is_empty());
        assert!(analysis.first_example(ErrorCode::Whitespace).is_none());
        assert!(analysis.category_totals().is_empty());
    }

    #[test]
    fn test_top_files_stable() {
        let log = "\
a/One.cs(1,1): error CHARSET: x
a/Two.cs(1,1): error CHARSET: x
a/Two.cs(2,1): error CHARSET: x
a/Three.cs(1,1): error CHARSET: x
a/Four.cs(1,1): error CHARSET: x";
        let analysis = Analysis::parse(log);
        let names: Vec<_> = analysis.files.top_files(3).into_iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Two.cs", "One.cs", "Three.cs"]);
    }

    #[test]
    fn test_sample_queries() {
        let analysis = Analysis::parse(SAMPLE_LOG);
        assert_eq!(analysis.total_errors(), 25);
        assert_eq!(analysis.files.len(), 14);
        assert_eq!(analysis.tally.most_common()[0], (ErrorCode::Whitespace, 10));
        assert_eq!(analysis.files_with_code(ErrorCode::Charset), 5);
        assert_eq!(analysis.files_with_code(ErrorCode::Imports), 5);

        let example = analysis.first_example(ErrorCode::FinalNewline).unwrap();
        assert_eq!(example.simple_name, "InjectableAttribute.cs");
        assert_eq!((example.line, example.column), (23, 2));

        let top = analysis.files.top_files(1);
        assert_eq!(top[0].name, "VectorPerformanceTests.cs");
        assert_eq!(top[0].len(), 5);
    }

    #[test]
    fn test_sample_categories() {
        let analysis = Analysis::parse(SAMPLE_LOG);
        let totals = analysis.category_totals();
        assert_eq!(
            totals,
            vec![
                (Category::Test, 3, 10),
                (Category::Other, 1, 1),
                (Category::Controller, 3, 3),
                (Category::Handler, 1, 1),
                (Category::Bootstrap, 6, 10),
            ]
        );
        let groups = analysis.files_by_first_category();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].0, Category::Test);
        assert_eq!(groups[0].1.len(), 3);
    }
}
