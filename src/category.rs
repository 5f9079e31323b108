use std::fmt;

/// Coarse grouping of source files, derived from their path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Test,
    Controller,
    Service,
    Model,
    Bootstrap,
    Handler,
    Helper,
    Interface,
    View,
    Other,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Test => "Test files",
            Category::Controller => "Controllers",
            Category::Service => "Services",
            Category::Model => "Models",
            Category::Bootstrap => "Bootstrap",
            Category::Handler => "Handlers",
            Category::Helper => "Helpers",
            Category::Interface => "Interfaces",
            Category::View => "Views",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Checked top to bottom; the first substring found in the path decides the category.
/// `Test` comes first, so a test of a controller is a test file.
pub const CATEGORY_RULES: &[(&str, Category)] = &[
    ("Test", Category::Test),
    ("Controller", Category::Controller),
    ("Service", Category::Service),
    ("Model", Category::Model),
    ("AppBootstrap", Category::Bootstrap),
    ("Handler", Category::Handler),
    ("Helper", Category::Helper),
    ("Interface", Category::Interface),
    ("View", Category::View),
];

/// Classify a raw (unnormalized) file path.
pub fn classify(file_path: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(needle, _)| file_path.contains(needle))
        .map(|&(_, category)| category)
        .unwrap_or(Category::Other)
}
