//! Style-module import extraction from source lines.
//!
//! Recognizes the forms editors put under the cursor:
//!
//! ```text
//! import styles from "./button.module.css";
//! import '@/styles/reset.module.scss';
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static IMPORT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(?:\w+\s+from\s+)?['"]([^'"]+\.module\.(css|scss|sass))['"]"#)
        .expect("import pattern is a valid regex")
});

/// How a specifier is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// Starts with `./` or `../`.
    Relative,
    /// Anything else; expected to start with an alias.
    Aliased,
}

impl SpecifierKind {
    pub fn of(specifier: &str) -> Self {
        if specifier.starts_with("./") || specifier.starts_with("../") {
            SpecifierKind::Relative
        } else {
            SpecifierKind::Aliased
        }
    }
}

/// Stylesheet dialect named by a `.module.*` extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleFlavor {
    Css,
    Scss,
    Sass,
}

impl StyleFlavor {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "css" => Some(StyleFlavor::Css),
            "scss" => Some(StyleFlavor::Scss),
            "sass" => Some(StyleFlavor::Sass),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            StyleFlavor::Css => "css",
            StyleFlavor::Scss => "scss",
            StyleFlavor::Sass => "sass",
        }
    }
}

impl fmt::Display for StyleFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A style-module specifier as written in source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    raw: String,
    flavor: Option<StyleFlavor>,
}

impl ImportSpecifier {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let flavor = raw
            .rsplit_once(".module.")
            .and_then(|(_, ext)| StyleFlavor::from_extension(ext));
        Self { raw, flavor }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> SpecifierKind {
        SpecifierKind::of(&self.raw)
    }

    /// Dialect when the specifier ends in `.module.{css,scss,sass}`.
    pub fn flavor(&self) -> Option<StyleFlavor> {
        self.flavor
    }
}

impl fmt::Display for ImportSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Extract the style-module specifier from an import line.
pub fn extract_import(line: &str) -> Option<ImportSpecifier> {
    IMPORT_PATTERN
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|specifier| ImportSpecifier::new(specifier.as_str()))
}

/// Extract the specifier from zero-based line `index` of `source`.
pub fn extract_import_at(source: &str, index: usize) -> Option<ImportSpecifier> {
    source.lines().nth(index).and_then(extract_import)
}
