//! Alias map construction from `compilerOptions.paths`.
//!
//! The trailing `*` of a pattern and of its first target is dropped, so
//! `"@/*": ["./src/*"]` in a config at `/proj` becomes `"@/" → /proj/src`.
//! A pattern that does not end in `/` after stripping also gets a second
//! entry with the separator appended: `"~*": ["./lib/*"]` yields both
//! `"~"` and `"~/"`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;

use crate::config::ProjectConfig;
use crate::locator::ConfigLocator;
use crate::observer::ResolveObserver;
use crate::runtime::Runtime;

/// Alias prefix → absolute target directory.
///
/// Keeps insertion order. Inserting an existing alias replaces its target
/// in place, so a repeated declaration wins over an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: IndexMap<String, PathBuf>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an alias.
    pub fn insert(&mut self, alias: impl Into<String>, target: impl Into<PathBuf>) {
        self.entries.insert(alias.into(), target.into());
    }

    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.entries.get(alias).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alias keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_path()))
    }

    /// Entries ordered longest alias first; equal lengths keep insertion order.
    pub fn by_specificity(&self) -> Vec<(&str, &Path)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));
        entries
    }
}

impl<A: Into<String>, T: Into<PathBuf>> FromIterator<(A, T)> for AliasMap {
    fn from_iter<I: IntoIterator<Item = (A, T)>>(iter: I) -> Self {
        let mut map = AliasMap::new();
        for (alias, target) in iter {
            map.insert(alias, target);
        }
        map
    }
}

/// Builds an [`AliasMap`] for the project that owns a directory.
pub struct AliasMapBuilder<'a> {
    runtime: &'a dyn Runtime,
    observer: &'a dyn ResolveObserver,
}

impl<'a> AliasMapBuilder<'a> {
    pub fn new(runtime: &'a dyn Runtime, observer: &'a dyn ResolveObserver) -> Self {
        Self { runtime, observer }
    }

    /// Locate the nearest config above `start_dir` and turn its `paths`
    /// into an alias map.
    ///
    /// Never fails. A missing config produces an empty map; so do an
    /// unreadable file, invalid JSON and a `paths` entry with no targets,
    /// which are also reported to the observer.
    pub fn build(&self, start_dir: &Path, workspace_root: &Path) -> AliasMap {
        let Some(location) = ConfigLocator::new(self.runtime).locate(start_dir, workspace_root)
        else {
            self.observer.config_missing(start_dir, workspace_root);
            return AliasMap::new();
        };
        self.observer.config_located(&location);

        match ProjectConfig::load(self.runtime, &location.config_path) {
            Ok(config) => self.build_from_config(&config, &location.project_root),
            Err(err) => {
                self.observer.config_failed(&err);
                AliasMap::new()
            }
        }
    }

    /// Turn an already-parsed config into an alias map.
    ///
    /// Targets resolve against `project_root` joined with `baseUrl`.
    /// Only the first target of each pattern is used. A pattern with an
    /// empty target list invalidates the whole config and yields an empty map.
    pub fn build_from_config(&self, config: &ProjectConfig, project_root: &Path) -> AliasMap {
        let base = project_root.join(config.base_url());
        let mut aliases = AliasMap::new();

        for (pattern, targets) in config.paths() {
            let Some(first) = targets.first() else {
                self.observer.paths_rejected(pattern, "no target paths");
                return AliasMap::new();
            };

            let alias = strip_wildcard(pattern);
            let target = base.join(strip_wildcard(first)).clean();

            self.observer.alias_registered(alias, &target);
            aliases.insert(alias, target.clone());
            if !alias.ends_with('/') {
                aliases.insert(format!("{alias}/"), target);
            }
        }

        aliases
    }
}

fn strip_wildcard(pattern: &str) -> &str {
    pattern.strip_suffix('*').unwrap_or(pattern)
}
