//! `tsconfig.json` / `jsconfig.json` loading.
//!
//! Only `compilerOptions.baseUrl` and `compilerOptions.paths` matter here.
//! The files are parsed as JSON5, which accepts the dialect editors write:
//! `//` and `/* */` comments and trailing commas, while leaving string
//! contents such as `"./src//*"` untouched.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::runtime::{Runtime, RuntimeError};

/// `baseUrl` used when the config does not set one.
pub const DEFAULT_BASE_URL: &str = ".";

/// Errors raised while loading a project config.
///
/// These never escape [`AliasMapBuilder`](crate::AliasMapBuilder); they are
/// handed to the observer and the alias map comes back empty.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: RuntimeError,
    },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl ConfigLoadError {
    /// Path of the config file that failed.
    pub fn path(&self) -> &Path {
        match self {
            ConfigLoadError::Read { path, .. } | ConfigLoadError::Parse { path, .. } => path,
        }
    }
}

/// The parts of a project config the resolver reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    compiler_options: Option<CompilerOptions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    #[serde(default)]
    base_url: Option<String>,

    #[serde(default)]
    paths: Option<IndexMap<String, Vec<String>>>,
}

impl ProjectConfig {
    /// Read and parse the config at `path`.
    pub fn load(runtime: &dyn Runtime, path: &Path) -> Result<Self, ConfigLoadError> {
        let text = runtime
            .read_to_string(path)
            .map_err(|source| ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&text).map_err(|e| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse config text.
    pub fn parse(text: &str) -> Result<Self, json5::Error> {
        json5::from_str(text)
    }

    /// `compilerOptions.baseUrl`, or `"."` when absent or empty.
    pub fn base_url(&self) -> &str {
        self.compiler_options
            .as_ref()
            .and_then(|options| options.base_url.as_deref())
            .filter(|base_url| !base_url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// `compilerOptions.paths` entries in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.compiler_options
            .as_ref()
            .and_then(|options| options.paths.as_ref())
            .into_iter()
            .flatten()
            .map(|(pattern, targets)| (pattern.as_str(), targets.as_slice()))
    }

    /// Whether `compilerOptions.paths` declares anything.
    pub fn has_paths(&self) -> bool {
        self.paths().next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::test_utils::MemoryRuntime;

    fn paths_of(config: &ProjectConfig) -> Vec<(String, Vec<String>)> {
        config
            .paths()
            .map(|(pattern, targets)| (pattern.to_string(), targets.to_vec()))
            .collect()
    }

    #[test]
    fn test_parse_plain_json() {
        let config = ProjectConfig::parse(
            r#"{"compilerOptions":{"baseUrl":"./src","paths":{"@/*":["./*"]}}}"#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "./src");
        assert_eq!(
            paths_of(&config),
            vec![("@/*".to_string(), vec!["./*".to_string()])]
        );
    }

    #[test]
    fn test_defaults_when_options_missing() {
        let config = ProjectConfig::parse(r#"{"include": ["src"]}"#).unwrap();

        assert_eq!(config.base_url(), ".");
        assert!(!config.has_paths());
    }

    #[test]
    fn test_null_and_empty_values_fall_back() {
        let config =
            ProjectConfig::parse(r#"{"compilerOptions": {"baseUrl": "", "paths": null}}"#)
                .unwrap();

        assert_eq!(config.base_url(), ".");
        assert!(!config.has_paths());

        let config = ProjectConfig::parse(r#"{"compilerOptions": null}"#).unwrap();
        assert_eq!(config.base_url(), ".");
    }

    #[test]
    fn test_comments_and_trailing_commas_parse_like_clean_json() {
        let noisy = r#"
        // project settings
        {
          /* aliases used by the app */
          "compilerOptions": {
            "baseUrl": ".", // relative to this file
            "paths": {
              "@/*": ["./src/*"],
              "~styles/*": ["./src/styles/*",],
            },
          },
        }
        "#;
        let clean = r#"{"compilerOptions":{"baseUrl":".","paths":{"@/*":["./src/*"],"~styles/*":["./src/styles/*"]}}}"#;

        let noisy = ProjectConfig::parse(noisy).unwrap();
        let clean = ProjectConfig::parse(clean).unwrap();

        assert_eq!(noisy.base_url(), clean.base_url());
        assert_eq!(paths_of(&noisy), paths_of(&clean));
    }

    #[test]
    fn test_comment_markers_inside_strings_survive() {
        let config = ProjectConfig::parse(
            r#"{
              "compilerOptions": {
                "baseUrl": "http://cdn/*not-a-comment*/",
                "paths": { "@//*": ["./src//*"] } // trailing
              }
            }"#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "http://cdn/*not-a-comment*/");
        assert_eq!(
            paths_of(&config),
            vec![("@//*".to_string(), vec!["./src//*".to_string()])]
        );
    }

    #[test]
    fn test_paths_keep_declaration_order() {
        let config = ProjectConfig::parse(
            r#"{"compilerOptions":{"paths":{"z/*":["z/*"],"a/*":["a/*"],"m/*":["m/*"]}}}"#,
        )
        .unwrap();

        let patterns: Vec<String> = paths_of(&config).into_iter().map(|(p, _)| p).collect();
        assert_eq!(patterns, vec!["z/*", "a/*", "m/*"]);
    }

    #[test]
    fn test_load_reports_read_and_parse_errors() {
        let runtime = MemoryRuntime::new().with_file("/p/tsconfig.json", "{ not json");

        let err = ProjectConfig::load(&runtime, Path::new("/p/tsconfig.json")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse { .. }));
        assert_eq!(err.path(), Path::new("/p/tsconfig.json"));

        let err = ProjectConfig::load(&runtime, Path::new("/p/jsconfig.json")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Read { .. }));
    }

    #[test]
    fn test_wrong_shape_is_a_parse_error() {
        assert!(ProjectConfig::parse(r#"{"compilerOptions":{"paths":{"@/*":"./src/*"}}}"#).is_err());
    }
}
