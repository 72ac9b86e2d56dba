//! Settings types and defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stylenav::ResolveOptions;

use crate::error::{ConfigError, Result};

/// Accepted values for `log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Resolved settings after every layer has been merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorSettings {
    /// Retry a missed `../x` import as `./x` and `x`.
    #[serde(default = "default_lenient_relative")]
    pub lenient_relative: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Roots that bound the config search. The first root containing the
    /// importing file is used.
    #[serde(default)]
    pub workspace_roots: Vec<PathBuf>,
}

fn default_lenient_relative() -> bool {
    true
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            lenient_relative: default_lenient_relative(),
            log_level: None,
            workspace_roots: Vec::new(),
        }
    }
}

impl NavigatorSettings {
    /// Resolver options derived from these settings.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            lenient_relative: self.lenient_relative,
        }
    }

    /// Make relative workspace roots absolute against `base`.
    pub fn anchor_roots(&mut self, base: &Path) {
        for root in &mut self.workspace_roots {
            if root.is_relative() {
                *root = base.join(&*root);
            }
        }
    }

    /// Reject values that deserialize but make no sense.
    pub fn validate(&self) -> Result<()> {
        match &self.log_level {
            Some(level) if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) => {
                Err(ConfigError::InvalidValue {
                    field: "log_level".to_string(),
                    hint: format!("expected one of {}, got '{level}'", LOG_LEVELS.join(", ")),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Command-line values layered over every other source.
///
/// `None` leaves the lower layers untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lenient_relative: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_roots: Option<Vec<PathBuf>>,
}
