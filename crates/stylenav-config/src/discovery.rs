//! File-based settings discovery.
//!
//! Finds `stylenav.toml` and merges it with defaults, the environment and
//! command-line overrides.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use stylenav::{NativeRuntime, Runtime};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::settings::{NavigatorSettings, SettingsOverrides};

/// Settings file looked up in the discovery root.
pub const SETTINGS_FILE_NAME: &str = "stylenav.toml";

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "STYLENAV_";

/// File-based settings discovery rooted at one directory.
///
/// # Example
///
/// ```no_run
/// use stylenav_config::{SettingsDiscovery, SettingsOverrides};
///
/// let settings = SettingsDiscovery::new(".")
///     .load(None, &SettingsOverrides::default())
///     .unwrap();
/// println!("{:?}", settings.workspace_roots);
/// ```
pub struct SettingsDiscovery {
    root: PathBuf,
    runtime: Box<dyn Runtime>,
}

impl SettingsDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_runtime(root, Box::new(NativeRuntime::new()))
    }

    pub fn with_runtime(root: impl AsRef<Path>, runtime: Box<dyn Runtime>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            runtime,
        }
    }

    /// `stylenav.toml` in the root, if present.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(SETTINGS_FILE_NAME);
        self.runtime.is_file(&path).then_some(path)
    }

    /// Merge every settings layer.
    ///
    /// `explicit` replaces discovery and must exist. Relative workspace
    /// roots are made absolute against the settings file's directory, or
    /// against the discovery root when no file was loaded.
    ///
    /// # Errors
    ///
    /// `ConfigError::NotFound` for a missing explicit file,
    /// `ConfigError::InvalidValue` for values of the wrong shape.
    pub fn load(
        &self,
        explicit: Option<&Path>,
        overrides: &SettingsOverrides,
    ) -> Result<NavigatorSettings> {
        let file = match explicit {
            Some(path) if self.runtime.is_file(path) => Some(path.to_path_buf()),
            Some(path) => return Err(ConfigError::NotFound(path.to_path_buf())),
            None => self.find(),
        };

        let mut figment = Figment::new().merge(Serialized::defaults(NavigatorSettings::default()));
        if let Some(path) = &file {
            debug!("[stylenav] settings file: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }
        figment = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides));

        let mut settings: NavigatorSettings =
            figment.extract().map_err(|e| ConfigError::InvalidValue {
                field: if e.path.is_empty() {
                    "settings".to_string()
                } else {
                    e.path.join(".")
                },
                hint: e.to_string(),
            })?;

        let anchor = file
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(&self.root);
        settings.anchor_roots(anchor);
        settings.validate()?;

        debug!("[stylenav] settings: {settings:?}");
        Ok(settings)
    }
}
