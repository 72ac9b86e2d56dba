//! Settings for the `stylenav` tool itself.
//!
//! Layered with `figment`, lowest priority first:
//!
//! 1. built-in defaults ([`NavigatorSettings::default`])
//! 2. `stylenav.toml` in the working directory, or an explicit file
//! 3. `STYLENAV_*` environment variables
//! 4. command-line overrides ([`SettingsOverrides`])

pub mod discovery;
pub mod error;
pub mod settings;

pub use discovery::{SETTINGS_FILE_NAME, SettingsDiscovery};
pub use error::{ConfigError, Result};
pub use settings::{NavigatorSettings, SettingsOverrides};
