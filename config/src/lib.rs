//! Configuration loading for Vortex.
//!
//! The constants table lives in `~/.vortex/config.toml`:
//!
//! ```toml
//! [frequency]
//! base = 432
//! multipliers = [1, 2, 3, 4, 6, 8, 9]
//! ```
//!
//! `VORTEX_CONFIG` overrides the path; callers may also pass an explicit path.
//! A missing default file yields the built-in table. An explicit or
//! env-provided path must exist.
//!
//! Once loaded, the table is installed process-wide with [`install`] and read
//! with [`global`]. It is never mutated after installation.

mod frequency;

pub use frequency::{DEFAULT_BASE, DEFAULT_MULTIPLIERS, FrequencyError, FrequencyTable};

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "VORTEX_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VortexConfig {
    #[serde(default)]
    pub frequency: FrequencyTable,
}

impl VortexConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a specific file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), base = config.frequency.base(), "Loaded config");
        Ok(config)
    }

    /// Resolve and load the active configuration.
    ///
    /// Precedence: `explicit`, then `VORTEX_CONFIG`, then `~/.vortex/config.toml`.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve(explicit, env_path(), dirs::home_dir())
    }

    fn resolve(
        explicit: Option<&Path>,
        env: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = env {
            return Self::load_from(&path);
        }

        let Some(path) = home.map(|home| default_path(&home)) else {
            tracing::debug!("No home directory; using built-in constants");
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using built-in constants");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }
}

fn env_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn default_path(home: &Path) -> PathBuf {
    home.join(".vortex").join("config.toml")
}

static ACTIVE: OnceLock<VortexConfig> = OnceLock::new();

/// Install the process-wide configuration.
///
/// Succeeds only once; later calls (or calls after [`global`] has already
/// fallen back to defaults) hand the rejected config back.
pub fn install(config: VortexConfig) -> Result<&'static VortexConfig, VortexConfig> {
    ACTIVE.set(config)?;
    Ok(global())
}

/// The process-wide configuration, initialised to defaults on first read if
/// nothing was installed.
pub fn global() -> &'static VortexConfig {
    ACTIVE.get_or_init(|| {
        tracing::debug!("No config installed; using built-in constants");
        VortexConfig::default()
    })
}
