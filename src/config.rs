//! Configuration - layered defaults for selection and output
//!
//! Layers, lowest first: built-in defaults, the user config file
//! (`<config_dir>/taskgraph/config.yml`), the task file's `config:`
//! section, then command-line flags.

use crate::error::{Error, Result};
use crate::render::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const USER_CONFIG_FILE: &str = "taskgraph/config.yml";

/// Inspector configuration. Unset fields defer to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tasks selected when none are named on the command line
    pub default_tasks: Option<Vec<String>>,
    /// Output format when `--output` is not given
    pub output: Option<OutputFormat>,
}

impl Config {
    /// Path of the per-user config file, if the platform has a config dir
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_FILE))
    }

    /// Load the per-user config; a missing file yields the defaults
    pub fn load_user() -> Result<Self> {
        match Self::user_config_path() {
            Some(path) => Self::load_optional(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or defaults if it does not exist
    pub fn load_optional(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Overlay `other` on top of `self`; fields set in `other` win
    pub fn merge(self, other: Config) -> Self {
        Self {
            default_tasks: other.default_tasks.or(self.default_tasks),
            output: other.output.or(self.output),
        }
    }

    /// Final output format, with `--output` taking precedence
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output).unwrap_or_default()
    }
}
