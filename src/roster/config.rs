//! # Configuration
//!
//! Roster configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables, and compiled defaults. Configuration
//! only shapes the interactive client; the record store and statistics engine
//! take no settings.
//!
//! ## Resolution Order
//!
//! 1. **Command-line flags**: `--no-seed`, `--no-color` (applied on top, see
//!    [`RosterConfig::apply_overrides`]).
//! 2. **Environment variables**: `ROSTER_SEED_SAMPLES`, `ROSTER_CONFIRM_DELETES`,
//!    `ROSTER_COLOR`.
//! 3. **Config file**: `--config <path>`, or `roster.toml` in the OS config
//!    directory (via the `directories` crate). A missing default file is fine.
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key               | Default | Description                                  |
//! |-------------------|---------|----------------------------------------------|
//! | `seed_samples`    | `true`  | Start with the five sample students          |
//! | `confirm_deletes` | `true`  | Ask for y/n confirmation before deleting     |
//! | `color`           | `true`  | Colored terminal output                      |

use crate::error::{Result, RosterError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "roster.toml";

/// Configuration for the roster client, stored in `roster.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Start with the five sample students
    #[config(env = "ROSTER_SEED_SAMPLES", default = true)]
    pub seed_samples: bool,

    /// Ask for confirmation before deleting a student
    #[config(env = "ROSTER_CONFIRM_DELETES", default = true)]
    pub confirm_deletes: bool,

    /// Colored terminal output
    #[config(env = "ROSTER_COLOR", default = true)]
    pub color: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            confirm_deletes: true,
            color: true,
        }
    }
}

impl RosterConfig {
    /// Load configuration from the environment and a TOML file.
    ///
    /// An explicitly given `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(RosterError::Input(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                builder = builder.file(path);
            }
            None => {
                if let Some(default_path) = default_config_path() {
                    builder = builder.file(default_path);
                }
            }
        }

        Ok(builder.load()?)
    }

    /// Apply command-line flags. Flags can only switch features off.
    pub fn apply_overrides(&mut self, no_seed: bool, no_color: bool) {
        if no_seed {
            self.seed_samples = false;
        }
        if no_color {
            self.color = false;
        }
    }

    /// A commented sample `roster.toml`.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}

/// `roster.toml` inside the OS config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "roster", "roster").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
