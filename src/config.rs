//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/avltree/avltree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `AVLTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, RenderStyle, ShellOptions};
use crate::domain::TraversalOrder;

/// Unified configuration for avltree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Order used by `traverse` when none is given
    pub default_order: TraversalOrder,
    /// Accept negative numbers in number lists
    pub allow_negative: bool,
    /// Print the tree after every insertion
    pub show_steps: bool,
    /// Picture style for printed trees
    pub style: RenderStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_order: TraversalOrder::InOrder,
            allow_negative: false,
            show_steps: true,
            style: RenderStyle::Ascii,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_order: Option<TraversalOrder>,
    pub allow_negative: Option<bool>,
    pub show_steps: Option<bool>,
    pub style: Option<RenderStyle>,
}

/// Get the XDG config directory for avltree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "avltree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("avltree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_order: overlay.default_order.unwrap_or(self.default_order),
            allow_negative: overlay.allow_negative.unwrap_or(self.allow_negative),
            show_steps: overlay.show_steps.unwrap_or(self.show_steps),
            style: overlay.style.unwrap_or(self.style),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!(path = %path.display(), "loading explicit config");
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(
            current,
            Environment::with_prefix("AVLTREE")
                .prefix_separator("_")
                .separator("__"),
        )
    }

    /// Apply `AVLTREE_*` environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("default_order") {
            settings.default_order = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("AVLTREE_DEFAULT_ORDER: {e}"),
            })?;
        }
        if let Ok(val) = config.get_bool("allow_negative") {
            settings.allow_negative = val;
        }
        if let Ok(val) = config.get_bool("show_steps") {
            settings.show_steps = val;
        }
        if let Ok(val) = config.get_string("style") {
            settings.style = match val.to_ascii_lowercase().as_str() {
                "ascii" => RenderStyle::Ascii,
                "tree" => RenderStyle::Tree,
                other => {
                    return Err(ApplicationError::Config {
                        message: format!("AVLTREE_STYLE: unknown style {other}"),
                    })
                }
            };
        }

        Ok(settings)
    }

    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            allow_negative: self.allow_negative,
            show_steps: self.show_steps,
            style: self.style,
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# avltree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/avltree/avltree.toml
#   File:   avltree --config <file>
#   Env:    AVLTREE_* environment variables

# Traversal used when `traverse` gets no --order
# default_order = "inorder"

# Accept negative numbers in number lists
# allow_negative = false

# Print the tree after every insertion
# show_steps = true

# Tree picture: "ascii" or "tree"
# style = "ascii"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
