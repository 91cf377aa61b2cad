//! Configuration loaded from `docblock.toml`.
//!
//! Every field has a default, so an empty or missing file is valid:
//!
//! ```toml
//! [render]
//! table_titles = ["Args", "Returns", "Raises"]
//! title_template = "<h2 class=\"add-link\">{title}</h2>"
//!
//! [parse]
//! generated_sentinel = "Generated by: tensorflow/tools/api/generator"
//! ```

use crate::parser::GENERATED_SENTINEL;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "docblock.toml";

/// Placeholder replaced by the block title in `title_template`.
pub const TITLE_PLACEHOLDER: &str = "{title}";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub parse: ParseConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Titles rendered as tables by the table renderer
    pub table_titles: Vec<String>,
    /// Template for table header titles, with a `{title}` placeholder
    pub title_template: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            table_titles: ["Args", "Arguments", "Returns", "Raises", "Attributes", "Yields"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            title_template: None,
        }
    }
}

impl RenderConfig {
    /// Whether a title block with this title gets the table layout.
    pub fn uses_table(&self, title: &str) -> bool {
        self.table_titles.iter().any(|t| t == title)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Docstrings containing this phrase are dropped; empty disables the check
    pub generated_sentinel: String,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            generated_sentinel: GENERATED_SENTINEL.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `docblock.toml` in the
    /// working directory is used when present, otherwise defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::load_from_file(path)?,
            None => {
                let candidate = Path::new(CONFIG_FILENAME);
                if candidate.is_file() {
                    Self::load_from_file(candidate)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `title_template` lacks the
    /// `{title}` placeholder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(template) = &self.render.title_template {
            if !template.contains(TITLE_PLACEHOLDER) {
                return Err(ConfigError::Validation(format!(
                    "render.title_template must contain {TITLE_PLACEHOLDER}"
                )));
            }
        }
        Ok(())
    }

}
