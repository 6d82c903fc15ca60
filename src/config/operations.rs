//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::PAGE_HEIGHT_PT;
use crate::error::{CoverkitError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CoverkitError::ConfigRead)` - File missing or unreadable
    /// * `Err(CoverkitError::InvalidConfig)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|source| CoverkitError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load config if the file exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string. An empty document yields defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CoverkitError::InvalidConfig(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CoverkitError::InvalidConfig(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `author_initials` must be non-empty ASCII alphanumerics
    /// - `style.font_size` must be positive and `style.leading` at least as large
    /// - spacings must be non-negative
    /// - margins must leave room for text on the page
    /// - `default_separator` must be a single line
    pub fn validate(&self) -> Result<()> {
        if self.author_initials.is_empty()
            || !self.author_initials.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(invalid(format!(
                "author_initials must be non-empty letters or digits (found '{}')",
                self.author_initials
            )));
        }

        let style = &self.style;
        if style.font_size <= 0.0 {
            return Err(invalid("style.font_size must be greater than 0".to_string()));
        }
        if style.leading < style.font_size {
            return Err(invalid(format!(
                "style.leading ({}) must be at least style.font_size ({})",
                style.leading, style.font_size
            )));
        }
        if style.heading_spacing < 0.0 || style.body_spacing < 0.0 || style.section_gap < 0.0 {
            return Err(invalid("style spacings must not be negative".to_string()));
        }
        if style.margin < 0.0 || style.bottom_margin < 0.0 {
            return Err(invalid("style margins must not be negative".to_string()));
        }
        if style.text_width() <= 0.0
            || style.margin + style.bottom_margin + style.leading >= PAGE_HEIGHT_PT
        {
            return Err(invalid("style margins leave no room for text".to_string()));
        }

        if let Some(separator) = &self.default_separator
            && separator.contains(['\n', '\r'])
        {
            return Err(invalid("default_separator must fit on a single line".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> CoverkitError {
    CoverkitError::InvalidConfig(format!("config validation failed: {}", message))
}
