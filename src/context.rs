//! Run context resolution for coverkit.
//!
//! Every path coverkit touches (schemas, environment file, output directory)
//! is resolved here against an explicit base directory, so nothing downstream
//! depends on the process working directory.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{CoverkitError, Result};
use std::env;
use std::path::{self, Path, PathBuf};
use tracing::debug;

/// Resolved configuration and paths for one invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Absolute base directory; relative config paths are joined onto it.
    pub base_dir: PathBuf,

    /// Loaded (or default) configuration.
    pub config: Config,

    /// Path the configuration was (or would be) read from.
    pub config_path: PathBuf,
}

impl RunContext {
    /// Resolve the context from optional CLI overrides.
    ///
    /// `dir` defaults to the current working directory; a relative `dir` is
    /// made absolute against it. An explicit `config` path must exist; the
    /// default `coverkit.yaml` is optional.
    pub fn resolve(dir: Option<&Path>, config: Option<&Path>) -> Result<Self> {
        let base_dir = match dir {
            Some(dir) => path::absolute(dir),
            None => env::current_dir(),
        }
        .map_err(|e| {
            CoverkitError::InvalidConfig(format!("failed to resolve base directory: {}", e))
        })?;

        match config {
            Some(path) => {
                let config = Config::load(path)?;
                Ok(Self::with_config(base_dir, config, path.to_path_buf()))
            }
            None => {
                let config_path = base_dir.join(CONFIG_FILE_NAME);
                let config = Config::load_or_default(&config_path)?;
                Ok(Self::with_config(base_dir, config, config_path))
            }
        }
    }

    /// Build a context from an already loaded config.
    pub fn with_config(base_dir: PathBuf, config: Config, config_path: PathBuf) -> Self {
        debug!(base_dir = %base_dir.display(), "resolved run context");
        Self {
            base_dir,
            config,
            config_path,
        }
    }

    /// Directory holding the schema files.
    pub fn templates_dir(&self) -> PathBuf {
        self.join(&self.config.templates_dir)
    }

    /// Path of the environment file.
    pub fn env_path(&self) -> PathBuf {
        self.join(&self.config.env_file)
    }

    /// Directory receiving generated files.
    pub fn output_dir(&self) -> PathBuf {
        self.join(&self.config.output_dir)
    }

    fn join(&self, relative: &str) -> PathBuf {
        let path = Path::new(relative);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
