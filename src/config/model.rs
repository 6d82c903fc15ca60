//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for coverkit.
///
/// This struct represents the contents of `coverkit.yaml`. Relative paths are
/// resolved against the base directory. Unknown fields in the YAML are
/// ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the schema files (default: "formats").
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    /// Environment file with EMAIL and PHONE (default: ".env").
    #[serde(default = "default_env_file")]
    pub env_file: String,

    /// Directory receiving generated PDFs (default: "output").
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Initials embedded in every output filename (default: "cc").
    #[serde(default = "default_author_initials")]
    pub author_initials: String,

    /// Separator used when none is given on the command line or at the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_separator: Option<String>,

    /// Paginated output style.
    #[serde(default)]
    pub style: TextStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            env_file: default_env_file(),
            output_dir: default_output_dir(),
            author_initials: default_author_initials(),
            default_separator: None,
            style: TextStyle::default(),
        }
    }
}
