//! Environment file loading.
//!
//! Secondary contact fields (email, phone) live in a small `KEY=VALUE` file
//! next to the templates. The format is deliberately narrow:
//!
//! ```text
//! # contact details
//! EMAIL=me@example.com   # trailing comments are allowed
//! PHONE=555-0100
//! ```
//!
//! A line contributes a key only when its first `=` comes before the first
//! `#` and at least one character of value sits between them. Everything else
//! is skipped without error.

use crate::error::{CoverkitError, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Parsed environment values, keyed by upper-cased name.
pub type EnvMap = HashMap<String, String>;

/// Load and parse an environment file.
///
/// # Returns
///
/// * `Ok(EnvMap)` - Parsed key/value pairs (possibly empty)
/// * `Err(CoverkitError::ConfigRead)` - File missing or unreadable
pub fn load<P: AsRef<Path>>(path: P) -> Result<EnvMap> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| CoverkitError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let env = parse(&content);
    debug!(path = %path.display(), keys = env.len(), "loaded environment file");
    Ok(env)
}

/// Parse environment file content. Duplicate keys: last one wins.
pub fn parse(content: &str) -> EnvMap {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let comment = line.find('#').unwrap_or(line.len());
    let eq = line.find('=')?;

    // `=` must sit before the comment with at least one value character after it.
    if eq + 1 >= comment {
        return None;
    }

    let key = line[..eq].trim();
    if key.is_empty() {
        return None;
    }

    let value = line[eq + 1..comment].trim_end_matches(['\r', '\n']).trim();
    Some((key.to_uppercase(), value.to_string()))
}
