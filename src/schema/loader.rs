//! Schema file loading.
//!
//! Every call reads from disk; nothing is cached between runs.

use super::{DocumentType, SchemaTree};
use crate::error::{CoverkitError, Result};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extensions probed for a schema, in order.
const EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Load the schema for `doc_type` from `templates_dir`.
///
/// # Returns
///
/// * `Ok(SchemaTree)` - Decoded schema
/// * `Err(CoverkitError::SchemaNotFound)` - No `<name>.{yaml,yml,json}` exists
/// * `Err(CoverkitError::SchemaParse)` - File unreadable, malformed, or not a mapping
pub fn load<P: AsRef<Path>>(templates_dir: P, doc_type: DocumentType) -> Result<SchemaTree> {
    let templates_dir = templates_dir.as_ref();
    let path = locate(templates_dir, doc_type).ok_or_else(|| CoverkitError::SchemaNotFound {
        doc_type: doc_type.resource_name().to_string(),
        dir: templates_dir.to_path_buf(),
    })?;

    let content = std::fs::read_to_string(&path).map_err(|e| CoverkitError::SchemaParse {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let root = decode(&path, &content)?;
    if !root.is_mapping() {
        return Err(CoverkitError::SchemaParse {
            path,
            message: "top level must be a mapping of section names".to_string(),
        });
    }

    debug!(path = %path.display(), doc_type = %doc_type, "loaded schema");
    Ok(SchemaTree::new(doc_type, root))
}

/// Find the first existing schema file for `doc_type`.
pub fn locate(templates_dir: &Path, doc_type: DocumentType) -> Option<PathBuf> {
    EXTENSIONS
        .iter()
        .map(|ext| templates_dir.join(format!("{}.{}", doc_type.resource_name(), ext)))
        .find(|candidate| candidate.is_file())
}

fn decode(path: &Path, content: &str) -> Result<Value> {
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");

    let decoded = if is_json {
        serde_json::from_str::<Value>(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string())
    };

    decoded.map_err(|message| CoverkitError::SchemaParse {
        path: path.to_path_buf(),
        message,
    })
}
