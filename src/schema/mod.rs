//! Template schemas.
//!
//! A schema is a tree of text fragments for one document type, stored as a
//! YAML (or JSON) file under the templates directory:
//!
//! ```yaml
//! heading: Corporation
//! salutation: Dear
//! body:
//!   line1:
//!     part1: "I am writing to apply for the "
//!     part2: " role at "
//! signature: Your Name
//! ```
//!
//! Recipes address fragments with dotted paths such as `body.line1.part1`.

pub mod defaults;
mod document_type;
mod loader;


pub use document_type::DocumentType;
pub use loader::{load, locate};

use crate::error::{CoverkitError, Result};
use serde_yaml::Value;

/// A decoded schema: read-only tree of fragments for one document type.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaTree {
    doc_type: DocumentType,
    root: Value,
}

impl SchemaTree {
    /// Wrap an already decoded tree. The root must be a mapping.
    pub fn new(doc_type: DocumentType, root: Value) -> Self {
        Self { doc_type, root }
    }

    /// The document type this schema was loaded for.
    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    /// Resolve a dotted path to a text fragment.
    ///
    /// Numbers and booleans are rendered as text. A missing key, or a path
    /// that lands on a nested table, is a [`CoverkitError::SchemaKey`].
    pub fn get(&self, path: &str) -> Result<String> {
        self.get_optional(path)?.ok_or_else(|| self.key_error(path))
    }

    /// Like [`SchemaTree::get`], but a missing key yields `None`.
    pub fn get_optional(&self, path: &str) -> Result<Option<String>> {
        let mut node = &self.root;
        for segment in path.split('.') {
            match node.get(segment) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }

        match node {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            Value::Null => Ok(None),
            _ => Err(self.key_error(path)),
        }
    }

    fn key_error(&self, path: &str) -> CoverkitError {
        CoverkitError::SchemaKey {
            doc_type: self.doc_type.resource_name().to_string(),
            key: path.to_string(),
        }
    }
}
