//! The assembled document handed from the assembler to the renderers.

use crate::schema::DocumentType;

/// The three sections of every document, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Heading,
    Body,
    Conclusion,
}

/// Ordered heading/body/conclusion blocks plus separator and output title.
///
/// Every block is a single paragraph of plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentModel {
    pub doc_type: DocumentType,
    pub heading_blocks: Vec<String>,
    pub body_blocks: Vec<String>,
    pub conclusion_blocks: Vec<String>,
    /// Inserted after body blocks by the renderers. May be empty.
    pub separator: String,
    /// Output filename, e.g. `cover_letter_cc_acme_03.01.24.pdf`.
    pub title: String,
}

impl DocumentModel {
    /// Sections paired with their blocks, in render order.
    pub fn sections(&self) -> [(Section, &[String]); 3] {
        [
            (Section::Heading, self.heading_blocks.as_slice()),
            (Section::Body, self.body_blocks.as_slice()),
            (Section::Conclusion, self.conclusion_blocks.as_slice()),
        ]
    }
}
