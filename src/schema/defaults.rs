//! Schemas bundled into the binary, written out by `coverkit init`.

use super::DocumentType;

const COVER_LETTER: &str = include_str!("../../templates/cover-letter.yaml");
const SUMMARY_LONG: &str = include_str!("../../templates/summary-long.yaml");
const SUMMARY_MEDIUM: &str = include_str!("../../templates/summary-medium.yaml");
const SUMMARY_SHORT: &str = include_str!("../../templates/summary-short.yaml");

/// Example environment file with the keys the cover letter reads.
pub const ENV_EXAMPLE: &str = include_str!("../../templates/env.example");

/// The bundled YAML source for `doc_type`.
pub fn bundled(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::CoverLetter => COVER_LETTER,
        DocumentType::LongSummary => SUMMARY_LONG,
        DocumentType::MediumSummary => SUMMARY_MEDIUM,
        DocumentType::ShortSummary => SUMMARY_SHORT,
    }
}
