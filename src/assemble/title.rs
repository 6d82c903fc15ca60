//! Output filename derivation.

use crate::fields::FieldSet;
use crate::schema::DocumentType;

/// Initials used when the configuration does not set any.
pub const DEFAULT_INITIALS: &str = "cc";

/// Derive the output filename for a document.
///
/// - cover letter: `cover_letter_{initials}_{company}_{MM.DD.YY}.pdf`
/// - summaries: `summary_{length}_{initials}_{YYYY-MM-DD}.pdf`
///
/// The company is lower-cased; path separators in it become `-` so the title
/// always names a single file.
pub fn derive_title(doc_type: DocumentType, fields: &FieldSet, initials: &str) -> String {
    match doc_type {
        DocumentType::CoverLetter => format!(
            "{}_{}_{}_{}.pdf",
            doc_type.title_stem(),
            initials,
            file_safe(&fields.company.trim().to_lowercase()),
            fields.date.format("%m.%d.%y")
        ),
        DocumentType::LongSummary | DocumentType::MediumSummary | DocumentType::ShortSummary => {
            format!(
                "{}_{}_{}.pdf",
                doc_type.title_stem(),
                initials,
                fields.date.format("%Y-%m-%d")
            )
        }
    }
}

fn file_safe(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}
