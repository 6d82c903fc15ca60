//! Supported document types.

use std::fmt;
use std::str::FromStr;

/// The four document kinds coverkit can assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentType {
    #[default]
    CoverLetter,
    LongSummary,
    MediumSummary,
    ShortSummary,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::CoverLetter,
        DocumentType::LongSummary,
        DocumentType::MediumSummary,
        DocumentType::ShortSummary,
    ];

    /// Base name of the schema resource for this type (no extension).
    pub fn resource_name(self) -> &'static str {
        match self {
            DocumentType::CoverLetter => "cover-letter",
            DocumentType::LongSummary => "summary-long",
            DocumentType::MediumSummary => "summary-medium",
            DocumentType::ShortSummary => "summary-short",
        }
    }

    /// Leading component of the output filename.
    pub fn title_stem(self) -> &'static str {
        match self {
            DocumentType::CoverLetter => "cover_letter",
            DocumentType::LongSummary => "summary_long",
            DocumentType::MediumSummary => "summary_medium",
            DocumentType::ShortSummary => "summary_short",
        }
    }

    /// Whether the separator question applies to this type.
    pub fn uses_separator(self) -> bool {
        matches!(self, DocumentType::CoverLetter | DocumentType::MediumSummary)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::CoverLetter => write!(f, "cover letter"),
            DocumentType::LongSummary => write!(f, "long"),
            DocumentType::MediumSummary => write!(f, "medium"),
            DocumentType::ShortSummary => write!(f, "short"),
        }
    }
}

impl FromStr for DocumentType {
    type Err = String;

    /// Accepts prompt answers (`cover letter`, `long`) as well as resource
    /// names (`cover-letter`, `summary-long`). Blank input selects the default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "" | "cover letter" | "cover" | "letter" => Ok(DocumentType::CoverLetter),
            "long" | "summary long" | "long summary" => Ok(DocumentType::LongSummary),
            "medium" | "summary medium" | "medium summary" => Ok(DocumentType::MediumSummary),
            "short" | "summary short" | "short summary" => Ok(DocumentType::ShortSummary),
            _ => Err(format!(
                "unsupported format '{}'; supported formats are cover letter, long, medium and short",
                s.trim()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prompt_answers() {
        assert_eq!("cover letter".parse::<DocumentType>(), Ok(DocumentType::CoverLetter));
        assert_eq!("Cover Letter".parse::<DocumentType>(), Ok(DocumentType::CoverLetter));
        assert_eq!("".parse::<DocumentType>(), Ok(DocumentType::CoverLetter));
        assert_eq!("LONG".parse::<DocumentType>(), Ok(DocumentType::LongSummary));
        assert_eq!("medium".parse::<DocumentType>(), Ok(DocumentType::MediumSummary));
        assert_eq!(" short ".parse::<DocumentType>(), Ok(DocumentType::ShortSummary));
    }

    #[test]
    fn parses_resource_names() {
        for doc_type in DocumentType::ALL {
            assert_eq!(doc_type.resource_name().parse::<DocumentType>(), Ok(doc_type));
        }
    }

    #[test]
    fn rejects_unknown_types() {
        let err = "resume".parse::<DocumentType>().unwrap_err();
        assert!(err.contains("resume"));
    }

    #[test]
    fn separator_applies_to_cover_letter_and_medium() {
        assert!(DocumentType::CoverLetter.uses_separator());
        assert!(DocumentType::MediumSummary.uses_separator());
        assert!(!DocumentType::LongSummary.uses_separator());
        assert!(!DocumentType::ShortSummary.uses_separator());
    }
}
