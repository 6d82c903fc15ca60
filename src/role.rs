//! Role normalization.
//!
//! Maps the shorthand people type at the prompt (`sse`, `fee`, ...) to the
//! canonical job title used in the generated documents.

/// Title used when no role is supplied.
pub const DEFAULT_ROLE: &str = "Software Engineer";

/// Abbreviation table, matched case-insensitively.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("se", "Software Engineer"),
    ("seii", "Software Engineer II"),
    ("seiii", "Software Engineer III"),
    ("sse", "Senior Software Engineer"),
    ("fee", "Frontend Engineer"),
    ("bee", "Backend Engineer"),
    ("fsse", "Full Stack Software Engineer"),
    ("fse", "Full Stack Software Engineer"),
];

/// Normalize a role to its canonical title.
///
/// Blank input yields [`DEFAULT_ROLE`]. Known abbreviations are expanded;
/// anything else is returned trimmed but otherwise unchanged.
pub fn normalize(role: &str) -> String {
    let trimmed = role.trim();
    if trimmed.is_empty() {
        return DEFAULT_ROLE.to_string();
    }

    ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(trimmed))
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Title-case free text: first letter of every word upper, the rest lower.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The abbreviation table, in display order.
pub fn abbreviations() -> &'static [(&'static str, &'static str)] {
    ABBREVIATIONS
}
