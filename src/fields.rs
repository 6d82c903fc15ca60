//! The resolved user inputs for one generation run.

use crate::role;
use chrono::NaiveDate;

/// Name used in the salutation when no hiring manager is given.
pub const DEFAULT_HIRING_MANAGER: &str = "Hiring Manager";

/// Resolved, immutable field values for a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    pub company: String,
    pub hiring_manager: String,
    /// Canonical title, already passed through [`role::normalize`].
    pub role: String,
    /// Where the position was found. Collected but not rendered.
    pub platform: Option<String>,
    pub startup: bool,
    pub separator: String,
    /// Captured once per run; used for both heading and title.
    pub date: NaiveDate,
}

impl FieldSet {
    /// A field set with every optional value at its default.
    pub fn new(company: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            company: company.into(),
            hiring_manager: DEFAULT_HIRING_MANAGER.to_string(),
            role: role::DEFAULT_ROLE.to_string(),
            platform: None,
            startup: false,
            separator: String::new(),
            date,
        }
    }
}

/// Free-text yes/no matching: any answer containing "yes", or exactly "y".
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer.contains("yes") || answer == "y"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let fields = FieldSet::new("Acme", date);

        assert_eq!(fields.company, "Acme");
        assert_eq!(fields.hiring_manager, "Hiring Manager");
        assert_eq!(fields.role, "Software Engineer");
        assert_eq!(fields.platform, None);
        assert!(!fields.startup);
        assert_eq!(fields.separator, "");
        assert_eq!(fields.date, date);
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("YES please"));
        assert!(is_affirmative("oh yes"));
    }

    #[test]
    fn non_affirmative_answers() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("yeah"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("maybe"));
    }
}
