//! Field collection for the generate command.
//!
//! Each value comes from its CLI flag when given, otherwise from the
//! prompter, otherwise from its default. With no prompter (`--no-input`)
//! every unset value takes its default.

use crate::cli::GenerateArgs;
use crate::error::{CoverkitError, Result};
use crate::fields::{FieldSet, is_affirmative};
use crate::output::Destination;
use crate::prompt::Prompter;
use crate::role;
use crate::schema::DocumentType;
use chrono::NaiveDate;

pub(super) const TYPE_QUESTION: &str =
    "Which format would you like to use? Supported formats are cover letter, long, medium and short.";
pub(super) const COMPANY_QUESTION: &str = "What is the name of the company?";
pub(super) const HIRING_MANAGER_QUESTION: &str = "What is the recruiter or hiring manager's name?";
pub(super) const ROLE_QUESTION: &str = "What role are you applying for?";
pub(super) const PLATFORM_QUESTION: &str = "Where did you find this position?";
pub(super) const SEPARATOR_QUESTION: &str =
    "If you wish to use a line break character between paragraphs, enter it now.";
pub(super) const STARTUP_QUESTION: &str = "Is this company a startup?";
pub(super) const PDF_QUESTION: &str = "Would you like to save the document as a PDF?";

/// Resolves flags, answers and defaults.
pub(super) struct Collector<'a> {
    args: &'a GenerateArgs,
    prompter: Option<&'a mut dyn Prompter>,
}

impl<'a> Collector<'a> {
    pub(super) fn new(args: &'a GenerateArgs, prompter: Option<&'a mut dyn Prompter>) -> Self {
        Self { args, prompter }
    }

    /// The document type from the positional argument or the first prompt.
    pub(super) fn doc_type(&mut self) -> Result<DocumentType> {
        let args = self.args;
        let answer = if args.doc_type.is_empty() {
            self.ask(TYPE_QUESTION)?
        } else {
            args.doc_type.join(" ")
        };
        answer
            .parse()
            .map_err(|reason: String| CoverkitError::invalid_field("format", reason))
    }

    /// Collect every field `doc_type` uses.
    ///
    /// Company is asked until non-empty. Without a prompter an empty company
    /// is an error for the cover letter and allowed for the summaries.
    pub(super) fn fields(
        &mut self,
        doc_type: DocumentType,
        date: NaiveDate,
        default_separator: Option<&str>,
    ) -> Result<FieldSet> {
        let args = self.args;
        let company = self.company(doc_type)?;
        let mut fields = FieldSet::new(company, date);

        if doc_type == DocumentType::CoverLetter {
            let answer = self.value(args.hiring_manager.as_deref(), HIRING_MANAGER_QUESTION)?;
            let hiring_manager = role::title_case(&answer);
            if !hiring_manager.is_empty() {
                fields.hiring_manager = hiring_manager;
            }
        }

        if matches!(doc_type, DocumentType::CoverLetter | DocumentType::LongSummary) {
            let answer = self.value(args.role.as_deref(), ROLE_QUESTION)?;
            fields.role = role::normalize(&role::title_case(&answer));
        }

        if doc_type == DocumentType::CoverLetter {
            let platform = self.value(args.platform.as_deref(), PLATFORM_QUESTION)?;
            fields.platform = Some(platform).filter(|p| !p.is_empty());
        }

        if doc_type.uses_separator() {
            let separator = self.value(args.separator.as_deref(), SEPARATOR_QUESTION)?;
            fields.separator = if separator.is_empty() {
                default_separator.unwrap_or_default().to_string()
            } else {
                separator
            };
        }

        let startup = self.value(args.startup.as_deref(), STARTUP_QUESTION)?;
        fields.startup = is_affirmative(&startup);

        Ok(fields)
    }

    /// Console unless a flag or an affirmative answer asks for a file.
    pub(super) fn destination(&mut self) -> Result<Destination> {
        let to_file = match self.args.destination_flag() {
            Some(to_file) => to_file,
            None => is_affirmative(&self.ask(PDF_QUESTION)?),
        };
        Ok(Destination::from_flag(to_file))
    }

    fn company(&mut self, doc_type: DocumentType) -> Result<String> {
        let args = self.args;
        if let Some(company) = args.company.as_deref() {
            return Ok(company.trim().to_string());
        }

        loop {
            let Some(prompter) = self.prompter.as_deref_mut() else {
                if doc_type == DocumentType::CoverLetter {
                    return Err(CoverkitError::invalid_field(
                        "company",
                        "must not be empty (pass --company when using --no-input)",
                    ));
                }
                return Ok(String::new());
            };

            let company = prompter.ask(COMPANY_QUESTION)?.trim().to_string();
            if !company.is_empty() {
                return Ok(company);
            }
        }
    }

    fn value(&mut self, flag: Option<&str>, question: &str) -> Result<String> {
        match flag {
            Some(value) => Ok(value.trim().to_string()),
            None => self.ask(question),
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        match self.prompter.as_deref_mut() {
            Some(prompter) => Ok(prompter.ask(question)?.trim().to_string()),
            None => Ok(String::new()),
        }
    }
}
