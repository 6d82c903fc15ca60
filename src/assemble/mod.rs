//! Document assembly.
//!
//! [`assemble`] is a pure function of (document type, fields, environment,
//! schema). It picks the recipe for the document type, evaluates every block
//! spec against the inputs, and derives the output title.
//!
//! Schema fragments are rendered through [`crate::template`] before they are
//! joined, so a fragment may also reference `{company}`, `{role}`,
//! `{hiring_manager}`, `{platform}`, `{email}` and `{phone}` inline.

mod recipe;
mod title;


pub use recipe::{BlockSpec, Condition, Piece, Recipe, Slot, recipe_for};
pub use title::{DEFAULT_INITIALS, derive_title};

use crate::document::DocumentModel;
use crate::env_file::EnvMap;
use crate::error::{CoverkitError, Result};
use crate::fields::FieldSet;
use crate::schema::{DocumentType, SchemaTree};
use crate::template::{self, Slots};
use tracing::debug;

/// Heading date format (`03.01.24`).
pub const HEADING_DATE_FORMAT: &str = "%m.%d.%y";

/// Per-run values that are not part of the field set.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInputs<'a> {
    pub fields: &'a FieldSet,
    pub env: &'a EnvMap,
    pub schema: &'a SchemaTree,
    /// Author initials embedded in the title.
    pub initials: &'a str,
}

/// Assemble the document model for `doc_type`.
///
/// # Errors
///
/// * `CoverkitError::InvalidField` - Empty company for the cover letter,
///   multi-line separator, or missing `EMAIL`/`PHONE` in the environment
/// * `CoverkitError::SchemaKey` - The schema lacks a fragment the recipe reads
pub fn assemble(doc_type: DocumentType, inputs: AssemblyInputs<'_>) -> Result<DocumentModel> {
    let recipe = recipe_for(doc_type);
    let fields = inputs.fields;

    if recipe.requires_company && fields.company.trim().is_empty() {
        return Err(CoverkitError::invalid_field("company", "must not be empty"));
    }
    if fields.separator.contains(['\n', '\r']) {
        return Err(CoverkitError::invalid_field(
            "separator",
            "must fit on a single line",
        ));
    }

    let assembler = Assembler {
        inputs,
        slots: fragment_slots(&inputs),
    };

    let model = DocumentModel {
        doc_type,
        heading_blocks: assembler.section(recipe.heading)?,
        body_blocks: assembler.section(recipe.body)?,
        conclusion_blocks: assembler.section(recipe.conclusion)?,
        separator: fields.separator.clone(),
        title: derive_title(doc_type, fields, inputs.initials),
    };

    debug!(
        doc_type = %doc_type,
        heading = model.heading_blocks.len(),
        body = model.body_blocks.len(),
        conclusion = model.conclusion_blocks.len(),
        title = %model.title,
        "assembled document"
    );
    Ok(model)
}

struct Assembler<'a> {
    inputs: AssemblyInputs<'a>,
    slots: Slots,
}

impl Assembler<'_> {
    fn section(&self, specs: &[BlockSpec]) -> Result<Vec<String>> {
        let mut blocks = Vec::with_capacity(specs.len());
        for spec in specs {
            if self.applies(spec.when)? {
                blocks.push(self.block(spec.pieces)?);
            }
        }
        Ok(blocks)
    }

    fn applies(&self, condition: Condition) -> Result<bool> {
        Ok(match condition {
            Condition::Always => true,
            Condition::Startup => self.inputs.fields.startup,
            Condition::NotStartup => !self.inputs.fields.startup,
            Condition::KeyPresent(path) => self.inputs.schema.get_optional(path)?.is_some(),
        })
    }

    fn block(&self, pieces: &[Piece]) -> Result<String> {
        let mut text = String::new();
        for piece in pieces {
            match *piece {
                Piece::Key(path) => text.push_str(&self.fragment(path)?),
                Piece::Slot(slot) => text.push_str(&self.slot(slot)?),
                Piece::Text(literal) => text.push_str(literal),
            }
        }
        Ok(collapse_whitespace(&text))
    }

    fn fragment(&self, path: &str) -> Result<String> {
        let raw = self.inputs.schema.get(path)?;
        Ok(template::render(&raw, &self.slots))
    }

    fn slot(&self, slot: Slot) -> Result<String> {
        let fields = self.inputs.fields;
        Ok(match slot {
            Slot::Company => fields.company.trim().to_string(),
            Slot::HiringManager => fields.hiring_manager.clone(),
            Slot::Role => fields.role.clone(),
            Slot::Date => fields.date.format(HEADING_DATE_FORMAT).to_string(),
            Slot::Email => self.env_value("EMAIL")?,
            Slot::Phone => self.env_value("PHONE")?,
        })
    }

    fn env_value(&self, key: &str) -> Result<String> {
        self.inputs
            .env
            .get(key)
            .cloned()
            .ok_or_else(|| CoverkitError::invalid_field(key, "not set in the environment file"))
    }
}

/// Slot values offered to inline `{placeholder}`s in fragments.
fn fragment_slots(inputs: &AssemblyInputs<'_>) -> Slots {
    let fields = inputs.fields;
    let mut slots = template::slots([
        ("company", fields.company.trim()),
        ("hiring_manager", fields.hiring_manager.as_str()),
        ("role", fields.role.as_str()),
        ("platform", fields.platform.as_deref().unwrap_or("")),
    ]);
    slots.insert(
        "date".to_string(),
        fields.date.format(HEADING_DATE_FORMAT).to_string(),
    );
    for (slot, key) in [("email", "EMAIL"), ("phone", "PHONE")] {
        if let Some(value) = inputs.env.get(key) {
            slots.insert(slot.to_string(), value.clone());
        }
    }
    slots
}

/// Collapse runs of whitespace (including line breaks) to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
