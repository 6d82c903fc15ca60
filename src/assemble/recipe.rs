//! Declarative assembly recipes, one per document type.
//!
//! A recipe lists the blocks of each section. A block is a sequence of
//! pieces (schema fragments, field slots, literal text) that the assembler
//! concatenates; an optional condition decides whether the block is emitted.

use crate::schema::DocumentType;

/// A field value a block can pull in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Company,
    HiringManager,
    Role,
    /// Generation date as `MM.DD.YY`.
    Date,
    /// `EMAIL` from the environment file.
    Email,
    /// `PHONE` from the environment file.
    Phone,
}

/// One piece of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// A schema fragment at a dotted path.
    Key(&'static str),
    /// A field value.
    Slot(Slot),
    /// Fixed text.
    Text(&'static str),
}

/// Emission rule for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    Startup,
    NotStartup,
    /// Emit only when the schema defines this key.
    KeyPresent(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct BlockSpec {
    pub pieces: &'static [Piece],
    pub when: Condition,
}

impl BlockSpec {
    const fn always(pieces: &'static [Piece]) -> Self {
        Self {
            pieces,
            when: Condition::Always,
        }
    }

    const fn when(when: Condition, pieces: &'static [Piece]) -> Self {
        Self { pieces, when }
    }
}

/// Fixed assembly procedure for one document type.
#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    pub heading: &'static [BlockSpec],
    pub body: &'static [BlockSpec],
    pub conclusion: &'static [BlockSpec],
    /// Whether an empty company name is a precondition violation.
    pub requires_company: bool,
}

use Piece::{Key, Slot as S, Text};

static COVER_LETTER: Recipe = Recipe {
    heading: &[
        BlockSpec::always(&[S(Slot::Company), Text(" "), Key("heading")]),
        BlockSpec::always(&[S(Slot::Date)]),
    ],
    body: &[
        BlockSpec::always(&[Key("salutation"), Text(" "), S(Slot::HiringManager), Text(",")]),
        BlockSpec::always(&[
            Key("body.line1.part1"),
            S(Slot::Role),
            Key("body.line1.part2"),
            S(Slot::Company),
            Text("."),
        ]),
        BlockSpec::when(
            Condition::NotStartup,
            &[
                Key("body.line2.standard.part1"),
                S(Slot::Company),
                Key("body.line2.standard.part2"),
            ],
        ),
        BlockSpec::when(Condition::Startup, &[Key("body.line2.startup")]),
        BlockSpec::always(&[Key("body.line3")]),
        BlockSpec::always(&[Key("body.line4")]),
        BlockSpec::always(&[Key("body.line5")]),
        BlockSpec::always(&[
            Key("body.line6.part1"),
            S(Slot::Role),
            Key("body.line6.part2"),
            S(Slot::Company),
            Key("body.line6.part3"),
        ]),
        BlockSpec::always(&[Key("body.line7")]),
        BlockSpec::always(&[
            Key("complimentaryClose.part1"),
            S(Slot::Company),
            Key("complimentaryClose.part2"),
            S(Slot::Email),
            Key("complimentaryClose.part3"),
            S(Slot::Phone),
            Key("complimentaryClose.part4"),
        ]),
    ],
    conclusion: &[BlockSpec::always(&[Key("signature")])],
    requires_company: true,
};

static LONG_SUMMARY: Recipe = Recipe {
    heading: &[],
    body: &[
        BlockSpec::always(&[Key("body.line1.part1"), S(Slot::Role), Key("body.line1.part2")]),
        BlockSpec::always(&[Key("body.line2")]),
        BlockSpec::always(&[Key("body.line3")]),
        BlockSpec::when(Condition::KeyPresent("body.line4"), &[Key("body.line4")]),
    ],
    conclusion: &[],
    requires_company: false,
};

static SINGLE_LINE_SUMMARY: Recipe = Recipe {
    heading: &[],
    body: &[BlockSpec::always(&[Key("body.line1")])],
    conclusion: &[],
    requires_company: false,
};

/// The recipe for `doc_type`.
pub fn recipe_for(doc_type: DocumentType) -> &'static Recipe {
    match doc_type {
        DocumentType::CoverLetter => &COVER_LETTER,
        DocumentType::LongSummary => &LONG_SUMMARY,
        DocumentType::MediumSummary | DocumentType::ShortSummary => &SINGLE_LINE_SUMMARY,
    }
}
