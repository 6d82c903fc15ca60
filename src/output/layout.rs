//! Paragraph layout and pagination for the paginated backend.
//!
//! Layout is computed here, independent of any PDF library: the document
//! model becomes a story of paragraphs and spacers, paragraphs are wrapped
//! with static Helvetica metrics, and lines are placed on letter-size pages.
//! Coordinates are PDF points with the origin at the bottom-left corner.

use crate::config::TextStyle;
use crate::config::types::PAGE_HEIGHT_PT;
use crate::document::{DocumentModel, Section};

/// Helvetica advance widths for ASCII 0x20..=0x7E, in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, // sp ! " # $ % & '
    333, 333, 389, 584, 278, 333, 278, 278, // ( ) * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // : ; < = > ? @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    278, 278, 278, 469, 556, 333, // [ \ ] ^ _ `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n-z
    334, 260, 334, 584, // { | } ~
];

/// Width used for characters outside the table.
const FALLBACK_WIDTH: u16 = 556;

/// One element of the story fed to the paginator.
#[derive(Debug, Clone, PartialEq)]
pub enum StoryItem {
    Paragraph { text: String, space_after: f32 },
    Spacer(f32),
}

/// A line of text placed on a page; `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// All lines on one page, top to bottom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

/// Build the story for a document.
///
/// Heading and conclusion paragraphs get the small gap, body paragraphs the
/// larger one, and a non-empty separator becomes its own paragraph after
/// every body block. A section gap follows each non-empty section except the
/// last.
pub fn story(model: &DocumentModel, style: &TextStyle) -> Vec<StoryItem> {
    let mut items = Vec::new();

    for (section, blocks) in model.sections() {
        if blocks.is_empty() {
            continue;
        }
        if !items.is_empty() {
            items.push(StoryItem::Spacer(style.section_gap));
        }

        let space_after = match section {
            Section::Heading | Section::Conclusion => style.heading_spacing,
            Section::Body => style.body_spacing,
        };

        for block in blocks {
            items.push(StoryItem::Paragraph {
                text: block.clone(),
                space_after,
            });
            if section == Section::Body && !model.separator.is_empty() {
                items.push(StoryItem::Paragraph {
                    text: model.separator.clone(),
                    space_after,
                });
            }
        }
    }

    items
}

/// Place the story on pages. Always returns at least one page.
pub fn paginate(items: &[StoryItem], style: &TextStyle) -> Vec<PageLayout> {
    let top = PAGE_HEIGHT_PT - style.margin;
    let mut pages = vec![PageLayout::default()];
    let mut cursor = top;

    for item in items {
        match item {
            StoryItem::Spacer(height) => cursor -= height,
            StoryItem::Paragraph { text, space_after } => {
                for line in wrap(text, style.font_size, style.text_width()) {
                    if cursor - style.leading < style.bottom_margin {
                        pages.push(PageLayout::default());
                        cursor = top;
                    }
                    if let Some(page) = pages.last_mut() {
                        page.lines.push(PlacedLine {
                            text: line,
                            x: style.margin,
                            y: cursor - style.font_size,
                        });
                    }
                    cursor -= style.leading;
                }
                cursor -= space_after;
            }
        }
    }

    pages
}

/// Greedy word wrap. Words wider than the line are broken by character.
pub fn wrap(text: &str, font_size: f32, width: f32) -> Vec<String> {
    let space = measure(" ", font_size);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in fit_word(word, font_size, width) {
            if current.is_empty() {
                current.push_str(piece);
                continue;
            }

            let candidate = measure(&current, font_size) + space + measure(piece, font_size);
            if candidate <= width {
                current.push(' ');
                current.push_str(piece);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(piece);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split `word` into pieces no wider than `width`. Each piece holds at
/// least one character.
fn fit_word(word: &str, font_size: f32, width: f32) -> Vec<&str> {
    if measure(word, font_size) <= width {
        return vec![word];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut used = 0.0;
    for (index, c) in word.char_indices() {
        let advance = char_width(c, font_size);
        if index > start && used + advance > width {
            pieces.push(&word[start..index]);
            start = index;
            used = 0.0;
        }
        used += advance;
    }
    pieces.push(&word[start..]);
    pieces
}

/// Rendered width of `text` in points at `font_size`.
pub fn measure(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(char_units).sum();
    units as f32 * font_size / 1000.0
}

fn char_width(c: char, font_size: f32) -> f32 {
    char_units(c) as f32 * font_size / 1000.0
}

fn char_units(c: char) -> u32 {
    let code = c as usize;
    if (32..=126).contains(&code) {
        u32::from(HELVETICA_WIDTHS[code - 32])
    } else {
        u32::from(FALLBACK_WIDTH)
    }
}
