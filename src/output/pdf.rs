//! PDF backend built on `printpdf`.

use super::PagedRenderer;
use super::layout;
use crate::config::TextStyle;
use crate::config::types::{PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use crate::document::DocumentModel;
use crate::error::{CoverkitError, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::{debug, warn};

/// Renders documents as US-letter PDFs in Helvetica.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PagedRenderer for PdfRenderer {
    fn render(&self, model: &DocumentModel, style: &TextStyle) -> Result<Vec<u8>> {
        let pages = layout::paginate(&layout::story(model, style), style);
        debug!(title = %model.title, pages = pages.len(), "rendering pdf");

        let missing = unencodable_chars(model);
        if !missing.is_empty() {
            warn!(
                title = %model.title,
                chars = %missing.iter().collect::<String>(),
                "characters outside WinAnsi cannot be drawn in Helvetica and will be missing"
            );
        }

        let (doc, first_page, first_layer) = PdfDocument::new(
            model.title.as_str(),
            mm(PAGE_WIDTH_PT),
            mm(PAGE_HEIGHT_PT),
            "Page 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| CoverkitError::Render(format!("failed to load Helvetica: {}", e)))?;

        for (index, page) in pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(
                    mm(PAGE_WIDTH_PT),
                    mm(PAGE_HEIGHT_PT),
                    format!("Page {}", index + 1),
                )
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);
            for line in &page.lines {
                layer.use_text(line.text.as_str(), style.font_size, mm(line.x), mm(line.y), &font);
            }
        }

        doc.save_to_bytes()
            .map_err(|e| CoverkitError::Render(format!("failed to encode pdf: {}", e)))
    }
}

/// Non-ASCII characters WinAnsiEncoding defines in 0x80..=0x9F.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Distinct characters in the model's text the builtin fonts cannot encode,
/// in order of first appearance.
fn unencodable_chars(model: &DocumentModel) -> Vec<char> {
    let mut missing = Vec::new();
    let text = model
        .sections()
        .into_iter()
        .flat_map(|(_, blocks)| blocks.iter())
        .chain(std::iter::once(&model.separator));

    for block in text {
        for c in block.chars() {
            if !is_win_ansi(c) && !missing.contains(&c) {
                missing.push(c);
            }
        }
    }
    missing
}

fn is_win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}') || WIN_ANSI_EXTRAS.contains(c)
}

/// Points to millimetres.
fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DocumentType;

    fn model(body: Vec<String>) -> DocumentModel {
        DocumentModel {
            doc_type: DocumentType::ShortSummary,
            heading_blocks: Vec::new(),
            body_blocks: body,
            conclusion_blocks: Vec::new(),
            separator: String::new(),
            title: "summary_short_cc_2024-03-01.pdf".to_string(),
        }
    }

    #[test]
    fn renders_pdf_bytes() {
        let bytes = PdfRenderer
            .render(
                &model(vec!["Software engineer.".to_string()]),
                &TextStyle::default(),
            )
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn renders_multi_page_documents() {
        let body = (0..120).map(|i| format!("Paragraph {}", i)).collect();
        let bytes = PdfRenderer
            .render(&model(body), &TextStyle::default())
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn latin_text_is_encodable() {
        let body = vec!["Café résumé – “quoted” € 100…".to_string()];
        assert!(unencodable_chars(&model(body)).is_empty());
    }

    #[test]
    fn reports_characters_outside_win_ansi() {
        let mut document = model(vec!["日本語 ✓".to_string(), "語 ok".to_string()]);
        document.separator = "→".to_string();

        assert_eq!(unencodable_chars(&document), vec!['日', '本', '語', '✓', '→']);
    }

    #[test]
    fn unencodable_text_still_renders() {
        let bytes = PdfRenderer
            .render(&model(vec!["日本語 ✓".to_string()]), &TextStyle::default())
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn points_convert_to_millimetres() {
        let Mm(value) = mm(72.0);
        assert!((value - 25.4).abs() < 1e-4);
    }
}
