//! Configuration types and defaults for coverkit.

use serde::{Deserialize, Serialize};

/// US letter width in points.
pub const PAGE_WIDTH_PT: f32 = 612.0;

/// US letter height in points.
pub const PAGE_HEIGHT_PT: f32 = 792.0;

/// Text style handed to the paginated renderer. All lengths are in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Body font size.
    pub font_size: f32,

    /// Baseline-to-baseline distance within a paragraph.
    pub leading: f32,

    /// Space after each heading and conclusion paragraph (0.75 pica).
    pub heading_spacing: f32,

    /// Space after each body paragraph (1.25 pica).
    pub body_spacing: f32,

    /// Extra space between sections (1 pica).
    pub section_gap: f32,

    /// Left, right and top margin.
    pub margin: f32,

    /// Bottom margin.
    pub bottom_margin: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 11.0,
            leading: 14.0,
            heading_spacing: 9.0,
            body_spacing: 15.0,
            section_gap: 12.0,
            margin: 72.0,
            bottom_margin: 54.0,
        }
    }
}

impl TextStyle {
    /// Usable line width between the side margins.
    pub fn text_width(&self) -> f32 {
        PAGE_WIDTH_PT - 2.0 * self.margin
    }
}

// Default value functions for serde
pub(super) fn default_templates_dir() -> String {
    "formats".to_string()
}
pub(super) fn default_env_file() -> String {
    ".env".to_string()
}
pub(super) fn default_output_dir() -> String {
    "output".to_string()
}
pub(super) fn default_author_initials() -> String {
    crate::assemble::DEFAULT_INITIALS.to_string()
}
