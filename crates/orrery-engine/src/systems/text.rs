//! Bitmap font text rendering system.
//!
//! Renders text through the sprite pipeline: each character becomes a
//! [`RenderInstance`] pointing at the appropriate glyph in a font atlas.
//!
//! Font atlases are standard sprite atlases with characters laid out in ASCII order,
//! typically 16 columns × 6 rows for printable ASCII (32-127).

use crate::components::sprite::AtlasId;
use crate::renderer::instance::RenderInstance;
use glam::Vec2;

/// Configuration for a bitmap font atlas.
///
/// The atlas is a grid of character glyphs laid out in ASCII order,
/// starting from `start_char` (typically 32 = space).
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Which atlas contains the font glyphs.
    pub atlas: AtlasId,
    /// Number of columns in the font atlas grid.
    pub cols: u32,
    /// Number of rows in the font atlas grid.
    pub rows: u32,
    /// First ASCII code in the atlas (typically 32 = space).
    pub start_char: u8,
    /// Horizontal advance as fraction of character size (e.g., 0.55 for tight, 1.0 for monospace).
    pub spacing: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            atlas: AtlasId(1), // Convention: atlas 0 = body textures, atlas 1 = font
            cols: 16,
            rows: 6,
            start_char: 32, // space
            spacing: 0.55,
        }
    }
}

impl FontConfig {
    /// Create a new font config with the given atlas.
    pub fn new(atlas: AtlasId) -> Self {
        Self {
            atlas,
            ..Default::default()
        }
    }

    /// Set the grid dimensions.
    pub fn with_grid(mut self, cols: u32, rows: u32) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Set the character spacing.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Advance width of `text` at glyph `size`.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.spacing
    }
}

/// Horizontal anchoring of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// The anchor is the left edge of the first glyph.
    #[default]
    Left,
    /// The anchor is the middle of the run.
    Center,
}

/// Convert an ASCII character to grid coordinates (col, row) in the font atlas.
///
/// Returns `None` if the character is outside the valid range for this font.
pub fn char_to_grid(c: char, font: &FontConfig) -> Option<(f32, f32)> {
    let ascii = c as u32;
    let start = font.start_char as u32;

    if ascii < start {
        return None;
    }

    let index = ascii - start;
    let max_chars = font.cols * font.rows;

    if index >= max_chars {
        return None;
    }

    let col = (index % font.cols) as f32;
    let row = (index / font.cols) as f32;

    Some((col, row))
}

/// Lay out one line of text as glyph instances.
///
/// `anchor.y` is the vertical middle of the line. Characters outside the
/// font's range are skipped but still advance the cursor.
pub fn layout_text(
    text: &str,
    anchor: Vec2,
    size: f32,
    font: &FontConfig,
    align: TextAlign,
    alpha: f32,
) -> Vec<RenderInstance> {
    let mut glyphs = Vec::with_capacity(text.len());
    let mut cursor_x = match align {
        TextAlign::Left => anchor.x,
        TextAlign::Center => anchor.x - font.measure(text, size) / 2.0,
    };

    for c in text.chars() {
        if let Some((col, row)) = char_to_grid(c, font) {
            glyphs.push(RenderInstance {
                x: cursor_x + size / 2.0,
                y: anchor.y,
                rotation: 0.0,
                scale: size,
                sprite_col: col,
                alpha,
                cell_span: 1.0,
                atlas_row: row,
            });
        }
        cursor_x += size * font.spacing;
    }

    glyphs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_default_font() -> FontConfig {
        FontConfig {
            atlas: AtlasId(1),
            cols: 16,
            rows: 6,
            start_char: 32,
            spacing: 0.55,
        }
    }

    #[test]
    fn char_to_grid_basic() {
        let font = make_default_font();
        // 'A' is ASCII 65, start_char is 32, so index = 33
        // col = 33 % 16 = 1, row = 33 / 16 = 2
        let (col, row) = char_to_grid('A', &font).unwrap();
        assert_eq!(col, 1.0);
        assert_eq!(row, 2.0);
    }

    #[test]
    fn char_to_grid_out_of_range() {
        let font = make_default_font();
        assert!(char_to_grid('\x1F', &font).is_none());
        assert!(char_to_grid('\t', &font).is_none());
        // Beyond the 16×6 grid
        assert!(char_to_grid('\u{80}', &font).is_none());
    }

    #[test]
    fn char_to_grid_end_of_range() {
        let font = make_default_font();
        // '~' is ASCII 126, index = 94
        // col = 94 % 16 = 14, row = 94 / 16 = 5
        let (col, row) = char_to_grid('~', &font).unwrap();
        assert_eq!(col, 14.0);
        assert_eq!(row, 5.0);
    }

    #[test]
    fn layout_left_aligned() {
        let font = make_default_font();
        let glyphs = layout_text("Hi", Vec2::new(100.0, 50.0), 20.0, &font, TextAlign::Left, 1.0);

        assert_eq!(glyphs.len(), 2);
        // 'H' is ASCII 72, index = 40, col = 8, row = 2
        assert_eq!(glyphs[0].sprite_col, 8.0);
        assert_eq!(glyphs[0].atlas_row, 2.0);
        assert_eq!(glyphs[0].x, 110.0);
        assert_eq!(glyphs[0].y, 50.0);
        assert_eq!(glyphs[1].x, 110.0 + 20.0 * 0.55);
    }

    #[test]
    fn layout_centered_straddles_anchor() {
        let font = make_default_font().with_spacing(1.0);
        let glyphs = layout_text("ab", Vec2::new(100.0, 0.0), 10.0, &font, TextAlign::Center, 0.5);

        // Run is 20 wide, so glyph centers sit at 95 and 105.
        assert_eq!(glyphs[0].x, 95.0);
        assert_eq!(glyphs[1].x, 105.0);
        assert!(glyphs.iter().all(|g| g.alpha == 0.5));
    }

    #[test]
    fn layout_skips_unprintable() {
        let font = make_default_font();
        let glyphs = layout_text("A\tB", Vec2::ZERO, 20.0, &font, TextAlign::Left, 1.0);
        assert_eq!(glyphs.len(), 2);
        // The tab still advances the cursor
        assert_eq!(glyphs[1].x, 10.0 + 2.0 * 20.0 * 0.55);
    }
}
