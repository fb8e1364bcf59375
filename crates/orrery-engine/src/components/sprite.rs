use crate::renderer::instance::RenderInstance;

/// Identifies which texture atlas a sprite belongs to.
/// Index into the AssetManifest's atlas list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// A named cell (or block of cells) in a texture atlas.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Which atlas this sprite belongs to.
    pub atlas: AtlasId,
    /// Column in the atlas grid.
    pub col: f32,
    /// Row in the atlas grid.
    pub row: f32,
    /// Number of cells this sprite spans (1.0 = single cell, 2.0 = 2x2 block).
    pub cell_span: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl SpriteComponent {
    /// Instance of this sprite centered at (`x`, `y`), `size` pixels across.
    pub fn instance(&self, x: f32, y: f32, size: f32, rotation: f32) -> RenderInstance {
        RenderInstance {
            x,
            y,
            rotation,
            scale: size,
            sprite_col: self.col,
            alpha: self.alpha,
            cell_span: self.cell_span,
            atlas_row: self.row,
        }
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            atlas: AtlasId(0),
            col: 0.0,
            row: 0.0,
            cell_span: 1.0,
            alpha: 1.0,
        }
    }
}
