//! Ordered draw list.
//!
//! Vector triangles and sprite instances live in separate buffers, but a frame
//! is composited pass by pass: a textured disk must cover the glow drawn before
//! it and sit under the moons drawn after it. The draw list records which
//! contiguous range of which buffer the host draws next, so it can replay the
//! frame in exactly the order it was recorded.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::components::sprite::AtlasId;
use crate::renderer::instance::{RenderBuffer, RenderInstance};
use crate::systems::text::{layout_text, FontConfig, TextAlign};
use crate::systems::vector::VectorState;

/// Which buffer a batch reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    /// A range of vector vertices (triangle list).
    Vectors,
    /// A range of sprite instances sampling the given atlas.
    Sprites(AtlasId),
}

/// Batch descriptor in wire format: kind, atlas, start, end (exclusive).
/// 4 floats per batch.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawBatch {
    /// 0 = vectors, 1 = sprites.
    pub kind: f32,
    pub atlas: f32,
    pub start: f32,
    pub end: f32,
}

impl DrawBatch {
    pub const FLOATS: usize = 4;

    const KIND_VECTORS: f32 = 0.0;
    const KIND_SPRITES: f32 = 1.0;

    fn new(kind: BatchKind, start: u32, end: u32) -> Self {
        let (kind, atlas) = match kind {
            BatchKind::Vectors => (Self::KIND_VECTORS, 0.0),
            BatchKind::Sprites(AtlasId(atlas)) => (Self::KIND_SPRITES, atlas as f32),
        };
        Self { kind, atlas, start: start as f32, end: end as f32 }
    }

    pub fn kind(&self) -> BatchKind {
        if self.kind == Self::KIND_VECTORS {
            BatchKind::Vectors
        } else {
            BatchKind::Sprites(AtlasId(self.atlas as u32))
        }
    }

    pub fn len(&self) -> u32 {
        (self.end - self.start) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-frame output: vector geometry, sprite instances, and the order to draw them in.
pub struct DrawList {
    vectors: VectorState,
    sprites: RenderBuffer,
    batches: Vec<DrawBatch>,
}

impl DrawList {
    pub fn with_capacity(max_vertices: usize, max_instances: usize, max_batches: usize) -> Self {
        Self {
            vectors: VectorState::with_capacity(max_vertices),
            sprites: RenderBuffer::with_capacity(max_instances),
            batches: Vec::with_capacity(max_batches),
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(65536, 1024, 256)
    }

    /// Reset all buffers. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.vectors.clear();
        self.sprites.clear();
        self.batches.clear();
    }

    /// Run vector drawing commands and record the produced vertices as the next batch.
    pub fn vectors<R>(&mut self, draw: impl FnOnce(&mut VectorState) -> R) -> R {
        let start = self.vectors.vertex_count() as u32;
        let out = draw(&mut self.vectors);
        let end = self.vectors.vertex_count() as u32;
        self.record(BatchKind::Vectors, start, end);
        out
    }

    /// Append one sprite instance from `atlas`.
    pub fn sprite(&mut self, atlas: AtlasId, instance: RenderInstance) {
        let start = self.sprites.instance_count();
        self.sprites.push(instance);
        self.record(BatchKind::Sprites(atlas), start, start + 1);
    }

    /// Lay out and append a line of glyphs.
    pub fn text(&mut self, text: &str, anchor: Vec2, size: f32, font: &FontConfig, align: TextAlign, alpha: f32) {
        let start = self.sprites.instance_count();
        for glyph in layout_text(text, anchor, size, font, align, alpha) {
            self.sprites.push(glyph);
        }
        let end = self.sprites.instance_count();
        self.record(BatchKind::Sprites(font.atlas), start, end);
    }

    /// Extend the last batch when it continues the same buffer range, else open a new one.
    fn record(&mut self, kind: BatchKind, start: u32, end: u32) {
        if end <= start {
            return;
        }
        if let Some(last) = self.batches.last_mut() {
            if last.kind() == kind && last.end as u32 == start {
                last.end = end as f32;
                return;
            }
        }
        self.batches.push(DrawBatch::new(kind, start, end));
    }

    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    pub fn vector_state(&self) -> &VectorState {
        &self.vectors
    }

    pub fn instances(&self) -> &[RenderInstance] {
        &self.sprites.instances
    }

    pub fn vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }

    pub fn instance_count(&self) -> u32 {
        self.sprites.instance_count()
    }

    pub fn batch_count(&self) -> u32 {
        self.batches.len() as u32
    }

    // ---- Raw pointers for host reads ----

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.sprites.instances_ptr()
    }

    pub fn batches_ptr(&self) -> *const f32 {
        self.batches.as_ptr() as *const f32
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::vector::VectorColor;

    #[test]
    fn draw_batch_is_4_floats() {
        assert_eq!(std::mem::size_of::<DrawBatch>(), 16);
        assert_eq!(DrawBatch::FLOATS, 4);
    }

    #[test]
    fn consecutive_vector_passes_merge() {
        let mut list = DrawList::new();
        list.vectors(|v| v.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE));
        list.vectors(|v| v.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::BLACK));

        assert_eq!(list.batch_count(), 1);
        assert_eq!(list.batches()[0].kind(), BatchKind::Vectors);
        assert_eq!(list.batches()[0].len(), 12);
    }

    #[test]
    fn sprites_interleave_with_vectors_in_order() {
        let mut list = DrawList::new();
        list.vectors(|v| v.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE));
        list.sprite(AtlasId(0), RenderInstance::default());
        list.vectors(|v| v.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE));

        let kinds: Vec<BatchKind> = list.batches().iter().map(|b| b.kind()).collect();
        assert_eq!(kinds, vec![BatchKind::Vectors, BatchKind::Sprites(AtlasId(0)), BatchKind::Vectors]);

        // The second vector batch continues where the first ended.
        assert_eq!(list.batches()[2].start, 6.0);
        assert_eq!(list.batches()[2].end, 12.0);
    }

    #[test]
    fn atlas_change_opens_new_batch() {
        let mut list = DrawList::new();
        list.sprite(AtlasId(0), RenderInstance::default());
        list.sprite(AtlasId(0), RenderInstance::default());
        list.text("ok", Vec2::ZERO, 10.0, &FontConfig::default(), TextAlign::Left, 1.0);

        assert_eq!(list.batch_count(), 2);
        assert_eq!(list.batches()[0].len(), 2);
        assert_eq!(list.batches()[1].kind(), BatchKind::Sprites(AtlasId(1)));
        assert_eq!(list.instance_count(), 4);
    }

    #[test]
    fn empty_pass_records_nothing() {
        let mut list = DrawList::new();
        list.vectors(|_| {});
        list.text("", Vec2::ZERO, 10.0, &FontConfig::default(), TextAlign::Left, 1.0);
        assert_eq!(list.batch_count(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = DrawList::new();
        list.vectors(|v| v.fill_rect(Vec2::ZERO, 10.0, 10.0, VectorColor::WHITE));
        list.sprite(AtlasId(0), RenderInstance::default());
        list.clear();
        assert_eq!((list.vertex_count(), list.instance_count(), list.batch_count()), (0, 0, 0));
    }
}
