//! Sprite renderer boundary
//!
//! The gamepad only decides *where* each sprite goes and *which* atlas region
//! it shows; turning that into pixels belongs to whatever implements
//! [`SpriteRenderer`].

use serde::Serialize;

use crate::geometry::{Rect, TexCoords};

/// RGBA tint multiplied into every sampled texel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tint(pub [f32; 4]);

impl Tint {
    pub const WHITE: Tint = Tint([1.0, 1.0, 1.0, 1.0]);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Tint([r, g, b, a])
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        let [r, g, b, _] = self.0;
        Tint([r, g, b, alpha])
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint::WHITE
    }
}

/// Batched sprite drawing
///
/// Every `draw_sprite` call the gamepad makes happens between one
/// `begin_batch` and the matching `end_batch`.
pub trait SpriteRenderer {
    fn begin_batch(&mut self);

    /// Draw `uvs` of the atlas stretched over `dest` (pixel space)
    fn draw_sprite(&mut self, dest: Rect, uvs: TexCoords, tint: Tint);

    fn end_batch(&mut self);
}

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteDraw {
    pub dest: Rect,
    pub uvs: TexCoords,
    pub tint: Tint,
}

/// Renderer that keeps draw calls in memory instead of rasterizing them
///
/// Used for headless replay and in tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    batches: Vec<Vec<SpriteDraw>>,
    open: Option<Vec<SpriteDraw>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed batches, oldest first
    pub fn batches(&self) -> &[Vec<SpriteDraw>] {
        &self.batches
    }

    /// Draw calls of the most recently completed batch
    pub fn last_batch(&self) -> &[SpriteDraw] {
        self.batches.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn take_batches(&mut self) -> Vec<Vec<SpriteDraw>> {
        std::mem::take(&mut self.batches)
    }
}

impl SpriteRenderer for RecordingRenderer {
    fn begin_batch(&mut self) {
        debug_assert!(self.open.is_none(), "begin_batch called twice without end_batch");
        self.open = Some(Vec::new());
    }

    fn draw_sprite(&mut self, dest: Rect, uvs: TexCoords, tint: Tint) {
        debug_assert!(self.open.is_some(), "draw_sprite called outside begin_batch/end_batch");
        let batch = self.open.get_or_insert_with(Vec::new);
        batch.push(SpriteDraw { dest, uvs, tint });
    }

    fn end_batch(&mut self) {
        let batch = self.open.take().unwrap_or_default();
        self.batches.push(batch);
    }
}
