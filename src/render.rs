//! What the engine hands the host each frame, and the capability it expects
//! back.
//!
//! The core never talks to a GPU. Every frame it fills a [`DrawList`] with
//! quads in back-to-front emission order (backdrop plane, menu tiles, tint,
//! selector); the host's [`Renderer`] turns that into draw calls however it
//! likes. Quads are unit tiles spanning (0,0)–(1,-1) in model space, placed
//! by their `transform`; positions carry z, so a depth-testing backend gets
//! the same layering as a painter's-order one.

use cgmath::Matrix4;
use image::RgbaImage;
use std::error::Error;

/// Opaque handle to a texture owned by the host renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuadFill {
    /// Sample the named texture across the tile.
    Textured(TextureId),
    /// Flat RGBA color, no sampling (selector and tint path).
    Solid([f32; 4]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub transform: Matrix4<f32>,
    pub fill: QuadFill,
}

/// One frame's worth of quads plus the clear color.
#[derive(Clone, Debug)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    pub quads: Vec<Quad>,
}

impl DrawList {
    pub fn new(clear_color: [f32; 4]) -> Self {
        Self {
            clear_color,
            quads: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.quads.clear();
    }

    #[inline]
    pub fn push(&mut self, transform: Matrix4<f32>, fill: QuadFill) {
        self.quads.push(Quad { transform, fill });
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new(crate::config::CLEAR_COLOR)
    }
}

/// The GPU capability the host supplies. Alpha blending is expected; textures
/// live for the session (entries are never destroyed).
pub trait Renderer {
    /// Upload a bitmap and return a handle the core can draw with.
    fn create_texture(&mut self, image: &RgbaImage) -> Result<TextureId, Box<dyn Error>>;

    /// Draw one frame.
    fn draw(&mut self, list: &DrawList, projection: Matrix4<f32>) -> Result<(), Box<dyn Error>>;

    fn resize(&mut self, width: u32, height: u32);
}
