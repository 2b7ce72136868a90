//! Rendering abstraction
//!
//! The simulation only ever talks to a [`Renderer`]. The bundled
//! [`MeshRenderer`] tessellates everything into a flat vertex buffer that a
//! GPU backend can upload as-is.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::{MeshRenderer, TextLabel};
pub use vertex::Vertex;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random opaque color
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }

    /// Normalized RGBA for vertex data
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Something that can draw a frame of the game
pub trait Renderer {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Filled convex polygon
    fn draw_polygon(&mut self, points: &[Vec2], color: Color);
    /// Single line of text with its top-left corner at `position`
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color);
    /// Finish the frame
    fn present(&mut self);
}

/// Anything that knows how to put itself on screen
pub trait Drawable {
    fn draw(&self, renderer: &mut dyn Renderer);
}
