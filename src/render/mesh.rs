//! Tessellating renderer backend
//!
//! Collects each frame into a vertex list plus text labels. `present` swaps
//! the working buffers into the finished frame, which stays readable until
//! the next `present`.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{Color, Renderer};
use crate::config::MAX_DIMENSION;
use crate::error::GameError;

/// A text draw recorded for the frame (glyph rasterization is left to the backend)
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Vec2,
    pub color: Color,
}

#[derive(Debug, Default)]
struct Frame {
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
}

/// Headless renderer producing GPU-ready vertex data
#[derive(Debug)]
pub struct MeshRenderer {
    size: (u32, u32),
    working: Frame,
    finished: Frame,
    frames_presented: u64,
}

impl MeshRenderer {
    /// Create a surface of the given size
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::Display {
                width,
                height,
                reason: "zero-sized surface",
            });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(GameError::Display {
                width,
                height,
                reason: "surface exceeds maximum texture size",
            });
        }
        log::info!("Mesh renderer ready ({}x{})", width, height);
        Ok(Self {
            size: (width, height),
            working: Frame::default(),
            finished: Frame::default(),
            frames_presented: 0,
        })
    }

    /// Vertices of the last presented frame
    pub fn frame_vertices(&self) -> &[Vertex] {
        &self.finished.vertices
    }

    /// Raw bytes of the last presented frame, ready for upload
    pub fn frame_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.finished.vertices)
    }

    /// Text draws of the last presented frame
    pub fn frame_labels(&self) -> &[TextLabel] {
        &self.finished.labels
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Renderer for MeshRenderer {
    fn clear(&mut self, color: Color) {
        self.working.vertices.clear();
        self.working.labels.clear();
        let max = Vec2::new(self.size.0 as f32, self.size.1 as f32);
        self.working
            .vertices
            .extend(shapes::rect(Vec2::ZERO, max, color.to_rgba()));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let segments = shapes::circle_segments(radius);
        self.working
            .vertices
            .extend(shapes::circle(center, radius, color.to_rgba(), segments));
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color) {
        self.working
            .vertices
            .extend(shapes::convex_polygon(points, color.to_rgba()));
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        self.working.labels.push(TextLabel {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.working, &mut self.finished);
        self.working.vertices.clear();
        self.working.labels.clear();
        self.frames_presented += 1;
        log::trace!(
            "Frame {} presented: {} vertices, {} labels",
            self.frames_presented,
            self.finished.vertices.len(),
            self.finished.labels.len()
        );
    }
}
