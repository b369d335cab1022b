//! # Render
//!
//! The drawing surface the core talks to. Windowing and texture storage live behind [Canvas], so
//! nothing in the core depends on a concrete graphics library.

use std::fmt;

use glam::IVec2;

use crate::geometry::Quad;
use crate::geometry::Rect;

/// # Color
///
/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque orange.
    pub const ORANGE: Self = Self::rgb(255, 128, 0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque aqua.
    pub const AQUA: Self = Self::rgb(0, 255, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque purple.
    pub const PURPLE: Self = Self::rgb(255, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const EMPTY: Self = Self::rgba(0, 0, 0, 0);

    /// Returns an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Returns a color with the given alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}, {}}}", self.r, self.g, self.b, self.a)
    }
}

/// # Texture Id
///
/// Handle to a texture owned by a [Canvas].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TextureId(pub u32);

/// # Rotation
///
/// Rotation applied to a blit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation {
    /// Clockwise rotation in degrees.
    pub degrees: f64,
    /// Pivot relative to the destination's origin.
    pub pivot: IVec2,
}

/// # Canvas
///
/// Drawing capabilities required by the core.
pub trait Canvas {
    /// Returns the visible area in pixels. Draws that don't touch it may be skipped.
    fn viewport(&self) -> Rect;

    /// Creates a transparent texture of the given size.
    fn create_texture(&mut self, size: IVec2) -> TextureId;

    /// Redirects drawing into `target`, or back to the screen for `None`.
    fn set_render_target(&mut self, target: Option<TextureId>);

    /// Draws `texture` stretched over `dest`, optionally rotated around a pivot.
    fn blit_texture(&mut self, texture: TextureId, dest: Rect, rotation: Option<Rotation>);

    /// Draws a line between two pixels.
    fn draw_line(&mut self, from: IVec2, to: IVec2, color: Color, thickness: u32);

    /// Draws the outline of `quad`.
    fn draw_quad(&mut self, quad: &Quad, color: Color, thickness: u32) {
        for edge in quad.edges() {
            self.draw_line(edge.p1.to_pixel(), edge.p2.to_pixel(), color, thickness);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A draw call recorded by [RecordingCanvas].
    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Blit {
            texture: TextureId,
            dest: Rect,
            rotation: Option<Rotation>,
            target: Option<TextureId>,
        },
        Line {
            from: IVec2,
            to: IVec2,
            color: Color,
            thickness: u32,
            target: Option<TextureId>,
        },
    }

    /// Canvas that records every call instead of drawing.
    pub struct RecordingCanvas {
        pub viewport: Rect,
        pub textures: Vec<IVec2>,
        pub target: Option<TextureId>,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingCanvas {
        pub fn new(viewport: Rect) -> Self {
            Self {
                viewport,
                textures: Vec::new(),
                target: None,
                calls: Vec::new(),
            }
        }
    }

    impl Canvas for RecordingCanvas {
        fn viewport(&self) -> Rect {
            self.viewport
        }

        fn create_texture(&mut self, size: IVec2) -> TextureId {
            self.textures.push(size);
            TextureId(self.textures.len() as u32 - 1)
        }

        fn set_render_target(&mut self, target: Option<TextureId>) {
            self.target = target;
        }

        fn blit_texture(&mut self, texture: TextureId, dest: Rect, rotation: Option<Rotation>) {
            self.calls.push(DrawCall::Blit {
                texture,
                dest,
                rotation,
                target: self.target,
            });
        }

        fn draw_line(&mut self, from: IVec2, to: IVec2, color: Color, thickness: u32) {
            self.calls.push(DrawCall::Line {
                from,
                to,
                color,
                thickness,
                target: self.target,
            });
        }
    }
}
