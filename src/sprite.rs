//! # Sprite

use glam::IVec2;

use crate::geometry::collide_rect;
use crate::geometry::Rect;
use crate::math::DVector2;
use crate::render::Canvas;
use crate::render::TextureId;

/// # Sprite
///
/// A textured object placed in a level. Its collision rectangle covers the texture at the
/// sprite's position and moves with it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sprite {
    texture: TextureId,
    position: DVector2,
    size: IVec2,
}

impl Sprite {
    /// Returns a sprite drawing `texture` at `position` with the given size.
    pub const fn new(texture: TextureId, position: DVector2, size: IVec2) -> Self {
        Self {
            texture,
            position,
            size,
        }
    }

    /// Returns the texture drawn for the sprite.
    pub const fn texture(&self) -> TextureId {
        self.texture
    }

    /// Returns the sprite's position in the level.
    pub fn position(&self) -> DVector2 {
        self.position
    }

    /// Moves the sprite to `position`.
    pub fn set_position(&mut self, position: DVector2) {
        self.position = position;
    }

    /// Moves the sprite by `movement`.
    pub fn translate(&mut self, movement: DVector2) {
        self.position += movement;
    }

    /// Returns the collision rectangle.
    pub fn rect(&self) -> Rect {
        let origin = self.position.to_pixel();
        Rect::new(origin.x, origin.y, self.size.x, self.size.y)
    }

    /// Returns true if the sprite's collision rectangle overlaps `other`.
    pub fn is_colliding(&self, other: Rect) -> bool {
        collide_rect(self.rect(), other)
    }

    /// Draws the sprite offset by `scroll`.
    pub fn draw(&self, canvas: &mut dyn Canvas, scroll: DVector2) {
        let origin = (self.position - scroll).to_pixel();
        canvas.blit_texture(
            self.texture,
            Rect::new(origin.x, origin.y, self.size.x, self.size.y),
            None,
        );
    }
}
