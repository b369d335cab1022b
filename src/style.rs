//! # Particle Styles
//!
//! Strategies for drawing a live particle. The emitter decides which particles to draw and where;
//! a style decides what they look like.

use glam::IVec2;

use crate::geometry::Rect;
use crate::math::DVector2;
use crate::particle::Instance;
use crate::render::Canvas;
use crate::render::Color;
use crate::render::Rotation;
use crate::render::TextureId;

/// # Particle Style
pub trait ParticleStyle {
    /// Returns the screen area the particle covers when drawn at `position`. Used to skip
    /// particles outside the viewport.
    fn footprint(&self, instance: &Instance, position: DVector2) -> Rect;

    /// Draws the particle at `position`, already offset by the emitter's scroll.
    fn draw(&self, canvas: &mut dyn Canvas, instance: &Instance, position: DVector2);
}

/// # Sprite Style
///
/// Draws every particle as the same texture. Particles spawned with `rotate_with_velocity` are
/// turned around their centre to face their velocity.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SpriteStyle {
    texture: TextureId,
    size: IVec2,
}

impl SpriteStyle {
    /// Returns a style drawing `texture` at the given size.
    pub const fn new(texture: TextureId, size: IVec2) -> Self {
        Self { texture, size }
    }

    /// Creates a texture of the given size on `canvas` holding a horizontal blue dash and returns
    /// a style drawing it.
    pub fn baked(canvas: &mut dyn Canvas, size: IVec2) -> Self {
        let texture = canvas.create_texture(size);

        canvas.set_render_target(Some(texture));
        canvas.draw_line(
            IVec2::new(0, size.y / 2),
            IVec2::new(size.x, size.y / 2),
            Color::BLUE,
            1,
        );
        canvas.set_render_target(None);

        Self::new(texture, size)
    }

    /// Returns the texture drawn for each particle.
    pub const fn texture(&self) -> TextureId {
        self.texture
    }

    /// Returns the size each particle is drawn at.
    pub const fn size(&self) -> IVec2 {
        self.size
    }
}

impl ParticleStyle for SpriteStyle {
    fn footprint(&self, _instance: &Instance, position: DVector2) -> Rect {
        let origin = position.to_pixel();
        Rect::new(origin.x, origin.y, self.size.x, self.size.y)
    }

    fn draw(&self, canvas: &mut dyn Canvas, instance: &Instance, position: DVector2) {
        let rotation = instance.rotate_with_velocity.then(|| Rotation {
            degrees: instance.velocity.horizontal_angle(),
            pivot: self.size / 2,
        });

        canvas.blit_texture(self.texture, self.footprint(instance, position), rotation);
    }
}

/// # Streak Style
///
/// Draws every particle as a line along its velocity, colored from its position and speed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StreakStyle {
    /// Line length as a multiple of the particle's velocity.
    pub length: f64,
    /// Line thickness in pixels.
    pub thickness: u32,
}

impl StreakStyle {
    /// Returns a style with the given length factor and thickness.
    pub const fn new(length: f64, thickness: u32) -> Self {
        Self { length, thickness }
    }

    /// Returns the color a particle is drawn with: red and green follow its position, blue
    /// follows its speed. Each value is truncated and wraps modulo 256.
    pub fn color(instance: &Instance) -> Color {
        fn channel(value: f64) -> u8 {
            value.trunc().rem_euclid(256.0) as u8
        }

        Color::rgb(
            channel(instance.position.x),
            channel(instance.position.y),
            channel(instance.velocity.distance()),
        )
    }

    fn end(&self, instance: &Instance, position: DVector2) -> DVector2 {
        position + instance.velocity.scaled(self.length)
    }
}

impl Default for StreakStyle {
    fn default() -> Self {
        Self::new(5.0, 1)
    }
}

impl ParticleStyle for StreakStyle {
    fn footprint(&self, instance: &Instance, position: DVector2) -> Rect {
        // Keeps the extent of a line between far-off ends representable.
        let limit = IVec2::splat(i32::MAX / 2);
        let start = position.to_pixel().clamp(-limit, limit);
        let end = self.end(instance, position).to_pixel().clamp(-limit, limit);
        let min = start.min(end);
        let max = start.max(end);

        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    fn draw(&self, canvas: &mut dyn Canvas, instance: &Instance, position: DVector2) {
        canvas.draw_line(
            position.to_pixel(),
            self.end(instance, position).to_pixel(),
            Self::color(instance),
            self.thickness,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Kinematics;
    use crate::render::testing::DrawCall;
    use crate::render::testing::RecordingCanvas;

    fn instance(velocity: DVector2, rotate_with_velocity: bool) -> Instance {
        Instance::new(
            Kinematics::new(DVector2::new(300.0, 20.0), velocity, DVector2::zero()),
            1.0,
            rotate_with_velocity,
            0.0,
        )
    }

    #[test]
    fn baked_draws_dash_into_new_texture() {
        let mut canvas = RecordingCanvas::new(Rect::new(0, 0, 100, 100));

        let style = SpriteStyle::baked(&mut canvas, IVec2::new(8, 4));

        assert_eq!(canvas.textures, [IVec2::new(8, 4)]);
        assert_eq!(canvas.target, None);
        assert_eq!(
            canvas.calls,
            [DrawCall::Line {
                from: IVec2::new(0, 2),
                to: IVec2::new(8, 2),
                color: Color::BLUE,
                thickness: 1,
                target: Some(style.texture()),
            }]
        );
    }

    #[test]
    fn sprite_draw_without_rotation_blits_at_position() {
        let mut canvas = RecordingCanvas::new(Rect::new(0, 0, 100, 100));
        let style = SpriteStyle::new(TextureId(3), IVec2::new(8, 4));

        style.draw(
            &mut canvas,
            &instance(DVector2::new(1.0, 1.0), false),
            DVector2::new(10.4, 20.6),
        );

        assert_eq!(
            canvas.calls,
            [DrawCall::Blit {
                texture: TextureId(3),
                dest: Rect::new(10, 21, 8, 4),
                rotation: None,
                target: None,
            }]
        );
    }

    #[test]
    fn sprite_draw_with_rotation_faces_velocity() {
        let mut canvas = RecordingCanvas::new(Rect::new(0, 0, 100, 100));
        let style = SpriteStyle::new(TextureId(0), IVec2::new(8, 4));

        style.draw(
            &mut canvas,
            &instance(DVector2::new(1.0, 1.0), true),
            DVector2::zero(),
        );

        let DrawCall::Blit { rotation, .. } = &canvas.calls[0] else {
            panic!("expected a blit, got {:?}", canvas.calls[0]);
        };
        let rotation = rotation.expect("rotated blit");
        assert!((rotation.degrees - 45.0).abs() < 1e-9);
        assert_eq!(rotation.pivot, IVec2::new(4, 2));
    }

    #[test]
    fn streak_draw_draws_line_along_velocity() {
        let mut canvas = RecordingCanvas::new(Rect::new(0, 0, 100, 100));
        let style = StreakStyle::default();

        style.draw(
            &mut canvas,
            &instance(DVector2::new(3.0, -4.0), false),
            DVector2::new(10.0, 10.0),
        );

        assert_eq!(
            canvas.calls,
            [DrawCall::Line {
                from: IVec2::new(10, 10),
                to: IVec2::new(25, -10),
                color: Color::rgb(44, 20, 5),
                thickness: 1,
                target: None,
            }]
        );
    }

    #[test]
    fn streak_color_wraps_channels() {
        let mut particle = instance(DVector2::new(3.0, 4.0), false);
        particle.position = DVector2::new(-1.5, 775.9);

        assert_eq!(StreakStyle::color(&particle), Color::rgb(255, 7, 5));
    }

    #[test]
    fn streak_footprint_spanning_i32_limits_stays_representable() {
        let style = StreakStyle::default();

        let footprint = style.footprint(
            &instance(DVector2::new(1e12, 0.0), false),
            DVector2::new(-3e9, 0.0),
        );

        let limit = i32::MAX / 2;
        assert_eq!(footprint, Rect::new(-limit, 0, 2 * limit, 0));
        assert!(footprint.collides(Rect::new(0, 0, 800, 600)));
    }

    #[test]
    fn streak_footprint_covers_line() {
        let style = StreakStyle::default();

        let footprint = style.footprint(
            &instance(DVector2::new(3.0, -4.0), false),
            DVector2::new(10.0, 10.0),
        );

        assert_eq!(footprint, Rect::new(10, -10, 15, 20));
    }
}
