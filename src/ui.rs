//! # UI
//!
//! Hit-testing for rectangular widgets that can be moved, scaled, and rotated.

use winit::event::MouseButton;

use crate::geometry::Quad;
use crate::geometry::Rect;
use crate::input::Input;
use crate::math::DVector2;
use crate::math::Transform;

/// # Button
///
/// Clickable area of a button. Keeps a [Quad] in step with the button's transform so clicks land
/// on the shape actually drawn, rotated and scaled around the button's position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Button {
    quad: Quad,
    position: DVector2,
    scale: DVector2,
    rotation: f64,
    pressed: bool,
    active: bool,
}

impl Button {
    /// Returns an active, unpressed button covering `rect`.
    pub fn new(rect: Rect) -> Self {
        Self {
            quad: Quad::from_rect(rect),
            position: DVector2::new(f64::from(rect.x), f64::from(rect.y)),
            scale: DVector2::new(1.0, 1.0),
            rotation: 0.0,
            pressed: false,
            active: true,
        }
    }

    /// Returns the area that receives clicks.
    pub fn quad(&self) -> &Quad {
        &self.quad
    }

    /// Returns the button's position, scale, and rotation.
    pub fn transform(&self) -> Transform<f64> {
        Transform {
            position: self.position,
            scale: self.scale,
            rotation: self.rotation,
        }
    }

    /// Moves the button by `movement`.
    pub fn translate(&mut self, movement: DVector2) {
        self.position += movement;
        self.quad.translate(movement);
    }

    /// Moves the button to `position`.
    pub fn set_position(&mut self, position: DVector2) {
        self.translate(position - self.position);
    }

    /// Rotates the button by `degrees` around its centre. The stored rotation is kept in
    /// `[0, 360)`.
    pub fn rotate(&mut self, degrees: f64) {
        self.rotation = (self.rotation + degrees).rem_euclid(360.0);
        self.quad.rotate(degrees);
    }

    /// Rotates the button to `degrees`.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.quad.rotate(degrees - self.rotation);
        self.rotation = degrees.rem_euclid(360.0);
    }

    /// Scales the button by `factor` around its position.
    pub fn scale(&mut self, factor: f64) {
        self.scale_axes(DVector2::new(factor, factor));
    }

    /// Scales the button by a separate factor per axis around its position.
    pub fn scale_axes(&mut self, factors: DVector2) {
        self.scale *= factors;
        self.quad.scale_axes(factors, Some(self.position));
    }

    /// Records whether the left mouse button is down inside the button and returns it.
    pub fn is_clicked(&mut self, input: &Input) -> bool {
        self.pressed = self.active
            && input.is_mouse_pressed(MouseButton::Left)
            && self.quad.is_in(input.mouse_point());
        self.pressed
    }

    /// Sets the pressed state and returns whether it changed.
    pub fn update(&mut self, pressed: bool) -> bool {
        let changed = pressed != self.pressed;
        self.pressed = pressed;
        changed
    }

    /// Marks the button as pressed.
    pub fn press(&mut self) {
        self.pressed = true;
    }

    /// Returns the last recorded pressed state.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns whether the button reacts to clicks.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enables or disables the button.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::IVector2;
    use crate::Event;

    fn click(at: IVector2) -> Input {
        let mut input = Input::new();
        input.handle_event(Event::MouseMoved(at));
        input.handle_event(Event::MousePressed(MouseButton::Left));
        input
    }

    #[test]
    fn is_clicked_inside_returns_true() {
        let mut button = Button::new(Rect::new(10, 10, 40, 20));

        assert!(button.is_clicked(&click(IVector2::new(20, 15))));
        assert!(button.is_pressed());
    }

    #[test]
    fn is_clicked_outside_returns_false() {
        let mut button = Button::new(Rect::new(10, 10, 40, 20));

        assert!(!button.is_clicked(&click(IVector2::new(60, 15))));
        assert!(!button.is_pressed());
    }

    #[test]
    fn is_clicked_without_mouse_button_returns_false() {
        let mut button = Button::new(Rect::new(10, 10, 40, 20));
        let mut input = Input::new();
        input.handle_event(Event::MouseMoved(IVector2::new(20, 15)));

        assert!(!button.is_clicked(&input));
    }

    #[test]
    fn is_clicked_inactive_returns_false() {
        let mut button = Button::new(Rect::new(10, 10, 40, 20));
        button.set_active(false);

        assert!(!button.is_clicked(&click(IVector2::new(20, 15))));
    }

    #[test]
    fn is_clicked_follows_rotation() {
        let mut button = Button::new(Rect::new(0, 0, 40, 4));

        button.rotate(90.0);

        assert!(button.is_clicked(&click(IVector2::new(20, -10))));
        assert!(!button.is_clicked(&click(IVector2::new(35, 2))));
    }

    #[test]
    fn set_position_moves_quad() {
        let mut button = Button::new(Rect::new(0, 0, 10, 10));

        button.set_position(DVector2::new(100.0, 50.0));

        assert_eq!(*button.quad(), Quad::from_rect(Rect::new(100, 50, 10, 10)));
        assert_eq!(button.transform().position, DVector2::new(100.0, 50.0));
    }

    #[test]
    fn scale_grows_from_position() {
        let mut button = Button::new(Rect::new(10, 10, 10, 10));

        button.scale(2.0);

        assert_eq!(*button.quad(), Quad::from_rect(Rect::new(10, 10, 20, 20)));
        assert_eq!(button.transform().scale, DVector2::new(2.0, 2.0));
    }

    #[test]
    fn set_rotation_rotates_by_difference() {
        let mut button = Button::new(Rect::new(0, 0, 10, 10));
        button.rotate(30.0);

        button.set_rotation(30.0);

        assert_eq!(button.transform().rotation, 30.0);
        let mut expected = Quad::from_rect(Rect::new(0, 0, 10, 10));
        expected.rotate(30.0);
        for (actual, expected) in button.quad().vertices().into_iter().zip(expected.vertices()) {
            assert!((actual - expected).distance() < 1e-9);
        }
    }

    #[test]
    fn rotate_past_full_turn_wraps() {
        let mut button = Button::new(Rect::new(0, 0, 10, 10));

        button.rotate(300.0);
        button.rotate(100.0);

        assert_eq!(button.transform().rotation, 40.0);
    }

    #[test]
    fn rotate_negative_wraps_into_full_turn() {
        let mut button = Button::new(Rect::new(0, 0, 10, 10));

        button.rotate(-30.0);
        assert_eq!(button.transform().rotation, 330.0);

        button.set_rotation(-720.0);
        assert_eq!(button.transform().rotation, 0.0);
    }

    #[test]
    fn update_returns_whether_state_changed() {
        let mut button = Button::new(Rect::new(0, 0, 10, 10));

        assert!(!button.update(false));
        assert!(button.update(true));
        assert!(!button.update(true));

        button.update(false);
        button.press();
        assert!(button.is_pressed());
    }
}
