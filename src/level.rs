//! # Level
//!
//! The playfield: a set of collision rectangles and the scroll offset everything in it is drawn
//! with.

use std::cell::Cell;
use std::rc::Rc;

use crate::geometry::collide_rect;
use crate::geometry::Rect;
use crate::math::DVector2;
use crate::Error;
use crate::Result;

/// # Scroll
///
/// Shared scroll offset. Clones see the same value, so an emitter handed a level's scroll follows
/// it without being updated every frame.
#[derive(Clone, Debug, Default)]
pub struct Scroll {
    offset: Rc<Cell<DVector2>>,
}

impl Scroll {
    /// Returns a new, unshared offset.
    pub fn new(offset: DVector2) -> Self {
        Self {
            offset: Rc::new(Cell::new(offset)),
        }
    }

    /// Returns the current offset.
    pub fn get(&self) -> DVector2 {
        self.offset.get()
    }

    /// Sets the offset for every clone.
    pub fn set(&self, offset: DVector2) {
        self.offset.set(offset);
    }
}

/// # Collider Id
///
/// Handle to a collision rectangle added to a [Level].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ColliderId(usize);

/// # Level
#[derive(Debug, Default)]
pub struct Level {
    scroll: Scroll,
    colliders: Vec<Rect>,
}

impl Level {
    /// Returns an empty level without scrolling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an empty level scrolled to `scroll`.
    pub fn with_scroll(scroll: DVector2) -> Self {
        Self {
            scroll: Scroll::new(scroll),
            colliders: Vec::new(),
        }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> DVector2 {
        self.scroll.get()
    }

    /// Returns a handle that follows this level's scroll.
    pub fn scroll_handle(&self) -> Scroll {
        self.scroll.clone()
    }

    /// Sets the scroll offset.
    pub fn set_scroll(&mut self, scroll: DVector2) {
        self.scroll.set(scroll);
    }

    /// Scrolls the level by `movement`.
    pub fn scroll_by(&mut self, movement: DVector2) {
        self.scroll.set(self.scroll.get() + movement);
    }

    /// Scrolls so that `point` is drawn in the middle of `viewport`.
    pub fn focus_scroll(&mut self, point: DVector2, viewport: Rect) {
        let half = DVector2::new(f64::from(viewport.w) / 2.0, f64::from(viewport.h) / 2.0);

        self.scroll.set(point - half);
        log::trace!("scroll focused on {point}, now {}", self.scroll.get());
    }

    /// Returns where a point in the level is drawn on screen.
    pub fn to_screen(&self, point: DVector2) -> DVector2 {
        point - self.scroll.get()
    }

    /// Adds a collision rectangle and returns its handle.
    pub fn add_collision(&mut self, rect: Rect) -> ColliderId {
        self.colliders.push(rect);
        log::trace!("added collision {rect} ({} total)", self.colliders.len());

        ColliderId(self.colliders.len() - 1)
    }

    /// Returns the collision rectangle behind `id`.
    pub fn collision(&self, id: ColliderId) -> Result<Rect> {
        self.colliders.get(id.0).copied().ok_or(Error::InvalidIndex {
            index: id.0,
            len: self.colliders.len(),
        })
    }

    /// Replaces the collision rectangle behind `id`, e.g. after the object it belongs to moved.
    pub fn set_collision(&mut self, id: ColliderId, rect: Rect) -> Result<()> {
        let len = self.colliders.len();
        let collider = self
            .colliders
            .get_mut(id.0)
            .ok_or(Error::InvalidIndex { index: id.0, len })?;

        *collider = rect;
        Ok(())
    }

    /// Returns every collision rectangle in the order they were added.
    pub fn collisions(&self) -> &[Rect] {
        &self.colliders
    }

    /// Returns true if `rect` collides with any collision rectangle in the level.
    pub fn is_colliding(&self, rect: Rect) -> bool {
        self.colliders
            .iter()
            .any(|collider| collide_rect(*collider, rect))
    }

    /// Returns true if the collision rectangle behind `id` collides with any other one.
    pub fn is_collider_colliding(&self, id: ColliderId) -> Result<bool> {
        let rect = self.collision(id)?;

        Ok(self
            .colliders
            .iter()
            .enumerate()
            .any(|(index, collider)| index != id.0 && collide_rect(*collider, rect)))
    }
}
