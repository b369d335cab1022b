//! # Particle
//!
//! A particle lives in a fixed pool slot and is either alive or dead. It is dead while its
//! remaining lifespan is zero or less, and only an emitter brings it back.

use crate::math::DVector2;

/// # Kinematics
///
/// Position, velocity, and acceleration of a particle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Kinematics {
    /// Position, or displacement from the emitter for canonical kinematics.
    pub position: DVector2,
    /// Displacement per update.
    pub velocity: DVector2,
    /// Change in velocity per update.
    pub acceleration: DVector2,
}

impl Kinematics {
    /// Canonical kinematics emitters use unless given another source: one unit down and to the
    /// right, moving the same way, without acceleration.
    pub const DEFAULT: Self = Self::new(
        DVector2::new(1.0, 1.0),
        DVector2::new(1.0, 1.0),
        DVector2::new(0.0, 0.0),
    );

    /// Returns kinematics with the given vectors.
    pub const fn new(position: DVector2, velocity: DVector2, acceleration: DVector2) -> Self {
        Self {
            position,
            velocity,
            acceleration,
        }
    }

    /// Returns the kinematics rotated by `degrees` around the origin.
    pub fn rotated(self, degrees: f64) -> Self {
        Self {
            position: self.position.rotated(degrees, DVector2::zero()),
            velocity: self.velocity.rotated(degrees, DVector2::zero()),
            acceleration: self.acceleration.rotated(degrees, DVector2::zero()),
        }
    }

    /// Returns the kinematics with every vector pointing the opposite way.
    pub fn opposite(self) -> Self {
        Self {
            position: self.position.opposite(),
            velocity: self.velocity.opposite(),
            acceleration: self.acceleration.opposite(),
        }
    }
}

/// # Kinematics Source
///
/// Produces the canonical kinematics of each new particle: its state when the emission angle is
/// zero and the emitter is moving forward. The emitter rotates and mirrors the result.
pub trait KinematicsSource {
    /// Returns the canonical kinematics for the next particle.
    fn initial_kinematics(&mut self) -> Kinematics;
}

impl KinematicsSource for Kinematics {
    fn initial_kinematics(&mut self) -> Kinematics {
        *self
    }
}

impl<F: FnMut() -> Kinematics> KinematicsSource for F {
    fn initial_kinematics(&mut self) -> Kinematics {
        self()
    }
}

/// # Emission Behavior
///
/// How the emission direction changes from one spawned particle to the next.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EmissionBehavior {
    /// Every particle leaves in the emission direction.
    #[default]
    Linear,
    /// Each particle leaves a fixed step further around the circle than the previous one.
    Spread,
    /// Particles alternate between the emission direction and its opposite.
    Alternating,
}

/// # Instance
///
/// A single particle in an emitter's pool.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Instance {
    /// Current position in world coordinates.
    pub position: DVector2,
    /// Displacement applied on every update.
    pub velocity: DVector2,
    /// Change in velocity applied on every update.
    pub acceleration: DVector2,
    /// Seconds left before the particle dies.
    pub remaining_life_span: f64,
    /// Lifespan the particle was spawned with.
    pub original_life_span: f64,
    /// Time of the last update, in the emitter's clock.
    pub last_update_time: f64,
    /// Whether the particle is drawn facing its velocity.
    pub rotate_with_velocity: bool,
}

impl Instance {
    /// A dead particle at the origin.
    pub const DEAD: Self = Self {
        position: DVector2::new(0.0, 0.0),
        velocity: DVector2::new(0.0, 0.0),
        acceleration: DVector2::new(0.0, 0.0),
        remaining_life_span: 0.0,
        original_life_span: 0.0,
        last_update_time: 0.0,
        rotate_with_velocity: false,
    };

    /// Returns a particle with the given state, spawned at time `now`.
    pub fn new(
        kinematics: Kinematics,
        life_span: f64,
        rotate_with_velocity: bool,
        now: f64,
    ) -> Self {
        Self {
            position: kinematics.position,
            velocity: kinematics.velocity,
            acceleration: kinematics.acceleration,
            remaining_life_span: life_span,
            original_life_span: life_span,
            last_update_time: now,
            rotate_with_velocity,
        }
    }

    /// Returns true while the particle has lifespan left.
    pub fn is_alive(&self) -> bool {
        self.remaining_life_span > 0.0
    }

    /// Returns the particle's current kinematics.
    pub fn kinematics(&self) -> Kinematics {
        Kinematics::new(self.position, self.velocity, self.acceleration)
    }

    /// Advances the particle by one step and spends the time elapsed since the last update.
    /// Returns whether the particle is still alive.
    ///
    /// Movement is per call while the lifespan is per second, so particles move further per
    /// second at higher update rates.
    pub fn update(&mut self, now: f64) -> bool {
        if !self.is_alive() {
            return false;
        }

        self.position += self.velocity;
        self.velocity += self.acceleration;

        self.remaining_life_span -= now - self.last_update_time;
        if !self.is_alive() {
            return false;
        }

        self.last_update_time = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving() -> Kinematics {
        Kinematics::new(
            DVector2::new(0.0, 0.0),
            DVector2::new(2.0, 0.0),
            DVector2::new(0.0, 1.0),
        )
    }

    #[test]
    fn dead_is_not_alive() {
        assert!(!Instance::DEAD.is_alive());
        assert!(!Instance::default().is_alive());
    }

    #[test]
    fn new_with_life_span_is_alive() {
        let instance = Instance::new(moving(), 10.0, false, 3.0);

        assert!(instance.is_alive());
        assert_eq!(instance.original_life_span, 10.0);
        assert_eq!(instance.last_update_time, 3.0);
    }

    #[test]
    fn update_integrates_position_then_velocity() {
        let mut instance = Instance::new(moving(), 10.0, false, 0.0);

        assert!(instance.update(0.1));
        assert!(instance.update(0.2));

        assert_eq!(instance.position, DVector2::new(4.0, 1.0));
        assert_eq!(instance.velocity, DVector2::new(2.0, 2.0));
    }

    #[test]
    fn update_spends_elapsed_time() {
        let mut instance = Instance::new(moving(), 10.0, false, 5.0);

        instance.update(8.0);

        assert_eq!(instance.remaining_life_span, 7.0);
        assert_eq!(instance.last_update_time, 8.0);
    }

    #[test]
    fn update_past_life_span_returns_false() {
        let mut instance = Instance::new(moving(), 10.0, false, 0.0);

        assert!(!instance.update(10.0));
        assert!(!instance.is_alive());
    }

    #[test]
    fn update_dead_does_not_move() {
        let mut instance = Instance::DEAD;
        instance.velocity = DVector2::new(1.0, 1.0);

        assert!(!instance.update(1.0));
        assert_eq!(instance.position, DVector2::zero());
    }

    #[test]
    fn update_without_elapsed_time_still_moves() {
        let mut instance = Instance::new(moving(), 1.0, false, 0.0);

        instance.update(0.0);
        instance.update(0.0);

        assert_eq!(instance.position, DVector2::new(4.0, 1.0));
        assert_eq!(instance.remaining_life_span, 1.0);
    }

    #[test]
    fn kinematics_opposite_negates_every_vector() {
        let kinematics = Kinematics::DEFAULT.opposite();

        assert_eq!(kinematics.position, DVector2::new(-1.0, -1.0));
        assert_eq!(kinematics.velocity, DVector2::new(-1.0, -1.0));
        assert_eq!(kinematics.acceleration, DVector2::new(-0.0, -0.0));
    }

    #[test]
    fn kinematics_rotated_rotates_every_vector() {
        let kinematics = moving().rotated(90.0);

        assert!((kinematics.velocity - DVector2::new(0.0, 2.0)).distance() < 1e-12);
        assert!((kinematics.acceleration - DVector2::new(-1.0, 0.0)).distance() < 1e-12);
    }

    #[test]
    fn closure_source_returns_closure_result() {
        let mut calls = 0.0;
        let mut source = || {
            calls += 1.0;
            Kinematics::new(DVector2::new(calls, 0.0), DVector2::zero(), DVector2::zero())
        };

        assert_eq!(source.initial_kinematics().position.x, 1.0);
        assert_eq!(source.initial_kinematics().position.x, 2.0);
    }
}
