//! # Emitter
//!
//! A particle emitter owns a fixed pool of particles and decides the initial kinematics of each
//! one it spawns.
//!
//! For every spawned particle the emitter asks its [KinematicsSource] for canonical kinematics,
//! rotates them by the emission angle plus the current spread offset, mirrors them while an
//! alternating emitter faces backwards, and places the result relative to the emitter's position.

use crate::clock::Clock;
use crate::clock::MonotonicClock;
use crate::geometry::collide_rect;
use crate::level::Scroll;
use crate::math::rotation_clamp;
use crate::math::DVector2;
use crate::math::Scalar;
use crate::math::Vector2;
use crate::particle::EmissionBehavior;
use crate::particle::Instance;
use crate::particle::Kinematics;
use crate::particle::KinematicsSource;
use crate::render::Canvas;
use crate::style::ParticleStyle;
use crate::Error;
use crate::Result;

/// Lifespan of a spawned particle, in seconds.
pub const DEFAULT_LIFE_SPAN: f64 = 10.0;

/// Degrees a spread emitter turns after each spawned particle.
pub const DEFAULT_SPREAD_STEP: f64 = 20.0;

/// # Emitter Config
///
/// Settings an emitter is created with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EmitterConfig {
    /// Number of particle slots in the pool.
    pub capacity: usize,
    /// Lifespan of each spawned particle, in seconds.
    pub life_span: f64,
    /// Degrees a [EmissionBehavior::Spread] emitter turns after each particle.
    pub spread_step: f64,
    /// How the emission direction changes between particles.
    pub behavior: EmissionBehavior,
    /// Whether spawned particles are drawn facing their velocity.
    pub rotate_with_velocity: bool,
}

impl EmitterConfig {
    /// Returns the default config with the given pool capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Returns the config with the given particle lifespan.
    pub fn with_life_span(self, life_span: f64) -> Self {
        Self { life_span, ..self }
    }

    /// Returns the config with the given spread step.
    pub fn with_spread_step(self, spread_step: f64) -> Self {
        Self {
            spread_step,
            ..self
        }
    }

    /// Returns the config with the given emission behavior.
    pub fn with_behavior(self, behavior: EmissionBehavior) -> Self {
        Self { behavior, ..self }
    }

    /// Returns the config with particles drawn facing their velocity.
    pub fn with_rotate_with_velocity(self, rotate_with_velocity: bool) -> Self {
        Self {
            rotate_with_velocity,
            ..self
        }
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            life_span: DEFAULT_LIFE_SPAN,
            spread_step: DEFAULT_SPREAD_STEP,
            behavior: EmissionBehavior::Linear,
            rotate_with_velocity: false,
        }
    }
}

/// # Particle Emitter
pub struct ParticleEmitter {
    instances: Box<[Instance]>,
    position: DVector2,
    scroll: Scroll,
    emission_vector: DVector2,
    config: EmitterConfig,
    spread_angle_current: f64,
    forward: bool,
    kinematics: Box<dyn KinematicsSource>,
    style: Box<dyn ParticleStyle>,
    clock: Box<dyn Clock>,
}

impl ParticleEmitter {
    /// Returns an emitter at `position` with a pool of dead particles, emitting along the
    /// positive x-axis with [Kinematics::DEFAULT] and timed by a [MonotonicClock].
    pub fn new(
        position: DVector2,
        config: EmitterConfig,
        style: impl ParticleStyle + 'static,
    ) -> Self {
        Self {
            instances: vec![Instance::DEAD; config.capacity].into_boxed_slice(),
            position,
            scroll: Scroll::default(),
            emission_vector: DVector2::new(1.0, 0.0),
            config,
            spread_angle_current: 0.0,
            forward: true,
            kinematics: Box::new(Kinematics::DEFAULT),
            style: Box::new(style),
            clock: Box::new(MonotonicClock::new()),
        }
    }

    /// Returns the emitter with a different source of canonical kinematics.
    pub fn with_kinematics(mut self, kinematics: impl KinematicsSource + 'static) -> Self {
        self.kinematics = Box::new(kinematics);
        self
    }

    /// Returns the emitter timed by a different clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Returns the emitter's config.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Returns the number of particle slots.
    pub fn capacity(&self) -> usize {
        self.instances.len()
    }

    /// Returns every slot in the pool, dead ones included.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Returns the slot at `index`.
    pub fn instance(&self, index: usize) -> Result<&Instance> {
        self.instances.get(index).ok_or(Error::InvalidIndex {
            index,
            len: self.instances.len(),
        })
    }

    /// Returns the position new particles are placed relative to.
    pub fn position(&self) -> DVector2 {
        self.position
    }

    /// Moves the emitter. Particles already spawned keep their position.
    pub fn set_position(&mut self, position: DVector2) {
        self.position = position;
    }

    /// Sets the offset subtracted from particle positions when drawing. Stops following any
    /// shared scroll.
    pub fn set_scroll(&mut self, scroll: DVector2) {
        self.scroll = Scroll::new(scroll);
    }

    /// Follows a shared scroll offset, such as [Level::scroll_handle](crate::Level::scroll_handle).
    pub fn use_scroll(&mut self, scroll: Scroll) {
        self.scroll = scroll;
    }

    /// Returns the offset subtracted from particle positions when drawing.
    pub fn scroll(&self) -> DVector2 {
        self.scroll.get()
    }

    /// Sets whether particles spawned from now on are drawn facing their velocity.
    pub fn set_rotate_with_velocity(&mut self, rotate_with_velocity: bool) {
        self.config.rotate_with_velocity = rotate_with_velocity;
    }

    /// Returns the emission behavior.
    pub fn behavior(&self) -> EmissionBehavior {
        self.config.behavior
    }

    /// Changes the emission behavior and resets the spread offset and alternating direction.
    pub fn set_behavior(&mut self, behavior: EmissionBehavior) {
        self.config.behavior = behavior;
        self.spread_angle_current = 0.0;
        self.forward = true;
    }

    /// Returns the unit vector particles are emitted along.
    pub fn emission_vector(&self) -> DVector2 {
        self.emission_vector
    }

    /// Returns the angle, in degrees, the next particle will be emitted at.
    pub fn emission_angle(&self) -> f64 {
        self.emission_vector.horizontal_angle() + self.spread_angle_current
    }

    /// Points the emitter at `degrees` from the positive x-axis.
    pub fn set_emission_angle(&mut self, degrees: f64) {
        self.emission_vector = DVector2::from_angle(degrees, 1.0);
        log::trace!("emission vector set to {} from angle {degrees}", self.emission_vector);
    }

    /// Points the emitter along `vector`. A zero vector is rejected and the current direction
    /// is kept.
    pub fn set_emission_vector<T: Scalar>(&mut self, vector: Vector2<T>) -> Result<()> {
        let vector = DVector2::from(vector.as_dvec2());

        match vector.try_normalize() {
            Ok(normalized) => {
                self.emission_vector = normalized;
                log::trace!("emission vector set to {normalized}");
                Ok(())
            }
            Err(error) => {
                log::debug!("rejected emission vector {vector}: {error}");
                Err(error)
            }
        }
    }

    /// Spawns up to `count` particles into dead slots, scanning the pool from the start. Returns
    /// how many were spawned, fewer than `count` when the pool runs out of dead slots.
    pub fn spawn_particles(&mut self, count: usize) -> usize {
        let now = self.clock.now();
        let mut spawned = 0;

        for index in 0..self.instances.len() {
            if spawned == count {
                break;
            }
            if self.instances[index].is_alive() {
                continue;
            }

            let kinematics = self.next_kinematics();
            self.instances[index] = Instance::new(
                kinematics,
                self.config.life_span,
                self.config.rotate_with_velocity,
                now,
            );
            spawned += 1;
            self.advance_pattern();
        }

        if spawned < count {
            log::debug!(
                "particle pool exhausted: spawned {spawned} of {count} requested ({} slots)",
                self.instances.len()
            );
        }

        spawned
    }

    fn next_kinematics(&mut self) -> Kinematics {
        let mut kinematics = self
            .kinematics
            .initial_kinematics()
            .rotated(self.emission_angle());

        if !self.forward {
            kinematics = kinematics.opposite();
        }

        kinematics.position += self.position;
        kinematics
    }

    fn advance_pattern(&mut self) {
        match self.config.behavior {
            EmissionBehavior::Linear => {}
            EmissionBehavior::Spread => {
                self.spread_angle_current = rotation_clamp(
                    self.spread_angle_current + self.config.spread_step,
                    0.0,
                    360.0,
                );
            }
            EmissionBehavior::Alternating => {
                self.forward = !self.forward;
            }
        }
    }

    /// Advances every live particle by one step.
    pub fn update(&mut self) {
        let now = self.clock.now();
        for instance in self.instances.iter_mut() {
            instance.update(now);
        }
    }

    /// Draws every live particle that touches the canvas viewport and returns how many were drawn.
    pub fn draw(&self, canvas: &mut dyn Canvas) -> usize {
        let viewport = canvas.viewport();
        let mut drawn = 0;

        for instance in self.instances.iter().filter(|instance| instance.is_alive()) {
            let position = instance.position - self.scroll.get();
            if !collide_rect(self.style.footprint(instance, position), viewport) {
                continue;
            }

            self.style.draw(canvas, instance, position);
            drawn += 1;
        }

        drawn
    }

    /// Returns the number of live particles.
    pub fn alive_particles(&self) -> usize {
        self.instances
            .iter()
            .filter(|instance| instance.is_alive())
            .count()
    }
}
