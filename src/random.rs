//! # Random
//!
//! Seedable random numbers passed explicitly to whatever needs them.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::math::DVector2;
use crate::particle::Kinematics;
use crate::particle::KinematicsSource;

/// # Random
///
/// Random number generator with engine-friendly helpers. Two generators created with the same
/// seed produce the same sequence.
#[derive(Clone, Debug)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Returns a generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Returns an integer in `[min, max)`, or `min` if the range is empty.
    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Returns a fraction in `[0, 1)` with `precision` possible steps.
    pub fn percent(&mut self, precision: u32) -> f64 {
        if precision == 0 {
            return 0.0;
        }
        f64::from(self.rng.gen_range(0..precision)) / f64::from(precision)
    }

    /// Returns a float in `[min, max)`, or `min` if the range is empty.
    pub fn double(&mut self, min: f64, max: f64) -> f64 {
        if max.partial_cmp(&min) != Some(std::cmp::Ordering::Greater) {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}

/// # Jittered Kinematics
///
/// Canonical kinematics whose velocity is nudged by a random amount for every particle.
#[derive(Clone, Debug)]
pub struct JitteredKinematics {
    base: Kinematics,
    velocity_jitter: f64,
    random: Random,
}

impl JitteredKinematics {
    /// Returns a source that adds up to `velocity_jitter` on each axis to `base`'s velocity.
    pub fn new(base: Kinematics, velocity_jitter: f64, random: Random) -> Self {
        Self {
            base,
            velocity_jitter: velocity_jitter.abs(),
            random,
        }
    }
}

impl KinematicsSource for JitteredKinematics {
    fn initial_kinematics(&mut self) -> Kinematics {
        let jitter = DVector2::new(
            self.random.double(-self.velocity_jitter, self.velocity_jitter),
            self.random.double(-self.velocity_jitter, self.velocity_jitter),
        );

        Kinematics {
            velocity: self.base.velocity + jitter,
            ..self.base
        }
    }
}
