#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(missing_docs)]

//! # Flare
//!
//! ![MIT](https://img.shields.io/badge/license-MIT-blue.svg)
//!
//! ## What is Flare?
//!
//! Flare is a small 2D engine core built around a particle system. It provides:
//! - Generic 2D vectors with angle, rotation, and pixel conversions
//! - Quads, lines, ray casting, and rectangle collision for hit-testing
//! - Particle instances with simple per-frame kinematics and a life span
//! - A fixed-capacity particle emitter with linear, spread, and alternating emission patterns
//! - Levels with collision rectangles and a scroll offset shared with emitters
//! - Keyboard and mouse input tracking with key bindings
//! - A window host loop driving an [Application]
//!
//! Drawing goes through the [Canvas] trait, so the engine does not depend on any particular
//! renderer.

pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

pub use crate::app::Application;
pub use crate::app::ApplicationState;
pub use crate::app::Event;
pub use crate::clock::Clock;
pub use crate::clock::ManualClock;
pub use crate::clock::MonotonicClock;
pub use crate::emitter::EmitterConfig;
pub use crate::emitter::ParticleEmitter;
pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::geometry::collide_rect;
pub use crate::geometry::ray_cast;
pub use crate::geometry::Line;
pub use crate::geometry::Quad;
pub use crate::geometry::Rect;
pub use crate::input::Input;
pub use crate::level::ColliderId;
pub use crate::level::Level;
pub use crate::level::Scroll;
pub use crate::math::rotation_clamp;
pub use crate::math::DVector2;
pub use crate::math::IVector2;
pub use crate::math::Transform;
pub use crate::math::Vector2;
pub use crate::particle::EmissionBehavior;
pub use crate::particle::Instance;
pub use crate::particle::Kinematics;
pub use crate::particle::KinematicsSource;
pub use crate::random::JitteredKinematics;
pub use crate::random::Random;
pub use crate::render::Canvas;
pub use crate::render::Color;
pub use crate::render::Rotation;
pub use crate::render::TextureId;
pub use crate::sprite::Sprite;
pub use crate::style::ParticleStyle;
pub use crate::style::SpriteStyle;
pub use crate::style::StreakStyle;
pub use crate::ui::Button;

mod app;
mod clock;
pub mod emitter;
mod error;
mod geometry;
mod input;
mod level;
pub mod math;
mod particle;
mod random;
mod render;
mod sprite;
mod style;
mod ui;
