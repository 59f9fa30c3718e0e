//! Simulation state and tunable parameters
//!
//! `Ball` and `Hexagon` are owned exclusively by whoever drives the
//! simulation and are mutated in place each tick; `PhysicsParams` is
//! read-only to the core.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hexagon::Hexagon;
use super::tick::step;
use crate::Settings;
use crate::consts::*;

/// The bouncing ball.
///
/// `radius` and `mass` are fixed for the lifetime of a simulation; position
/// and velocity are mutated in place each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            mass,
        }
    }
}

/// Physics tunables, held by the host and read by the core each tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Downward acceleration (pixels/s^2), >= 0
    pub gravity: f32,
    /// Per-second drag factor in [0, ~0.1]; `air_friction * dt` must stay
    /// below 1 or the decay model flips the velocity sign
    pub air_friction: f32,
    /// Normal-speed restitution scale in (0, 1]; 1.0 is perfectly elastic
    pub bounce_damping: f32,
    /// Speed floor (pixels/s); a slower but moving ball is rescaled up to it
    pub min_velocity: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            air_friction: AIR_FRICTION,
            bounce_damping: BOUNCE_DAMPING,
            min_velocity: MIN_VELOCITY,
        }
    }
}

/// Owner of the complete simulation state.
///
/// Bundles ball, container, and tunables into one handle for hosts that
/// want it; [`step`] stays callable directly for hosts that hold the parts
/// themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub ball: Ball,
    pub hexagon: Hexagon,
    pub params: PhysicsParams,
    /// Container spin (radians/s)
    pub angular_velocity: f32,
}

impl Simulation {
    /// Build a simulation from settings. Call [`Settings::validate`] first;
    /// this constructor trusts its input.
    pub fn new(settings: &Settings) -> Self {
        Self {
            ball: Ball::new(
                settings.ball_start_pos,
                settings.ball_start_vel,
                settings.ball_radius,
                settings.ball_mass,
            ),
            hexagon: Hexagon::new(settings.hex_center, settings.hex_radius, 0.0),
            params: settings.physics,
            angular_velocity: settings.angular_velocity,
        }
    }

    /// Advance by `dt` seconds. The host clamps `dt` upstream (see
    /// [`crate::consts::MAX_FRAME_DT`]).
    pub fn advance(&mut self, dt: f32) {
        step(
            &mut self.ball,
            &mut self.hexagon,
            &self.params,
            self.angular_velocity,
            dt,
        );
    }

    /// Host-driven reposition: overwrite ball position and velocity in
    /// place, e.g. for a click-to-drop reset.
    pub fn reset_ball(&mut self, pos: Vec2, vel: Vec2) {
        self.ball.pos = pos;
        self.ball.vel = vel;
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
