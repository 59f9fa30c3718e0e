//! Spin Hex - a ball bouncing inside a spinning hexagon
//!
//! Core modules:
//! - `sim`: Deterministic physics simulation (geometry, collisions, integration)
//! - `settings`: Data-driven simulation configuration
//!
//! The crate is headless. Rendering and input belong to the host, which owns
//! the loop, calls [`sim::step`] once per frame with a clamped time delta,
//! and reads back ball/hexagon state to draw. `src/main.rs` is a minimal
//! such host that logs the trajectory instead of drawing it.

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Fixed driver timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Upper bound hosts must clamp `dt` to before calling `step`; the
    /// integrator assumes small steps and does not clamp on its own
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

    /// Container defaults
    pub const HEX_CENTER_X: f32 = 400.0;
    pub const HEX_CENTER_Y: f32 = 300.0;
    pub const HEX_RADIUS: f32 = 200.0;
    /// Container spin (radians/sec)
    pub const ANGULAR_VELOCITY: f32 = 0.5;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_MASS: f32 = 1.0;
    pub const BALL_START_SPEED: f32 = 200.0;

    /// Physics defaults
    pub const GRAVITY: f32 = 500.0;
    pub const AIR_FRICTION: f32 = 0.02;
    pub const BOUNCE_DAMPING: f32 = 0.85;
    pub const MIN_VELOCITY: f32 = 50.0;

    /// How far the containment fallback nudges an escaped ball back toward
    /// the hexagon center (tuned empirically)
    pub const CONTAINMENT_NUDGE: f32 = 5.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
