//! Simulation settings
//!
//! The host owns every tunable; the core only reads them. Settings are
//! plain JSON on disk so a driver can be pointed at a different scenario
//! without recompiling.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;
use crate::sim::PhysicsParams;

/// Host-side configuration for one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Container center in screen coordinates
    pub hex_center: Vec2,
    /// Container circumradius, > 0
    pub hex_radius: f32,
    /// Container spin (radians/s)
    pub angular_velocity: f32,
    /// Ball radius, > 0
    pub ball_radius: f32,
    /// Ball mass, > 0
    pub ball_mass: f32,
    /// Ball spawn position
    pub ball_start_pos: Vec2,
    /// Ball spawn velocity
    pub ball_start_vel: Vec2,
    /// Physics tunables
    pub physics: PhysicsParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hex_center: Vec2::new(HEX_CENTER_X, HEX_CENTER_Y),
            hex_radius: HEX_RADIUS,
            angular_velocity: ANGULAR_VELOCITY,
            ball_radius: BALL_RADIUS,
            ball_mass: BALL_MASS,
            ball_start_pos: Vec2::new(HEX_CENTER_X, HEX_CENTER_Y - 100.0),
            ball_start_vel: Vec2::new(BALL_START_SPEED, 0.0),
            physics: PhysicsParams::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults if the file
    /// is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON.
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to write settings to {}: {}", path.display(), e);
                } else {
                    log::info!("Settings saved to {}", path.display());
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }

    /// Reject configuration the core treats as a programmer error. Call
    /// before constructing a simulation; the core itself never validates
    /// mid-run.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.hex_radius > 0.0) {
            return Err(format!("hex_radius must be > 0, got {}", self.hex_radius));
        }
        if !(self.ball_radius > 0.0) {
            return Err(format!("ball_radius must be > 0, got {}", self.ball_radius));
        }
        if !(self.ball_mass > 0.0) {
            return Err(format!("ball_mass must be > 0, got {}", self.ball_mass));
        }
        let p = &self.physics;
        if !(p.gravity >= 0.0) {
            return Err(format!("gravity must be >= 0, got {}", p.gravity));
        }
        if !(p.air_friction >= 0.0) {
            return Err(format!("air_friction must be >= 0, got {}", p.air_friction));
        }
        if !(p.bounce_damping > 0.0 && p.bounce_damping <= 1.0) {
            return Err(format!(
                "bounce_damping must be in (0, 1], got {}",
                p.bounce_damping
            ));
        }
        if !(p.min_velocity >= 0.0) {
            return Err(format!("min_velocity must be >= 0, got {}", p.min_velocity));
        }
        Ok(())
    }
}
