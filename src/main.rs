//! Headless demo driver
//!
//! Stands in for the render host: owns the loop, clamps `dt`, holds the
//! settings, records the display trail, and logs ball state as the
//! simulation runs. A graphical front end would do exactly this, drawing
//! instead of logging.

use std::collections::VecDeque;
use std::path::Path;

use glam::Vec2;

use spin_hex::Settings;
use spin_hex::consts::{MAX_FRAME_DT, SIM_DT};
use spin_hex::sim::Simulation;

/// Display trail capacity; the trail is a driver-side concern, never the
/// core's.
const TRAIL_LENGTH: usize = 20;

/// Simulated demo duration in seconds
const DEMO_SECONDS: f32 = 10.0;

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::default(),
    };
    if let Err(e) = settings.validate() {
        log::error!("Invalid settings: {}", e);
        std::process::exit(1);
    }

    let mut sim = Simulation::new(&settings);
    let mut trail: VecDeque<Vec2> = VecDeque::with_capacity(TRAIL_LENGTH);

    log::info!(
        "Spinning hexagon: center=({}, {}), radius={}, spin={} rad/s",
        settings.hex_center.x,
        settings.hex_center.y,
        settings.hex_radius,
        settings.angular_velocity,
    );

    // Fixed 60 Hz stepping, the way an animation-frame loop would drive it.
    // A real host clamps its variable frame delta to MAX_FRAME_DT the same
    // way before handing it to the core.
    let steps = (DEMO_SECONDS / SIM_DT) as u32;
    for i in 0..steps {
        sim.advance(SIM_DT.min(MAX_FRAME_DT));

        trail.push_front(sim.ball.pos);
        trail.truncate(TRAIL_LENGTH);

        if i % 60 == 0 {
            log::info!(
                "t={:5.2}s pos=({:7.2}, {:7.2}) speed={:7.2}",
                i as f32 * SIM_DT,
                sim.ball.pos.x,
                sim.ball.pos.y,
                sim.ball.vel.length(),
            );
        }
    }

    log::info!(
        "Done after {:.1}s: pos=({:.2}, {:.2}), speed={:.2}, rotation={:.3} rad, {} trail points",
        DEMO_SECONDS,
        sim.ball.pos.x,
        sim.ball.pos.y,
        sim.ball.vel.length(),
        sim.hexagon.rotation,
        trail.len(),
    );
}
