//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - No rendering or platform dependencies
//! - No hidden time sources; the host supplies `dt`
//! - Stable edge iteration order (by vertex index)

pub mod collision;
pub mod hexagon;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResult, circle_segment_collision, closest_point_on_segment, resolve_bounce,
    wall_velocity_at,
};
pub use hexagon::{HEX_SIDES, Hexagon, LineSegment};
pub use state::{Ball, PhysicsParams, Simulation};
pub use tick::step;
