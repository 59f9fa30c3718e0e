//! Collision detection and response against moving hexagon walls
//!
//! Detection works from the closest point on each wall segment rather than a
//! half-plane test, so a ball arriving near a vertex resolves against the
//! true contact point. Response reflects against the contact normal with
//! damping and carries part of the wall's rotation-induced motion into the
//! ball.

use glam::Vec2;

use super::hexagon::{Hexagon, LineSegment};

/// Result of a collision check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact point on the wall segment (if hit)
    pub point: Vec2,
    /// Unit normal pointing from the wall toward the ball center (if hit);
    /// zero in the degenerate case where the center sits exactly on the wall
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Closest point on a segment to `point`.
///
/// Projects onto the segment's carrier line and clamps the parameter to
/// [0, 1]. A zero-length segment yields its start point (parameter 0).
pub fn closest_point_on_segment(point: Vec2, segment: &LineSegment) -> Vec2 {
    let line = segment.end - segment.start;
    let len_sq = line.length_squared();
    if len_sq == 0.0 {
        return segment.start;
    }
    let t = ((point - segment.start).dot(line) / len_sq).clamp(0.0, 1.0);
    segment.start + line * t
}

/// Check a circle against a wall segment.
///
/// Hit iff the distance from the circle center to the closest point on the
/// segment is strictly less than the radius; touching exactly is a miss.
/// The contact normal points from the closest point toward the circle
/// center. It is zero only when the two coincide; callers skip the
/// normal-dependent response for that tick.
pub fn circle_segment_collision(
    center: Vec2,
    radius: f32,
    segment: &LineSegment,
) -> CollisionResult {
    let closest = closest_point_on_segment(center, segment);
    let offset = center - closest;
    let distance = offset.length();

    if distance >= radius {
        return CollisionResult::miss();
    }

    CollisionResult {
        hit: true,
        point: closest,
        normal: offset.normalize_or_zero(),
        penetration: radius - distance,
    }
}

/// Instantaneous velocity of a point on the rotating container boundary.
///
/// Pure rotation about the hexagon center: `omega x r` in 2D, i.e.
/// `(-dy * omega, dx * omega)` for `(dx, dy) = point - center`.
pub fn wall_velocity_at(point: Vec2, hexagon: &Hexagon, angular_velocity: f32) -> Vec2 {
    let r = point - hexagon.center;
    Vec2::new(-r.y, r.x) * angular_velocity
}

/// Damped reflection against a moving wall.
///
/// Works on the velocity relative to the wall, so a contact that is already
/// separating (relative normal speed > 0) comes back unchanged; that keeps
/// two nearby edges from double-counting one bounce within a tick. Otherwise
/// the normal component is reversed scaled by `damping` (1.0 = perfectly
/// elastic), and a `1 - damping` share of the wall velocity is carried into
/// the ball so a spinning container drags the ball with it.
pub fn resolve_bounce(velocity: Vec2, normal: Vec2, wall_velocity: Vec2, damping: f32) -> Vec2 {
    let relative = velocity - wall_velocity;
    let normal_speed = relative.dot(normal);

    if normal_speed > 0.0 {
        return velocity;
    }

    velocity - 2.0 * normal_speed * damping * normal + wall_velocity * (1.0 - damping)
}
