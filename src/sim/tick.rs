//! Per-tick integration
//!
//! One [`step`] call fully advances ball and container state for an elapsed
//! `dt`. The host owns the loop and must clamp `dt` upstream (see
//! [`crate::consts::MAX_FRAME_DT`]); the step assumes `dt >= 0` and finite,
//! and assumes `air_friction * dt < 1`.

use glam::Vec2;

use super::collision::{circle_segment_collision, resolve_bounce, wall_velocity_at};
use super::hexagon::Hexagon;
use super::state::{Ball, PhysicsParams};
use crate::consts::CONTAINMENT_NUDGE;

/// Advance the simulation by one tick, mutating `ball` and
/// `hexagon.rotation` in place.
///
/// Order within a tick: rotation advance, gravity, air drag, position
/// integration, per-edge collision response, containment fallback,
/// minimum-speed floor. A `dt` of zero is an exact no-op.
pub fn step(
    ball: &mut Ball,
    hexagon: &mut Hexagon,
    params: &PhysicsParams,
    angular_velocity: f32,
    dt: f32,
) {
    if dt == 0.0 {
        return;
    }

    hexagon.rotation += angular_velocity * dt;

    // Gravity pulls toward +y (screen coordinates); drag decays both axes.
    ball.vel.y += params.gravity * dt;
    ball.vel *= 1.0 - params.air_friction * dt;
    ball.pos += ball.vel * dt;

    // Walls are recomputed from the post-rotation hexagon. Each edge
    // responds independently in vertex order; near a vertex two edges may
    // both contribute within the same tick, and resolve_bounce skips
    // contacts that are already separating.
    let edges = hexagon.edges();
    for segment in &edges {
        let contact = circle_segment_collision(ball.pos, ball.radius, segment);
        if !contact.hit {
            continue;
        }
        if contact.normal == Vec2::ZERO {
            // Center exactly on the wall: no defined direction this tick.
            continue;
        }
        let wall_vel = wall_velocity_at(contact.point, hexagon, angular_velocity);
        ball.vel = resolve_bounce(ball.vel, contact.normal, wall_vel, params.bounce_damping);
        ball.pos += contact.normal * contact.penetration;
    }

    // Tunneling fallback: per-edge pushout can leave a very fast ball
    // outside, so nudge it back toward the center.
    if !hexagon.contains_point(ball.pos) {
        let to_center = (hexagon.center - ball.pos).normalize_or_zero();
        ball.pos += to_center * CONTAINMENT_NUDGE;
    }

    // Keep the ball from settling in the well of the spinning container; a
    // ball at exact rest stays at rest.
    let speed = ball.vel.length();
    if speed > 0.0 && speed < params.min_velocity {
        ball.vel *= params.min_velocity / speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CONTAINMENT_NUDGE;

    fn reference_setup() -> (Ball, Hexagon, PhysicsParams) {
        let ball = Ball::new(
            Vec2::new(400.0, 200.0),
            Vec2::new(200.0, 0.0),
            10.0,
            1.0,
        );
        let hexagon = Hexagon::new(Vec2::new(400.0, 300.0), 200.0, 0.0);
        let params = PhysicsParams {
            gravity: 500.0,
            air_friction: 0.02,
            bounce_damping: 0.85,
            min_velocity: 50.0,
        };
        (ball, hexagon, params)
    }

    /// Frictionless, gravity-free parameters for isolating one mechanism.
    fn inert_params() -> PhysicsParams {
        PhysicsParams {
            gravity: 0.0,
            air_friction: 0.0,
            bounce_damping: 1.0,
            min_velocity: 0.0,
        }
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let (mut ball, mut hexagon, params) = reference_setup();
        let (ball_before, rotation_before) = (ball, hexagon.rotation);

        step(&mut ball, &mut hexagon, &params, 0.5, 0.0);

        assert_eq!(ball.pos, ball_before.pos);
        assert_eq!(ball.vel, ball_before.vel);
        assert_eq!(hexagon.rotation, rotation_before);
    }

    #[test]
    fn test_free_flight_reference_scenario() {
        // Ball starts well inside the hexagon: no collision this tick, the
        // position advances by roughly vel * dt, and the rotation advances
        // by exactly angular_velocity * dt.
        let (mut ball, mut hexagon, params) = reference_setup();
        let dt = 0.016;

        step(&mut ball, &mut hexagon, &params, 0.5, dt);

        assert!((hexagon.rotation - 0.008).abs() < 1e-6);
        assert!((ball.pos - Vec2::new(403.2, 200.13)).length() < 0.1);
        // Gravity accelerated the fall, drag shaved both components.
        assert!(ball.vel.y > 0.0);
        assert!(ball.vel.x < 200.0);
    }

    #[test]
    fn test_head_on_bounce_flips_normal_component() {
        // Stationary hexagon, perfectly elastic: a ball driven straight
        // into a wall comes back with its normal speed negated.
        let mut hexagon = Hexagon::new(Vec2::ZERO, 100.0, 0.0);
        let edge = hexagon.edges()[0];
        let n = edge.outward_normal();
        let mid = (edge.start + edge.end) * 0.5;

        let mut ball = Ball::new(mid - n * 5.0, n * 300.0, 10.0, 1.0);
        let params = inert_params();

        step(&mut ball, &mut hexagon, &params, 0.0, 0.001);

        assert!((ball.vel.dot(n) + 300.0).abs() < 1e-2);
        let tangent = Vec2::new(-n.y, n.x);
        assert!(ball.vel.dot(tangent).abs() < 1e-2);
        // Pushout separated the ball from the wall by its radius.
        assert!(hexagon.contains_point(ball.pos));
    }

    #[test]
    fn test_pushout_resolves_penetration() {
        let mut hexagon = Hexagon::new(Vec2::ZERO, 100.0, 0.0);
        let edge = hexagon.edges()[2];
        let n = edge.outward_normal();
        let mid = (edge.start + edge.end) * 0.5;

        // Overlapping the wall by half the radius, drifting outward slowly.
        let mut ball = Ball::new(mid - n * 5.0, n * 1.0, 10.0, 1.0);
        let params = inert_params();

        step(&mut ball, &mut hexagon, &params, 0.0, 0.001);

        let contact = super::super::collision::closest_point_on_segment(ball.pos, &edge);
        assert!((ball.pos - contact).length() >= ball.radius - 1e-3);
    }

    #[test]
    fn test_spinning_wall_imparts_tangential_motion() {
        // With damping < 1 the bounce carries a share of the wall velocity,
        // so a radially launched ball picks up a tangential component.
        let mut hexagon = Hexagon::new(Vec2::ZERO, 100.0, 0.0);
        let edge = hexagon.edges()[0];
        let n = edge.outward_normal();
        let mid = (edge.start + edge.end) * 0.5;

        let mut ball = Ball::new(mid - n * 5.0, n * 300.0, 10.0, 1.0);
        let params = PhysicsParams {
            bounce_damping: 0.85,
            ..inert_params()
        };
        let angular_velocity = 2.0;

        step(&mut ball, &mut hexagon, &params, angular_velocity, 0.001);

        let tangent = Vec2::new(-n.y, n.x);
        assert!(ball.vel.dot(tangent).abs() > 1e-3);
        // Still bounced back inward.
        assert!(ball.vel.dot(n) < 0.0);
    }

    #[test]
    fn test_containment_fallback_nudges_toward_center() {
        let mut hexagon = Hexagon::new(Vec2::ZERO, 100.0, 0.0);
        let mut ball = Ball::new(Vec2::new(500.0, 0.0), Vec2::ZERO, 10.0, 1.0);
        let params = inert_params();

        step(&mut ball, &mut hexagon, &params, 0.0, 0.016);

        assert!((ball.pos - Vec2::new(500.0 - CONTAINMENT_NUDGE, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_minimum_speed_floor_rescales() {
        let mut hexagon = Hexagon::new(Vec2::ZERO, 100.0, 0.0);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 10.0, 1.0);
        let params = PhysicsParams {
            min_velocity: 50.0,
            ..inert_params()
        };

        step(&mut ball, &mut hexagon, &params, 0.0, 0.016);

        assert!((ball.vel.length() - 50.0).abs() < 1e-3);
        assert!(ball.vel.x > 0.0 && ball.vel.y == 0.0);
    }

    #[test]
    fn test_minimum_speed_floor_leaves_rest_alone() {
        // Zero speed has no direction to rescale along.
        let mut hexagon = Hexagon::new(Vec2::ZERO, 100.0, 0.0);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 10.0, 1.0);
        let params = PhysicsParams {
            min_velocity: 50.0,
            ..inert_params()
        };

        step(&mut ball, &mut hexagon, &params, 0.0, 0.016);

        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_ball_stays_contained_over_many_ticks() {
        // A long spin at the reference parameters never loses the ball.
        let (mut ball, mut hexagon, params) = reference_setup();
        let dt = 1.0 / 60.0;

        for _ in 0..3600 {
            step(&mut ball, &mut hexagon, &params, 0.5, dt);
            assert!(
                (ball.pos - hexagon.center).length() <= hexagon.radius + ball.radius + 1.0,
                "ball escaped to {:?}",
                ball.pos
            );
        }
    }
}
